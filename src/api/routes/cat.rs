//! This module defines the HTTP routes for cat operations.
//! Handlers extract the request pieces and delegate to the cat controller.

use crate::{
    api::controllers::cat,
    models::{CatCreateRequest, CatId, DefaultAppState},
};
use actix_web::{delete, get, post, web, Responder};

/// Retrieves a single cat by id.
#[get("/cat/single/{cat_id}")]
async fn get_cat(
    cat_id: web::Path<CatId>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    cat::get_cat(cat_id.into_inner(), data).await
}

/// Creates a new cat.
#[post("/cat/new")]
async fn create_cat(
    request: web::Json<CatCreateRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    cat::create_cat(request.into_inner(), data).await
}

/// Deletes a cat by id.
#[delete("/cat/delete/{cat_id}")]
async fn delete_cat(
    cat_id: web::Path<String>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    cat::delete_cat(cat_id.into_inner(), data).await
}

/// Lists all cats.
#[get("/cat/list")]
async fn list_cats(data: web::ThinData<DefaultAppState>) -> impl Responder {
    cat::list_cats(data).await
}

/// Configures the cat routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_cat)
        .service(create_cat)
        .service(delete_cat)
        .service(list_cats);
}

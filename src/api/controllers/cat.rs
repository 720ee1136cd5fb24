//! # Cats Controller
//!
//! Handles HTTP endpoints for cat operations:
//! - Listing cats
//! - Getting a cat by id
//! - Creating cats
//! - Deleting cats

use actix_web::HttpResponse;
use eyre::Result;
use log::debug;

use crate::{
    models::{ApiError, Cat, CatCreateRequest, CatId, CatResponse, ThinDataAppState},
    repositories::CatRepository,
};

/// Lists every stored cat ordered by id.
pub async fn list_cats<CR>(state: ThinDataAppState<CR>) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository,
{
    let cats = state.cat_service.list_all().await?;

    let response: Vec<CatResponse> = cats.into_iter().map(CatResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Retrieves a single cat.
///
/// # Returns
///
/// The cat, or `404` when no cat has the given id.
pub async fn get_cat<CR>(cat_id: CatId, state: ThinDataAppState<CR>) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository,
{
    match state.cat_service.get_by_id(cat_id).await? {
        Some(cat) => Ok(HttpResponse::Ok().json(CatResponse::from(cat))),
        None => Err(ApiError::NotFound(format!(
            "Cat with ID {} not found",
            cat_id
        ))),
    }
}

/// Validates and stores a new cat.
///
/// # Returns
///
/// The stored cat with its assigned id, `400` on validation failure or `409`
/// when an identical cat already exists.
pub async fn create_cat<CR>(
    request: CatCreateRequest,
    state: ThinDataAppState<CR>,
) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository,
{
    let cat = Cat::try_from(request)?;
    let created = state.cat_service.create(cat).await?;

    Ok(HttpResponse::Ok().json(CatResponse::from(created)))
}

/// Deletes a cat. An id that is absent or not a number is treated as already deleted.
pub async fn delete_cat<CR>(cat_id: String, state: ThinDataAppState<CR>) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository,
{
    match cat_id.trim().parse::<CatId>() {
        Ok(id) => state.cat_service.delete(id).await?,
        Err(_) => debug!("Ignoring delete for malformed cat id '{}'", cat_id),
    }

    Ok(HttpResponse::Ok().finish())
}

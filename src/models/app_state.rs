//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use actix_web::web::ThinData;

use crate::{
    repositories::{CatRepository, CatRepositoryStorage},
    services::CatService,
};

pub struct AppState<CR: CatRepository> {
    pub cat_service: Arc<CatService<CR>>,
}

impl<CR: CatRepository> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            cat_service: Arc::clone(&self.cat_service),
        }
    }
}

impl<CR: CatRepository> AppState<CR> {
    pub fn new(cat_repository: Arc<CR>) -> Self {
        Self {
            cat_service: Arc::new(CatService::new(cat_repository)),
        }
    }

    pub fn cat_service(&self) -> Arc<CatService<CR>> {
        Arc::clone(&self.cat_service)
    }
}

/// The concrete application state type used by the server.
pub type DefaultAppState = AppState<CatRepositoryStorage>;

pub type ThinDataAppState<CR> = ThinData<AppState<CR>>;

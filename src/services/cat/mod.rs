//! Cat record service.
//!
//! Applies validation and the duplicate guard before records reach the
//! repository, and turns repository absence into `None` for reads and a no-op
//! for deletes.

use std::sync::Arc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    metrics::record_cat_operation,
    models::{ApiError, Cat, CatId, CatRepoModel, CatValidationError, RepositoryError},
    repositories::CatRepository,
};

#[derive(Debug, Error)]
pub enum CatServiceError {
    #[error(transparent)]
    ValidationFailed(#[from] CatValidationError),

    #[error("A cat with the same name, birth date, owner and favorite food already exists")]
    DuplicateRecord,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CatServiceError {
    fn outcome(&self) -> &'static str {
        match self {
            CatServiceError::ValidationFailed(_) => "invalid",
            CatServiceError::DuplicateRecord => "duplicate",
            CatServiceError::Repository(_) => "error",
        }
    }
}

impl From<CatServiceError> for ApiError {
    fn from(error: CatServiceError) -> Self {
        match error {
            CatServiceError::ValidationFailed(e) => e.into(),
            e @ CatServiceError::DuplicateRecord => ApiError::Conflict(e.to_string()),
            CatServiceError::Repository(e) => e.into(),
        }
    }
}

pub struct CatService<CR: CatRepository> {
    cat_repository: Arc<CR>,
}

impl<CR: CatRepository> CatService<CR> {
    pub fn new(cat_repository: Arc<CR>) -> Self {
        Self { cat_repository }
    }

    /// All stored cats ordered by id.
    pub async fn list_all(&self) -> Result<Vec<CatRepoModel>, CatServiceError> {
        match self.cat_repository.list_all().await {
            Ok(cats) => {
                record_cat_operation("list", "success");
                Ok(cats)
            }
            Err(e) => {
                record_cat_operation("list", "error");
                Err(e.into())
            }
        }
    }

    /// Returns `None` when no cat has the given id.
    pub async fn get_by_id(&self, id: CatId) -> Result<Option<CatRepoModel>, CatServiceError> {
        match self.cat_repository.get_by_id(id).await {
            Ok(cat) => {
                record_cat_operation("get", "success");
                Ok(Some(cat))
            }
            Err(RepositoryError::NotFound(_)) => {
                debug!("Cat {} not found", id);
                record_cat_operation("get", "not_found");
                Ok(None)
            }
            Err(e) => {
                record_cat_operation("get", "error");
                Err(e.into())
            }
        }
    }

    /// Validates and stores a new cat.
    ///
    /// Fails with `DuplicateRecord` when a cat with the same identity is already
    /// stored, including when a concurrent create wins the race to the store.
    pub async fn create(&self, cat: Cat) -> Result<CatRepoModel, CatServiceError> {
        let result = self.try_create(cat).await;
        match &result {
            Ok(_) => record_cat_operation("create", "success"),
            Err(e) => record_cat_operation("create", e.outcome()),
        }
        result
    }

    async fn try_create(&self, cat: Cat) -> Result<CatRepoModel, CatServiceError> {
        cat.validate()?;

        if let Some(existing) = self.cat_repository.find_by_identity(&cat.identity()).await? {
            warn!(
                "Rejected duplicate of cat {} named {}",
                existing.id, existing.name
            );
            return Err(CatServiceError::DuplicateRecord);
        }

        match self.cat_repository.create(cat).await {
            Ok(created) => {
                info!("Created cat {} with ID {}", created.name, created.id);
                Ok(created)
            }
            Err(RepositoryError::ConstraintViolation(msg)) => {
                warn!("Concurrent duplicate create rejected by store: {}", msg);
                Err(CatServiceError::DuplicateRecord)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the cat if it exists; deleting an absent id succeeds.
    pub async fn delete(&self, id: CatId) -> Result<(), CatServiceError> {
        match self.cat_repository.delete_by_id(id).await {
            Ok(()) => {
                info!("Deleted cat {}", id);
                record_cat_operation("delete", "success");
                Ok(())
            }
            Err(RepositoryError::NotFound(_)) => {
                debug!("Delete of absent cat {} ignored", id);
                record_cat_operation("delete", "not_found");
                Ok(())
            }
            Err(e) => {
                record_cat_operation("delete", "error");
                Err(e.into())
            }
        }
    }
}

//! Cat Repository Module
//!
//! Persistence layer for cat records. Two implementations are provided:
//!
//! - [`InMemoryCatRepository`]: a mutex-guarded store for tests and development
//! - [`RedisCatRepository`]: Redis-backed storage for production environments
//!
//! Both assign ids on insert and enforce the identity uniqueness constraint
//! atomically, so concurrent identical inserts cannot both succeed.

mod cat_in_memory;
mod cat_redis;

pub use cat_in_memory::*;
pub use cat_redis::*;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;

use crate::models::{Cat, CatId, CatIdentity, CatRepoModel, RepositoryError};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait CatRepository: Send + Sync + 'static {
    /// Stores a new cat and returns it with its assigned id.
    ///
    /// Fails with `ConstraintViolation` when a cat with the same identity exists.
    async fn create(&self, cat: Cat) -> Result<CatRepoModel, RepositoryError>;
    async fn get_by_id(&self, id: CatId) -> Result<CatRepoModel, RepositoryError>;
    async fn find_by_identity(
        &self,
        identity: &CatIdentity,
    ) -> Result<Option<CatRepoModel>, RepositoryError>;
    /// All cats ordered by id.
    async fn list_all(&self) -> Result<Vec<CatRepoModel>, RepositoryError>;
    async fn delete_by_id(&self, id: CatId) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
    async fn has_entries(&self) -> Result<bool, RepositoryError>;
    async fn drop_all_entries(&self) -> Result<(), RepositoryError>;
}

/// Enum wrapper for different cat repository implementations
#[derive(Debug)]
pub enum CatRepositoryStorage {
    InMemory(InMemoryCatRepository),
    Redis(RedisCatRepository),
}

impl CatRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryCatRepository::new())
    }

    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisCatRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl CatRepository for CatRepositoryStorage {
    async fn create(&self, cat: Cat) -> Result<CatRepoModel, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.create(cat).await,
            CatRepositoryStorage::Redis(repo) => repo.create(cat).await,
        }
    }

    async fn get_by_id(&self, id: CatId) -> Result<CatRepoModel, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.get_by_id(id).await,
            CatRepositoryStorage::Redis(repo) => repo.get_by_id(id).await,
        }
    }

    async fn find_by_identity(
        &self,
        identity: &CatIdentity,
    ) -> Result<Option<CatRepoModel>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.find_by_identity(identity).await,
            CatRepositoryStorage::Redis(repo) => repo.find_by_identity(identity).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<CatRepoModel>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.list_all().await,
            CatRepositoryStorage::Redis(repo) => repo.list_all().await,
        }
    }

    async fn delete_by_id(&self, id: CatId) -> Result<(), RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.delete_by_id(id).await,
            CatRepositoryStorage::Redis(repo) => repo.delete_by_id(id).await,
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.count().await,
            CatRepositoryStorage::Redis(repo) => repo.count().await,
        }
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.has_entries().await,
            CatRepositoryStorage::Redis(repo) => repo.has_entries().await,
        }
    }

    async fn drop_all_entries(&self) -> Result<(), RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.drop_all_entries().await,
            CatRepositoryStorage::Redis(repo) => repo.drop_all_entries().await,
        }
    }
}

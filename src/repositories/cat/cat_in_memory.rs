//! In-memory cat repository.
//!
//! Records, the identity index and the id sequence live behind a single
//! `Mutex`, so the duplicate check and the insert happen under one lock.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use log::debug;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    models::{Cat, CatId, CatIdentity, CatRepoModel, RepositoryError},
    repositories::CatRepository,
};

#[derive(Debug)]
struct CatStore {
    records: BTreeMap<CatId, CatRepoModel>,
    identities: HashMap<CatIdentity, CatId>,
    next_id: CatId,
}

impl CatStore {
    fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            identities: HashMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug)]
pub struct InMemoryCatRepository {
    store: Mutex<CatStore>,
}

impl InMemoryCatRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(CatStore::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }
}

impl Default for InMemoryCatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatRepository for InMemoryCatRepository {
    async fn create(&self, cat: Cat) -> Result<CatRepoModel, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        let identity = cat.identity();
        if let Some(existing) = store.identities.get(&identity) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Cat with the same identity already exists with ID {}",
                existing
            )));
        }

        let id = store.next_id;
        store.next_id += 1;

        let model = CatRepoModel::from_cat(id, cat);
        store.identities.insert(identity, id);
        store.records.insert(id, model.clone());
        debug!("Stored cat {} with ID {}", model.name, id);
        Ok(model)
    }

    async fn get_by_id(&self, id: CatId) -> Result<CatRepoModel, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        match store.records.get(&id) {
            Some(model) => Ok(model.clone()),
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID {} not found",
                id
            ))),
        }
    }

    async fn find_by_identity(
        &self,
        identity: &CatIdentity,
    ) -> Result<Option<CatRepoModel>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store
            .identities
            .get(identity)
            .and_then(|id| store.records.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<CatRepoModel>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.records.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: CatId) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        match store.records.remove(&id) {
            Some(model) => {
                store.identities.remove(&model.identity());
                debug!("Deleted cat with ID {}", id);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID {} not found",
                id
            ))),
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.records.len())
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(!store.records.is_empty())
    }

    // The id sequence survives so ids are never handed out twice.
    async fn drop_all_entries(&self) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store.records.clear();
        store.identities.clear();
        Ok(())
    }
}

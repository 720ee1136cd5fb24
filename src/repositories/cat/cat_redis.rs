//! Redis-backed implementation of the CatRepository.
//!
//! Key layout under the configured prefix:
//!
//! - `{prefix}:cat:{id}`: JSON record
//! - `{prefix}:cat_list`: set of stored ids
//! - `{prefix}:cat_id_seq`: id sequence (INCR)
//! - `{prefix}:cat_identity:{digest}`: id holding a given identity
//!
//! Creating and deleting a cat run as Lua scripts so the identity key and the
//! record it points to always change together. An identity key whose record is
//! gone no longer blocks a create; the script takes it over.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use lazy_static::lazy_static;
use log::{debug, error, warn};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Script};

use crate::models::{Cat, CatId, CatIdentity, CatRepoModel, RepositoryError};
use crate::repositories::redis_base::RedisRepository;
use crate::repositories::CatRepository;

const CAT_PREFIX: &str = "cat";
const CAT_LIST_KEY: &str = "cat_list";
const CAT_ID_SEQUENCE_KEY: &str = "cat_id_seq";
const CAT_IDENTITY_PREFIX: &str = "cat_identity";
const SCAN_BATCH_SIZE: usize = 100;

lazy_static! {
    // KEYS: identity, record, list. ARGV: id, record json, record key prefix.
    // Returns 0 when the identity is held by a record that still exists.
    static ref CREATE_CAT_SCRIPT: Script = Script::new(
        r"
        local holder = redis.call('GET', KEYS[1])
        if holder and redis.call('EXISTS', ARGV[3] .. holder) == 1 then
            return 0
        end
        redis.call('SET', KEYS[1], ARGV[1])
        redis.call('SET', KEYS[2], ARGV[2])
        redis.call('SADD', KEYS[3], ARGV[1])
        return 1
        "
    );

    // KEYS: record, list, identity. ARGV: id.
    // The identity key is only removed while it still points at this id.
    static ref DELETE_CAT_SCRIPT: Script = Script::new(
        r"
        local removed = redis.call('DEL', KEYS[1])
        redis.call('SREM', KEYS[2], ARGV[1])
        if redis.call('GET', KEYS[3]) == ARGV[1] then
            redis.call('DEL', KEYS[3])
        end
        return removed
        "
    );
}

#[derive(Clone)]
pub struct RedisCatRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisCatRepository {}

impl RedisCatRepository {
    pub fn new(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        if key_prefix.is_empty() {
            return Err(RepositoryError::InvalidData(
                "Redis key prefix cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            client: connection_manager,
            key_prefix,
        })
    }

    fn cat_key_prefix(&self) -> String {
        format!("{}:{}:", self.key_prefix, CAT_PREFIX)
    }

    fn cat_key(&self, id: CatId) -> String {
        format!("{}{}", self.cat_key_prefix(), id)
    }

    fn cat_list_key(&self) -> String {
        format!("{}:{}", self.key_prefix, CAT_LIST_KEY)
    }

    fn id_sequence_key(&self) -> String {
        format!("{}:{}", self.key_prefix, CAT_ID_SEQUENCE_KEY)
    }

    fn identity_key(&self, identity: &CatIdentity) -> String {
        format!(
            "{}:{}:{}",
            self.key_prefix,
            CAT_IDENTITY_PREFIX,
            identity.digest()
        )
    }

    /// Removes a stored record. Returns `false` when it was already gone.
    async fn remove_record(&self, cat: &CatRepoModel) -> Result<bool, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let removed: i64 = DELETE_CAT_SCRIPT
            .key(self.cat_key(cat.id))
            .key(self.cat_list_key())
            .key(self.identity_key(&cat.identity()))
            .arg(cat.id)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "delete_cat"))?;

        Ok(removed > 0)
    }

    /// Every key matching `pattern`, collected with SCAN.
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next_cursor, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(|e| self.map_redis_error(e, "scan_keys"))?;

            keys.extend(batch);
            if next_cursor == 0 {
                break;
            }
            cursor = next_cursor;
        }

        // SCAN may return a key more than once.
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }

    /// Batch fetch cats by ids, skipping ids whose record is gone.
    async fn get_cats_by_ids(&self, ids: &[CatId]) -> Result<Vec<CatRepoModel>, RepositoryError> {
        if ids.is_empty() {
            debug!("No cat IDs provided for batch fetch");
            return Ok(vec![]);
        }

        let mut conn = self.client.as_ref().clone();
        let keys: Vec<String> = ids.iter().map(|id| self.cat_key(*id)).collect();

        debug!("Batch fetching {} cats", keys.len());

        let values: Vec<Option<String>> = conn
            .mget(&keys)
            .await
            .map_err(|e| self.map_redis_error(e, "batch_fetch_cats"))?;

        let mut cats = Vec::with_capacity(values.len());
        for (id, value) in ids.iter().zip(values) {
            match value {
                Some(json) => {
                    match self.deserialize_entity::<CatRepoModel>(&json, &id.to_string(), "cat") {
                        Ok(cat) => cats.push(cat),
                        Err(e) => error!("Failed to deserialize cat {}: {}", id, e),
                    }
                }
                None => warn!("Cat {} not found in batch fetch", id),
            }
        }

        Ok(cats)
    }
}

impl fmt::Debug for RedisCatRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCatRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl CatRepository for RedisCatRepository {
    async fn create(&self, cat: Cat) -> Result<CatRepoModel, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let identity_key = self.identity_key(&cat.identity());

        let id: CatId = conn
            .incr(self.id_sequence_key(), 1)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat_next_id"))?;

        debug!("Creating cat {} with ID: {}", cat.name, id);

        let entity = CatRepoModel::from_cat(id, cat);
        let value = self.serialize_entity(&entity, |c| c.id.to_string(), "cat")?;

        let created: i64 = CREATE_CAT_SCRIPT
            .key(&identity_key)
            .key(self.cat_key(id))
            .key(self.cat_list_key())
            .arg(id)
            .arg(&value)
            .arg(self.cat_key_prefix())
            .invoke_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat"))?;

        if created == 0 {
            return Err(RepositoryError::ConstraintViolation(
                "Cat with the same identity already exists".to_string(),
            ));
        }

        debug!("Successfully created cat {}", id);
        Ok(entity)
    }

    async fn get_by_id(&self, id: CatId) -> Result<CatRepoModel, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        debug!("Fetching cat with ID: {}", id);

        let value: Option<String> = conn
            .get(self.cat_key(id))
            .await
            .map_err(|e| self.map_redis_error(e, "get_cat_by_id"))?;

        match value {
            Some(json) => self.deserialize_entity::<CatRepoModel>(&json, &id.to_string(), "cat"),
            None => {
                debug!("Cat {} not found", id);
                Err(RepositoryError::NotFound(format!(
                    "Cat with ID {} not found",
                    id
                )))
            }
        }
    }

    async fn find_by_identity(
        &self,
        identity: &CatIdentity,
    ) -> Result<Option<CatRepoModel>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let id: Option<CatId> = conn
            .get(self.identity_key(identity))
            .await
            .map_err(|e| self.map_redis_error(e, "find_cat_by_identity"))?;

        let Some(id) = id else {
            return Ok(None);
        };

        match self.get_by_id(id).await {
            // Digest collisions are never trusted blindly.
            Ok(cat) if cat.identity() == *identity => Ok(Some(cat)),
            Ok(_) => Ok(None),
            Err(RepositoryError::NotFound(_)) => {
                warn!("Identity index points to missing cat {}", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn list_all(&self) -> Result<Vec<CatRepoModel>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        debug!("Fetching all cat IDs");

        let mut ids: Vec<CatId> = conn
            .smembers(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "list_all_cat_ids"))?;
        ids.sort_unstable();

        debug!("Found {} cat IDs", ids.len());

        self.get_cats_by_ids(&ids).await
    }

    async fn delete_by_id(&self, id: CatId) -> Result<(), RepositoryError> {
        debug!("Deleting cat with ID: {}", id);

        let existing = self.get_by_id(id).await?;
        if !self.remove_record(&existing).await? {
            // A concurrent delete got there first.
            return Err(RepositoryError::NotFound(format!(
                "Cat with ID {} not found",
                id
            )));
        }

        debug!("Successfully deleted cat {}", id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let count: u64 = conn
            .scard(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "count_cats"))?;

        debug!("Cat count: {}", count);
        Ok(count as usize)
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let exists: bool = conn
            .exists(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "has_entries_check"))?;

        debug!("Cat entries exist: {}", exists);
        Ok(exists)
    }

    // The id sequence is left in place so ids are never handed out twice.
    async fn drop_all_entries(&self) -> Result<(), RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        debug!("Dropping all cat entries");

        let cats = self.list_all().await?;
        // Identity keys left behind without a listed record are swept as well.
        let identity_keys = self
            .scan_keys(&format!("{}:{}:*", self.key_prefix, CAT_IDENTITY_PREFIX))
            .await?;
        if cats.is_empty() && identity_keys.is_empty() {
            debug!("No cat entries to drop");
            return Ok(());
        }

        let mut pipe = redis::pipe();
        pipe.atomic();
        for cat in &cats {
            pipe.del(self.cat_key(cat.id));
        }
        for key in &identity_keys {
            pipe.del(key);
        }
        pipe.del(self.cat_list_key());

        pipe.exec_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "drop_all_entries_pipeline"))?;

        debug!(
            "Dropped {} cat entries and {} identity keys",
            cats.len(),
            identity_keys.len()
        );
        Ok(())
    }
}

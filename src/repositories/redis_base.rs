//! Base Redis repository functionality shared across Redis implementations.

use crate::models::RepositoryError;
use log::{error, warn};
use redis::RedisError;
use serde::{Deserialize, Serialize};

/// Base trait for Redis repositories providing common functionality
pub trait RedisRepository {
    fn serialize_entity<T, F>(
        &self,
        entity: &T,
        id_extractor: F,
        entity_type: &str,
    ) -> Result<String, RepositoryError>
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        serde_json::to_string(entity).map_err(|e| {
            let id = id_extractor(entity);
            error!("Serialization failed for {} {}: {}", entity_type, id, e);
            RepositoryError::InvalidData(format!(
                "Failed to serialize {} {}: {}",
                entity_type, id, e
            ))
        })
    }

    /// Deserialize entity with detailed error context
    fn deserialize_entity<T>(
        &self,
        json: &str,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<T, RepositoryError>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| {
            error!(
                "Deserialization failed for {} {}: {}",
                entity_type, entity_id, e
            );
            RepositoryError::InvalidData(format!(
                "Failed to deserialize {} {}: {} (JSON length: {})",
                entity_type,
                entity_id,
                e,
                json.len()
            ))
        })
    }

    /// Convert Redis errors to appropriate RepositoryError types
    fn map_redis_error(&self, error: RedisError, context: &str) -> RepositoryError {
        warn!("Redis operation failed in context '{}': {}", context, error);

        if error.is_connection_refusal() || error.is_connection_dropped() || error.is_timeout() {
            return RepositoryError::ConnectionError(format!(
                "Redis unavailable in operation '{}': {}",
                context, error
            ));
        }

        match error.kind() {
            redis::ErrorKind::TypeError => RepositoryError::InvalidData(format!(
                "Redis data type error in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::AuthenticationFailed => {
                RepositoryError::ConnectionError("Redis authentication failed".to_string())
            }
            redis::ErrorKind::ReadOnly => RepositoryError::InvalidData(format!(
                "Redis is read-only in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::ExecAbortError => RepositoryError::InvalidData(format!(
                "Redis transaction aborted in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::BusyLoadingError => RepositoryError::ConnectionError(format!(
                "Redis is busy in operation '{}': {}",
                context, error
            )),
            _ => RepositoryError::Other(format!("Redis operation '{}' failed: {}", context, error)),
        }
    }
}

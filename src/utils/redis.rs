use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use eyre::WrapErr;
use log::info;
use redis::aio::ConnectionManager;
use tokio::time::timeout;

use crate::config::ServerConfig;

/// Initializes a Redis connection manager.
///
/// # Arguments
///
/// * `config` - The server configuration.
///
/// # Returns
///
/// A connection manager for the Redis connection, or an error when the
/// server cannot be reached within `redis_connection_timeout_ms`.
pub async fn initialize_redis_connection(config: &ServerConfig) -> Result<Arc<ConnectionManager>> {
    let redis_client = redis::Client::open(config.redis_url.as_str())
        .wrap_err_with(|| format!("Invalid Redis URL: {}", config.redis_url))?;
    let connection_manager = timeout(
        Duration::from_millis(config.redis_connection_timeout_ms),
        ConnectionManager::new(redis_client),
    )
    .await
    .map_err(|_| {
        eyre::eyre!(
            "Redis connection timeout after {}ms",
            config.redis_connection_timeout_ms
        )
    })??;
    info!("Connected to Redis at {}", config.redis_url);

    Ok(Arc::new(connection_manager))
}

//! Application state initialization
//!
//! Selects the cat repository backend from configuration, optionally clears
//! it, and wires it into the application state.
use std::sync::Arc;

use actix_web::web;
use color_eyre::{eyre::WrapErr, Result};
use log::{info, warn};

use crate::{
    config::{RepositoryStorageType, ServerConfig},
    models::{AppState, DefaultAppState},
    repositories::{CatRepository, CatRepositoryStorage},
    utils::initialize_redis_connection,
};

/// Initializes the cat repository based on the server configuration.
///
/// # Errors
///
/// Returns an error when the Redis backend is selected and the connection
/// cannot be established.
pub async fn initialize_repositories(config: &ServerConfig) -> Result<Arc<CatRepositoryStorage>> {
    let repository = match config.repository_storage_type {
        RepositoryStorageType::InMemory => {
            info!("Using in-memory cat storage");
            CatRepositoryStorage::new_in_memory()
        }
        RepositoryStorageType::Redis => {
            info!(
                "Using Redis cat storage with key prefix '{}'",
                config.redis_key_prefix
            );
            let connection_manager = initialize_redis_connection(config)
                .await
                .wrap_err("Failed to initialize Redis connection")?;
            CatRepositoryStorage::new_redis(connection_manager, config.redis_key_prefix.clone())
                .wrap_err("Failed to create Redis cat repository")?
        }
    };

    Ok(Arc::new(repository))
}

/// Initializes application state
///
/// # Errors
///
/// Returns error if:
/// - Repository initialization fails
/// - Clearing storage on start was requested and fails
pub async fn initialize_app_state(
    server_config: Arc<ServerConfig>,
) -> Result<web::ThinData<DefaultAppState>> {
    let cat_repository = initialize_repositories(&server_config).await?;

    if server_config.reset_storage_on_start {
        warn!("RESET_STORAGE_ON_START is set, dropping all stored cats");
        cat_repository
            .drop_all_entries()
            .await
            .wrap_err("Failed to reset cat storage")?;
    }

    let stored = cat_repository
        .count()
        .await
        .wrap_err("Failed to read cat storage")?;
    info!("Cat storage ready with {} records", stored);

    Ok(web::ThinData(AppState::new(cat_repository)))
}

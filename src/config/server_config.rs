//! Configuration for the server, including network, storage and rate limiting settings.
use std::{env, str::FromStr};

use log::warn;
use strum::{Display, EnumString};

use crate::constants::{
    DEFAULT_REDIS_CONNECTION_TIMEOUT_MS, DEFAULT_REDIS_KEY_PREFIX, DEFAULT_REDIS_URL,
};

/// Backend used to store cat records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RepositoryStorageType {
    #[default]
    InMemory,
    Redis,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The port number for exposing metrics.
    pub metrics_port: u16,
    /// Enable Swagger UI.
    pub enable_swagger: bool,
    /// Where cat records are stored.
    pub repository_storage_type: RepositoryStorageType,
    /// The URL for the Redis instance.
    pub redis_url: String,
    /// Prefix for every Redis key written by the service.
    pub redis_key_prefix: String,
    pub redis_connection_timeout_ms: u64,
    /// Drop stored records during startup.
    pub reset_storage_on_start: bool,
    /// The number of requests allowed per second.
    pub rate_limit_requests_per_second: u64,
    /// The maximum burst size for rate limiting.
    pub rate_limit_burst_size: u32,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// Values that fail to parse fall back to their defaults.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `METRICS_PORT` defaults to `8081`.
    /// - `ENABLE_SWAGGER` defaults to `false`.
    /// - `REPOSITORY_STORAGE_TYPE` defaults to `in_memory`.
    /// - `REDIS_URL` defaults to `"redis://127.0.0.1:6379"`.
    /// - `REDIS_KEY_PREFIX` defaults to `"cat-api"`.
    /// - `REDIS_CONNECTION_TIMEOUT_MS` defaults to `5000`.
    /// - `RESET_STORAGE_ON_START` defaults to `false`.
    /// - `RATE_LIMIT_REQUESTS_PER_SECOND` defaults to `100`.
    /// - `RATE_LIMIT_BURST_SIZE` defaults to `300`.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("APP_PORT", 8080),
            metrics_port: parse_env("METRICS_PORT", 8081),
            enable_swagger: parse_bool_env("ENABLE_SWAGGER"),
            repository_storage_type: Self::get_repository_storage_type(),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
            redis_key_prefix: env::var("REDIS_KEY_PREFIX")
                .ok()
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REDIS_KEY_PREFIX.to_string()),
            redis_connection_timeout_ms: parse_env(
                "REDIS_CONNECTION_TIMEOUT_MS",
                DEFAULT_REDIS_CONNECTION_TIMEOUT_MS,
            ),
            reset_storage_on_start: parse_bool_env("RESET_STORAGE_ON_START"),
            rate_limit_requests_per_second: parse_env("RATE_LIMIT_REQUESTS_PER_SECOND", 100),
            rate_limit_burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 300),
        }
    }

    fn get_repository_storage_type() -> RepositoryStorageType {
        match env::var("REPOSITORY_STORAGE_TYPE") {
            Ok(value) => RepositoryStorageType::from_str(value.trim()).unwrap_or_else(|_| {
                warn!(
                    "Unknown REPOSITORY_STORAGE_TYPE '{}', falling back to in_memory",
                    value
                );
                RepositoryStorageType::InMemory
            }),
            Err(_) => RepositoryStorageType::default(),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_bool_env(name: &str) -> bool {
    env::var(name)
        .map(|v| v.trim().to_lowercase() == "true")
        .unwrap_or(false)
}

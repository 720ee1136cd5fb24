pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_REDIS_KEY_PREFIX: &str = "cat-api";
pub const DEFAULT_REDIS_CONNECTION_TIMEOUT_MS: u64 = 5000;

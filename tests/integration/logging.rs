//! Integration tests for file logging.
//!
//! Refer to `src/logging/mod.rs` for the environment variables involved.
use cat_api::logging::{
    setup_logging, space_based_rolling, time_based_rolling, LoggingConfig, LOG_FILE_NAME,
};
use chrono::Utc;
use std::{env, fs, io::Write, path::Path, sync::Mutex, thread, time::Duration};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_invalid_log_max_size_is_rejected() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    let result = LoggingConfig::from_env();

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_MAX_SIZE");

    let err = result.expect_err("invalid LOG_MAX_SIZE must be rejected");
    assert!(err.to_string().contains("LOG_MAX_SIZE"));
}

// The global logger can be installed once per process, so this is the only
// test in the binary that calls `setup_logging`.
#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("nested");
    let log_dir = log_dir.to_str().unwrap();

    env::remove_var("LOG_MAX_SIZE");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", log_dir));

    setup_logging().expect("logging setup failed");
    log::info!("integration test log line");
    thread::sleep(Duration::from_millis(200));

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_DATA_DIR");

    let expected_path = time_based_rolling(&format!("{}/{}", log_dir, LOG_FILE_NAME), &today(), 1);
    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {} does not exist",
        expected_path
    );
}

#[test]
fn test_log_file_rolls_when_existing_is_full() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base_file = temp_dir.path().join(LOG_FILE_NAME);
    let base_file = base_file.to_str().unwrap();
    let date_str = today();

    let first = time_based_rolling(base_file, &date_str, 1);
    fs::write(&first, "Existing log file that is already too large")
        .expect("Failed to create pre-existing log file");

    let rolled_path = space_based_rolling(&first, base_file, &date_str, 10);

    assert_ne!(rolled_path, first);
    assert!(rolled_path.contains("cat-api-"));
}

#[test]
fn test_space_based_rolling_returns_original_when_under_max_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base_file = temp_dir.path().join(LOG_FILE_NAME);
    let base_file = base_file.to_str().unwrap();
    let date_str = today();
    let time_based_path = time_based_rolling(base_file, &date_str, 1);

    let mut file = fs::File::create(&time_based_path).expect("Failed to create test log file");
    write!(file, "small file").expect("Failed to write to test log file");

    let rolled_file_path = space_based_rolling(&time_based_path, base_file, &date_str, 10_000);

    assert_eq!(rolled_file_path, time_based_path);
}

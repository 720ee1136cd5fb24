//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding `cat-api.log` (default "./logs")
//! - LOG_MAX_SIZE: size in bytes after which a new log file is started (default 1GB)

use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::Path,
};

use chrono::Utc;
use color_eyre::{eyre::WrapErr, Result};
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger, WriteLogger};
use strum::{Display, EnumString};

pub const LOG_FILE_NAME: &str = "cat-api.log";
pub const DEFAULT_LOG_DATA_DIR: &str = "./logs";
pub const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogMode {
    #[default]
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub mode: LogMode,
    pub level: LevelFilter,
    pub data_dir: String,
    pub max_size: u64,
}

impl LoggingConfig {
    /// Reads the logging settings. Unknown modes and levels fall back to
    /// stdout and info; an unparseable `LOG_MAX_SIZE` is an error.
    pub fn from_env() -> Result<Self> {
        let mode = env::var("LOG_MODE")
            .ok()
            .and_then(|mode| mode.trim().parse().ok())
            .unwrap_or_default();
        let level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        let data_dir =
            env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DATA_DIR.to_string());
        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("LOG_MAX_SIZE must be a valid u64, got '{}'", raw))?,
            Err(_) => DEFAULT_LOG_MAX_SIZE,
        };

        Ok(Self {
            mode,
            level,
            data_dir,
            max_size,
        })
    }

    pub fn base_file_path(&self) -> String {
        format!("{}/{}", self.data_dir.trim_end_matches('/'), LOG_FILE_NAME)
    }

    /// The file to write to today: dated, then bumped past files over `max_size`.
    pub fn resolve_file_path(&self, date_str: &str) -> String {
        let base_file_path = self.base_file_path();
        let time_based_path = time_based_rolling(&base_file_path, date_str, 1);
        space_based_rolling(&time_based_path, &base_file_path, date_str, self.max_size)
    }
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let stem = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", stem, date_str, index)
}

/// Daily log file name; the first file of a day carries index 1.
pub fn time_based_rolling(base_file_path: &str, date_str: &str, index: u32) -> String {
    compute_rolled_file_path(base_file_path, date_str, index)
}

/// Starting from `file_path`, moves to the next index while the candidate
/// file is larger than `max_size` bytes.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(metadata) = metadata(&final_path) {
        if metadata.len() <= max_size {
            break;
        }
        final_path = compute_rolled_file_path(base_file_path, date_str, index);
        index += 1;
    }
    final_path
}

/// Installs the global logger according to [`LoggingConfig::from_env`].
pub fn setup_logging() -> Result<()> {
    let config = LoggingConfig::from_env()?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match config.mode {
        LogMode::File => {
            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let final_path = config.resolve_file_path(&date_str);

            if let Some(parent) = Path::new(&final_path).parent() {
                create_dir_all(parent).wrap_err_with(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }

            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&final_path)
                .wrap_err_with(|| format!("Unable to open log file {}", final_path))?;

            WriteLogger::init(config.level, log_config, log_file)
                .wrap_err("Failed to initialize file logger")?;
            info!("Logging to file {}", final_path);
        }
        LogMode::Stdout => {
            SimpleLogger::init(config.level, log_config)
                .wrap_err("Failed to initialize stdout logger")?;
        }
    }

    info!(
        "Logging is successfully configured (mode: {}, level: {})",
        config.mode, config.level
    );
    Ok(())
}

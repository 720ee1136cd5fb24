//! # API Routes Module
//!
//! Configures HTTP routes for the cat service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/cat` - Cat record endpoints
//!
//! Metrics routes are served separately on the metrics port.

pub mod cat;
pub mod docs;
pub mod health;
pub mod metrics;

use actix_web::{error, web, HttpRequest};
use log::debug;

use crate::models::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .configure(health::init)
        .configure(cat::init);
}

/// Malformed or unexpected JSON bodies become `400` with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        debug!("Rejected request body: {}", err);
        ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}

/// Path segments that fail to parse (such as a non-numeric cat id) become `400`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        debug!("Rejected path parameter: {}", err);
        ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
    })
}

//! Cat Record Service Library
//!
//! A small REST service storing cat records with field validation and a
//! duplicate guard. It includes:
//!
//! - Environment-driven configuration
//! - In-memory and Redis record storage behind one repository trait
//! - A service layer enforcing validation and identity uniqueness
//! - Actix-web routes, OpenAPI documentation and Prometheus metrics
//!
//! # Module Structure
//!
//! - `api`: HTTP controllers and routes
//! - `bootstrap`: Application state construction
//! - `config`: Server configuration
//! - `logging`: Logger setup and log file rolling
//! - `metrics`: Prometheus registry and middleware
//! - `models`: Domain, request, response and error types
//! - `repositories`: Record storage
//! - `services`: Validation and duplicate guard
//! - `utils`: Common helpers

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState};

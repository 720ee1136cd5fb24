//! # Models Module
//!
//! Contains core data structures and type definitions for the cat service.

mod cat;
pub use cat::*;

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod error;
pub use error::*;

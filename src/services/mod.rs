//! # Services Module
//!
//! Business logic sitting between the HTTP controllers and the repositories.

mod cat;
pub use cat::*;

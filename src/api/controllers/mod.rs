//! # API Controllers Module
//!
//! Handles HTTP request processing and coordinates with the service layer.
//!
//! ## Controllers
//!
//! * `cat` - Cat record endpoints

pub mod cat;

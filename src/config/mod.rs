//! Configuration system for the cat service.
//!
//! Settings are read from environment variables (optionally seeded from a
//! `.env` file) into a [`ServerConfig`] at startup.
mod server_config;
pub use server_config::*;

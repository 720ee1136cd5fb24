//! # Repository Module
//!
//! Implements the data persistence layer for the cat service using the
//! Repository pattern. Each repository has an in-memory and a Redis-backed
//! implementation behind a single storage enum.

mod redis_base;

mod cat;
pub use cat::*;

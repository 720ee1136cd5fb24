//! # API Module
//!
//! Contains the HTTP API implementation for the cat service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and coordination with the service layer
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;

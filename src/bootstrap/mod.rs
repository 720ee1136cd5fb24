//! Startup routines for the cat service.
//!
//! Builds the repository selected by configuration and wires it into the
//! application state handed to the HTTP server.
mod initialize_app_state;
pub use initialize_app_state::*;

//! This module contains all the constant values used in the system
mod validation;
pub use validation::*;

mod storage;
pub use storage::*;

//! Schema module - Configuration and reporting types for GA runs.

mod config;
mod evolution;

pub use config::*;
pub use evolution::*;

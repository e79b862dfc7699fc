//! # Jobseek Config
//!
//! Layered configuration for the Jobseek backend: TOML files under
//! `config/`, a `.env` file, and `JOBSEEK__*` environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;

//! Application configuration module
//!
//! Handles environment variables, env files and application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{load_env_files, Settings};

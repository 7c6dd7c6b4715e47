//! Configuration for diff-explain
//!
//! This crate provides:
//! - Application configuration (AppConfig) with defaults for both providers
//! - Configuration file lookup (TOML)
//! - Config directory paths
//! - Secret resolution from the environment (and `.env` files)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod secrets;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use secrets::resolve_secret;

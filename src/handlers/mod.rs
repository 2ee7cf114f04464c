//! Request handlers for the HTTP endpoints

pub mod config;
pub mod health;

pub use config::{config_json, config_script, resolve_for_request};
pub use health::health;

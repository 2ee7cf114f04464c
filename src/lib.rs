//! Pubsub Web - front service for the pubsub chat page
//!
//! Serves the page's static files and tells each browser which WebSocket and
//! HTTP API endpoints to use, based on the hostname the page was loaded from.

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod security;

// Re-export main components
pub use config::*;
pub use constants::*;
pub use endpoints::{resolve, EndpointResolver, Endpoints};

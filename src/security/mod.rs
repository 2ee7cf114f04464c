//! Security utilities for HTTP responses

pub mod headers;

pub use headers::{add_generated_headers, with_generated_headers};

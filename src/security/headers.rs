//! Response headers for generated replies
//!
//! `/config.js` and `/config` are computed from the request's `Host` header,
//! so caches must never reuse them across hosts.

use warp::http::HeaderValue;
use warp::reply::Response;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Add the generated-reply headers to a built response
pub fn add_generated_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("Cache-Control", HeaderValue::from_static(NO_CACHE));
    headers.insert("Vary", HeaderValue::from_static("Host"));

    response
}

/// Wrap a reply with the generated-reply headers
pub fn with_generated_headers<T: warp::Reply>(reply: T) -> impl warp::Reply {
    add_generated_headers(reply.into_response())
}

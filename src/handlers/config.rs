//! Handlers serving the browser endpoint configuration

use std::sync::Arc;

use log::debug;
use warp::host::Authority;

use crate::constants::{JS_CONTENT_TYPE, LOCAL_HOSTNAME};
use crate::endpoints::{EndpointResolver, Endpoints};
use crate::security::with_generated_headers;

/// Resolve the endpoints for a request addressed to `authority`.
///
/// The authority comes from the request target (HTTP/2 `:authority`) or the
/// `Host` header. Its port is ignored and IPv6 literals keep their brackets,
/// as with `location.hostname`. A request without one is treated as a page
/// loaded from `localhost`.
pub fn resolve_for_request(
    authority: Option<&Authority>,
    resolver: &EndpointResolver,
) -> Endpoints {
    let hostname = authority
        .map(Authority::host)
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or(LOCAL_HOSTNAME);

    let endpoints = resolver.resolve(hostname);
    debug!(
        "Resolved endpoints for authority {:?}: ws={} api={}",
        authority.map(Authority::as_str),
        endpoints.ws_url,
        endpoints.api_url
    );
    endpoints
}

/// `GET /config.js`
pub fn config_script(
    authority: Option<Authority>,
    resolver: Arc<EndpointResolver>,
) -> impl warp::Reply {
    let endpoints = resolve_for_request(authority.as_ref(), &resolver);
    let reply = warp::reply::with_header(endpoints.to_script(), "Content-Type", JS_CONTENT_TYPE);
    with_generated_headers(reply)
}

/// `GET /config`
pub fn config_json(
    authority: Option<Authority>,
    resolver: Arc<EndpointResolver>,
) -> impl warp::Reply {
    let endpoints = resolve_for_request(authority.as_ref(), &resolver);
    with_generated_headers(warp::reply::json(&endpoints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_authority_resolves_as_localhost() {
        let resolver = EndpointResolver::default();
        let endpoints = resolve_for_request(None, &resolver);
        assert_eq!(endpoints.ws_url, "ws://localhost:8083/connect");
        assert_eq!(endpoints.api_url, "http://localhost:8086");
    }

    #[test]
    fn test_authority_port_is_ignored() {
        let resolver = EndpointResolver::default();

        let remote = Authority::from_static("example.com:8086");
        let endpoints = resolve_for_request(Some(&remote), &resolver);
        assert_eq!(endpoints.ws_url, "ws://example.com:8083/connect");
        assert_eq!(endpoints.api_url, "http://example.com:8086");

        let local = Authority::from_static("127.0.0.1:8086");
        let endpoints = resolve_for_request(Some(&local), &resolver);
        assert_eq!(endpoints.api_url, "http://localhost:8086");
    }

    #[test]
    fn test_ipv6_authority_keeps_brackets() {
        let resolver = EndpointResolver::default();
        let authority = Authority::from_static("[::1]:8086");

        let endpoints = resolve_for_request(Some(&authority), &resolver);
        assert_eq!(endpoints.ws_url, "ws://[::1]:8083/connect");
        assert_eq!(endpoints.api_url, "http://[::1]:8086");
    }
}

//! HTTP route tree of the web server

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use warp::Filter;

use crate::constants::{CONFIG_JSON_PATH, CONFIG_SCRIPT_PATH, HEALTH_PATH, LOG_TARGET};
use crate::endpoints::EndpointResolver;
use crate::handlers;

/// Build every route: generated config, health check and static files, all
/// behind a permissive CORS layer.
pub fn routes(
    resolver: Arc<EndpointResolver>,
    static_dir: impl Into<PathBuf>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let config_script_route = warp::path(CONFIG_SCRIPT_PATH)
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::host::optional())
        .and(with_resolver(resolver.clone()))
        .map(handlers::config_script);

    let config_json_route = warp::path(CONFIG_JSON_PATH)
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::host::optional())
        .and(with_resolver(resolver))
        .map(handlers::config_json);

    let health_route = warp::path(HEALTH_PATH)
        .and(warp::path::end())
        .and(warp::get())
        .map(handlers::health);

    let static_route = warp::get().and(warp::fs::dir(static_dir.into()));

    config_script_route
        .or(config_json_route)
        .or(health_route)
        .or(static_route)
        .with(cors())
        .with(warp::log(LOG_TARGET))
}

/// Any origin may call the API; preflight requests are answered here
pub fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

// Helper function to include the resolver in request handlers
fn with_resolver(
    resolver: Arc<EndpointResolver>,
) -> impl Filter<Extract = (Arc<EndpointResolver>,), Error = Infallible> + Clone {
    warp::any().map(move || resolver.clone())
}

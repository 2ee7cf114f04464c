use log::{debug, error, info};
use std::sync::Arc;

use pubsub_web::config::ServerConfig;
use pubsub_web::constants::{CONFIG_JSON_PATH, CONFIG_SCRIPT_PATH, HEALTH_PATH};
use pubsub_web::routes::routes;

#[tokio::main]
async fn main() {
    // Load .env before the logger so RUST_LOG can come from it
    let dotenv_result = dotenvy::dotenv();

    // Initialize logging
    env_logger::init();

    match dotenv_result {
        Ok(path) => info!("Environment variables loaded from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    };

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate_static_dir() {
        error!("{}", e);
        std::process::exit(1);
    }

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let resolver = Arc::new(config.resolver());

    info!("Configuration: host={}, port={}", config.host, config.port);
    info!("Static files: {}", config.static_dir.display());
    info!(
        "Advertised endpoints: ws=:{}{} api=:{}",
        resolver.ws_port(),
        resolver.ws_path(),
        resolver.api_port()
    );
    info!("Routes:");
    info!("  - Endpoint script: GET http://localhost:{}/{}", config.port, CONFIG_SCRIPT_PATH);
    info!("  - Endpoint JSON:   GET http://localhost:{}/{}", config.port, CONFIG_JSON_PATH);
    info!("  - Health check:    GET http://localhost:{}/{}", config.port, HEALTH_PATH);

    info!("Starting web server on {}", addr);

    warp::serve(routes(resolver, config.static_dir.clone()))
        .run(addr)
        .await;
}

// Server bind defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8086;
pub const DEFAULT_STATIC_DIR: &str = "./";

// Endpoint templates handed to browser clients
pub const DEFAULT_WS_PORT: u16 = 8083;
pub const DEFAULT_WS_PATH: &str = "/connect";
pub const DEFAULT_API_PORT: u16 = 8086;

// Hostnames that map to the fixed local endpoints (exact, case-sensitive match)
pub const LOOPBACK_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];
pub const LOCAL_HOSTNAME: &str = "localhost";

// Routes
pub const CONFIG_SCRIPT_PATH: &str = "config.js";
pub const CONFIG_JSON_PATH: &str = "config";
pub const HEALTH_PATH: &str = "health";

pub const SERVICE_NAME: &str = "web-server";
pub const JS_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";
pub const LOG_TARGET: &str = "pubsub_web::access";

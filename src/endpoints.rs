//! Endpoint resolution for browser clients
//!
//! A page served by this service needs two backend addresses: the WebSocket
//! endpoint of the connect node and the HTTP API base of this server. Both are
//! derived from the hostname the page was loaded from, so the same page works
//! whether it is opened through `localhost` or through a remote host or IP.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_PORT, DEFAULT_WS_PATH, DEFAULT_WS_PORT, LOCAL_HOSTNAME, LOOPBACK_HOSTNAMES,
};

/// Endpoints handed to a browser client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// WebSocket endpoint used to open the persistent connection
    #[serde(rename = "WS_URL")]
    pub ws_url: String,
    /// HTTP base endpoint used for request/response calls
    #[serde(rename = "API_URL")]
    pub api_url: String,
}

impl Endpoints {
    /// Render the browser script that defines the global `CONFIG` object.
    ///
    /// Values are emitted as JSON string literals, so a hostile hostname
    /// cannot terminate the literal or the surrounding `<script>` element.
    pub fn to_script(&self) -> String {
        format!(
            "const CONFIG = {{\n    WS_URL: {},\n    API_URL: {},\n}};\n\nconsole.log('Current config:', CONFIG);\n",
            js_string_literal(&self.ws_url),
            js_string_literal(&self.api_url),
        )
    }
}

fn js_string_literal(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
}

/// Port and path templates used to build [`Endpoints`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver {
    ws_port: u16,
    ws_path: String,
    api_port: u16,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(DEFAULT_WS_PORT, DEFAULT_WS_PATH, DEFAULT_API_PORT)
    }
}

impl EndpointResolver {
    /// Create a resolver. A non-empty path without a leading `/` gets one.
    pub fn new(ws_port: u16, ws_path: impl Into<String>, api_port: u16) -> Self {
        let mut ws_path = ws_path.into();
        if !ws_path.is_empty() && !ws_path.starts_with('/') {
            ws_path.insert(0, '/');
        }

        Self {
            ws_port,
            ws_path,
            api_port,
        }
    }

    pub fn ws_port(&self) -> u16 {
        self.ws_port
    }

    pub fn ws_path(&self) -> &str {
        &self.ws_path
    }

    pub fn api_port(&self) -> u16 {
        self.api_port
    }

    /// Resolve the endpoints for a page loaded from `hostname`.
    ///
    /// Loopback hostnames collapse to `localhost`; anything else is
    /// substituted verbatim. The hostname is not validated.
    pub fn resolve(&self, hostname: &str) -> Endpoints {
        let host = if is_loopback_hostname(hostname) {
            LOCAL_HOSTNAME
        } else {
            hostname
        };

        Endpoints {
            ws_url: format!("ws://{}:{}{}", host, self.ws_port, self.ws_path),
            api_url: format!("http://{}:{}", host, self.api_port),
        }
    }
}

/// Resolve with the default templates (`:8083/connect` and `:8086`)
pub fn resolve(hostname: &str) -> Endpoints {
    EndpointResolver::default().resolve(hostname)
}

/// Exact match against `localhost` and `127.0.0.1`
pub fn is_loopback_hostname(hostname: &str) -> bool {
    LOOPBACK_HOSTNAMES.contains(&hostname)
}

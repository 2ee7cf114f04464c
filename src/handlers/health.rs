use serde::{Deserialize, Serialize};

use crate::constants::SERVICE_NAME;

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub fn health() -> impl warp::Reply {
    warp::reply::json(&HealthStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

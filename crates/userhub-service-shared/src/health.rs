//! Health check handler.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Body returned by the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"OK"` while the process is serving.
    pub status: String,

    pub message: String,

    /// RFC 3339 timestamp of the check.
    pub timestamp: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build time.
    pub version: String,
}

impl HealthStatus {
    pub fn ok(service: &str, version: &str) -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            service: service.to_string(),
            version: version.to_string(),
        }
    }
}

/// `GET /health-check` handler.
pub async fn health_check() -> impl IntoResponse {
    let status = HealthStatus::ok(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_shape() {
        let status = HealthStatus::ok("userhub", "0.1.0");
        assert_eq!(status.status, "OK");
        assert_eq!(status.message, "Server is healthy");
        assert_eq!(status.service, "userhub");
        assert!(status.timestamp.contains('T'));
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_string(&HealthStatus::ok("userhub", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"OK\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }
}

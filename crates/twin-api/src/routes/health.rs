//! Service info and health check endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "Digital Twin API";

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Voice platform connectivity.
#[derive(Debug, Serialize)]
pub struct VapiHealth {
    /// `not_configured`, `connected` or `disconnected`
    pub status: String,
    pub vapi_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Service banner.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        timestamp: now(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Check connectivity to the voice platform.
pub async fn vapi_health(State(state): State<AppState>) -> Json<VapiHealth> {
    let vapi = state.vapi();

    let health = if !vapi.is_configured() {
        VapiHealth {
            status: "not_configured".to_string(),
            vapi_status: "private_key_not_set".to_string(),
            message: Some("PRIVATE_API_KEY is optional for webhooks only".to_string()),
            error: None,
            timestamp: now(),
        }
    } else {
        match vapi.health_check().await {
            Ok(()) => VapiHealth {
                status: "connected".to_string(),
                vapi_status: "healthy".to_string(),
                message: None,
                error: None,
                timestamp: now(),
            },
            Err(e) => VapiHealth {
                status: "disconnected".to_string(),
                vapi_status: "unreachable".to_string(),
                message: None,
                error: Some(e.to_string()),
                timestamp: now(),
            },
        }
    };

    Json(health)
}

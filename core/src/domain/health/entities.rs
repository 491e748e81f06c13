use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "TasteFusion API";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            message: "Ready to create delicious fusion recipes!".to_string(),
        }
    }
}

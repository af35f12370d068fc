use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";

/// Liveness payload returned by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model: String,
}

impl HealthReport {
    pub fn healthy(model: impl Into<String>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            model: model.into(),
        }
    }
}

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::domain::HealthReport;

use super::super::Container;

/// `GET /health`
pub async fn health(State(container): State<Arc<Container>>) -> Json<HealthReport> {
    Json(container.check_health_use_case().execute())
}

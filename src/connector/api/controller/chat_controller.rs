use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::super::{ApiError, Container};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing and `null` are both treated as an empty message.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /chat`
pub async fn chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request.message.unwrap_or_default();

    let response = container.relay_chat_use_case().execute(&message).await?;

    Ok(Json(ChatResponse { response }))
}

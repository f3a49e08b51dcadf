//! HTTP handler for the chatbot

use super::rules::classify;
use crate::catalog::format::format_rows;
use crate::catalog::handlers::AppState;
use crate::catalog::models::ServiceRecord;
use crate::catalog::queries::ServiceSelect;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub data: Vec<ServiceRecord>,
}

/// POST /chat
///
/// Always 200: an unrecognized message or an unreachable store both come
/// back as an empty listing with the generic reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let intent = classify(&request.message);
    info!(?intent, "chat request classified");

    let mut select = ServiceSelect::new();
    if let Some(city) = intent.city {
        select = select.city_contains(city);
    }
    if let Some(ty) = intent.service_type {
        select = select.service_type(ty);
    }
    if let Some(sort) = intent.sort {
        select = select.sort(sort);
    }

    let query = select.build();
    debug!(query, "generated listing query");

    let rows = state.store.query(&query).await;
    let data = format_rows(&rows);
    let response = intent.summary(data.len());

    Json(ChatResponse { response, data })
}

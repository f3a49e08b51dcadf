//! HTTP handlers for the service catalog

use super::format::{format_row, format_rows};
use super::models::{capitalize, AccommodationInput, AccommodationUpdate, ServiceRecord, ServiceType};
use super::queries::{self, ServiceSelect, SortOrder};
use crate::error::{ApiError, Result};
use crate::sparql::SparqlClient;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Shared state: the injected store handle
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SparqlClient>,
}

/// Confirmation body for mutating endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub city: Option<String>,
}

/// GET /hotels
///
/// Lists every service, optionally narrowed to a city substring. A `city`
/// of "all" means no filter, matching what the search form sends.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<ServiceRecord>> {
    let mut select = ServiceSelect::new();
    if let Some(city) = params.city.as_deref() {
        if city != "all" && !city.is_empty() {
            select = select.city_contains(city);
        }
    }

    let rows = state.store.query(&select.build()).await;
    info!("service listing returned {} rows", rows.len());
    Json(format_rows(&rows))
}

/// POST /accommodation
pub async fn create_accommodation(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Message>)> {
    let input: AccommodationInput = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid payload: {e}")))?;
    let ty = parse_service_type(&input.service_type)?;

    info!("creating accommodation: name={}", input.name);

    let suffix = instance_suffix();
    let update = queries::insert_accommodation(
        &input.name,
        &capitalize(&input.city),
        ty,
        input.price,
        input.rating,
        input.co2,
        &suffix,
    );
    state.store.update(&update).await?;

    Ok((
        StatusCode::CREATED,
        Json(Message::new("Accommodation added successfully")),
    ))
}

/// PUT /accommodation/{name}
///
/// Delete-then-insert, as the store has no in-place update for a whole
/// instance. If the insert fails after the delete succeeded the record is
/// gone; there is no restore.
pub async fn update_accommodation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Message>> {
    let input: AccommodationUpdate = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid payload: {e}")))?;
    let ty = parse_service_type(&input.service_type)?;
    let new_name = input.name.as_deref().unwrap_or(&name);

    info!("updating accommodation: name={name}");

    state
        .store
        .update(&queries::delete_accommodation(&name))
        .await?;

    let suffix = instance_suffix();
    let insert = queries::insert_accommodation(
        new_name,
        &capitalize(&input.city),
        ty,
        input.price,
        input.rating,
        input.co2,
        &suffix,
    );
    state.store.update(&insert).await?;

    Ok(Json(Message::new(format!(
        "Accommodation '{name}' updated successfully"
    ))))
}

/// DELETE /accommodation/{name}
pub async fn delete_accommodation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Message>> {
    info!("deleting accommodation: name={name}");

    state
        .store
        .update(&queries::delete_accommodation(&name))
        .await?;

    Ok(Json(Message::new(format!(
        "Accommodation '{name}' deleted successfully"
    ))))
}

/// GET /cities
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    let rows = state.store.query(&queries::cities_query()).await;
    let cities = rows
        .iter()
        .filter_map(|row| row.get("city"))
        .map(str::to_string)
        .collect();
    Json(cities)
}

/// GET /recommendations
///
/// Top rated services across every category.
pub async fn recommendations(State(state): State<AppState>) -> Json<Vec<ServiceRecord>> {
    let query = ServiceSelect::new()
        .sort(SortOrder::RatingDescending)
        .limit(4)
        .build();
    let rows = state.store.query(&query).await;
    Json(format_rows(&rows))
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    pub name: Option<String>,
}

/// GET /hotel_details
pub async fn hotel_details(
    State(state): State<AppState>,
    Query(params): Query<DetailsParams>,
) -> Result<Json<ServiceRecord>> {
    let name = params
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation("Hotel name is required".into()))?;

    let query = ServiceSelect::new()
        .exact_name(&name)
        .with_activity()
        .limit(1)
        .build();
    let rows = state.store.query(&query).await;

    match rows.first() {
        Some(row) => Ok(Json(format_row(row))),
        None => Err(ApiError::NotFound("Hotel not found".into())),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// GET /price_range
///
/// 0/0 when the store is empty or unreachable, consistent with the
/// formatter's numeric sentinel.
pub async fn price_range(State(state): State<AppState>) -> Json<PriceRange> {
    let rows = state.store.query(&queries::price_range_query()).await;
    let range = match rows.first() {
        Some(row) => PriceRange {
            min: row.f64_or("min", 0.0),
            max: row.f64_or("max", 0.0),
        },
        None => PriceRange { min: 0.0, max: 0.0 },
    };
    Json(range)
}

fn parse_service_type(value: &str) -> Result<ServiceType> {
    ServiceType::parse(value)
        .ok_or_else(|| ApiError::Validation(format!("unknown service type: {value}")))
}

fn instance_suffix() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

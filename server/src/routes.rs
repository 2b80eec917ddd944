use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub temperature: f64,
    pub predicted_profit: f64,
}

/// Builds the service router around a shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .with_state(state)
}

/// Static service description.
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Ice Cream Profits Prediction API",
        "description": "Predict ice cream profits based on temperature",
        "endpoints": {
            "/predict": "POST - Make a prediction",
            "/health": "GET - Check API health"
        }
    }))
}

/// Service status and whether a model is loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.model().is_some(),
    })
}

/// Point prediction for one temperature value.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<PredictResponse>, ApiError> {
    let model = state.model().ok_or(ApiError::ModelUnavailable)?;

    let value = body
        .get("temperature")
        .ok_or(ApiError::InvalidInput("Temperature value required"))?;
    let temperature =
        parse_temperature(value).ok_or(ApiError::InvalidInput("Invalid temperature value"))?;

    let predicted = model.predict(temperature);
    if !predicted.is_finite() {
        return Err(ApiError::Internal(format!(
            "prediction for temperature {temperature} is not finite"
        )));
    }

    Ok(Json(PredictResponse {
        temperature,
        predicted_profit: round2(predicted),
    }))
}

/// Accepts JSON numbers and numeric strings.
fn parse_temperature(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

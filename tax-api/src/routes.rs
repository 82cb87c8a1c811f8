use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tax_core::{TaxCalculationResult, TaxInput};
use tracing::info;

use crate::error::AppError;
use crate::extractors::extract_tax_input;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/calculate-tax", post(calculate_tax))
}

/// Liveness probe; always 200 while the process is up.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}

async fn calculate_tax(
    State(state): State<AppState>,
    body: Result<Json<TaxInput>, JsonRejection>,
) -> Result<Json<TaxCalculationResult>, AppError> {
    let input = extract_tax_input(body)?;

    let result = state.calculator.calculate(&input);
    info!(
        employment_type = input.employment_type.as_str(),
        tax_payable = %result.tax_payable,
        "tax calculated"
    );

    Ok(Json(result))
}

async fn health() -> &'static str {
    "ok"
}

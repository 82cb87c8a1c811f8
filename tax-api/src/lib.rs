//! HTTP service for the tax calculator.
//!
//! | Method | Path                 | Body                   | Reply                  |
//! |--------|----------------------|------------------------|------------------------|
//! | POST   | `/api/calculate-tax` | `TaxInput` JSON        | `TaxCalculationResult` |
//! | GET    | `/health`            |                        | `ok`                   |
//!
//! A calculation that cannot be parsed, holds an amount outside
//! `0..=TaxInput::MAX_AMOUNT`, or panics is answered with 400 and
//! `{ "error": "..." }`.

pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let api = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state);

    Router::new().merge(routes::health_router()).merge(api)
}

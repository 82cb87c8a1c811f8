//! Error type returned by request handlers.
//!
//! Every failure is answered with the same flat message. The detailed
//! reason is logged for operators and never sent to the client.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tax_core::TaxInputError;
use thiserror::Error;

/// Message returned to clients for any rejected calculation.
pub const CALCULATION_FAILED: &str = "Failed to calculate tax. Please check your inputs.";

/// JSON body of an error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// The body could not be parsed into a `TaxInput` (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The body parsed but holds a value the engine should not see (400).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] TaxInputError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "tax calculation rejected");

        let body = ErrorBody {
            error: CALCULATION_FAILED.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Response for a request whose handler panicked.
///
/// Installed through `CatchPanicLayer`, so the client still receives the
/// flat 400 body.
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("tax calculation panicked");

    let body = ErrorBody {
        error: CALCULATION_FAILED.to_string(),
    };

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

//! JSON body extraction for handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tax_core::TaxInput;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so that a
/// rejection flows through [`AppError`] instead of axum's plain-text reply.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a [`TaxInput`] and reject negative amounts.
pub fn extract_tax_input(
    result: Result<Json<TaxInput>, JsonRejection>,
) -> Result<TaxInput, AppError> {
    let input = extract_json(result)?;
    input.validate()?;
    Ok(input)
}

//! Shared state handed to every handler through the `State` extractor.

use std::sync::Arc;

use tax_core::TaxCalculator;

/// The calculator holds no per-request state, so one instance is shared
/// by every request.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculator: Arc<TaxCalculator>,
}

impl AppState {
    pub fn new(calculator: TaxCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}

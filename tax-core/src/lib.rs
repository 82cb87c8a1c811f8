pub mod calculations;
pub mod models;
pub mod regime;

pub use calculations::TaxCalculator;
pub use models::*;
pub use regime::{RegimeRegistry, TaxRegime, TaxRegimeError};

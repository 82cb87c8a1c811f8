//! Tax regimes: the band schedule and the ordered deduction list a
//! calculation runs against.
//!
//! Switching between the rent relief and consolidated relief variants, or
//! adopting a future rate change, means building a different [`TaxRegime`]
//! value. The calculator itself does not change.

mod band_schedule;
mod deduction_rule;
mod registry;

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use band_schedule::{BandRule, BandSchedule};
pub use deduction_rule::{
    CapBasis, DeductionKind, DeductionRule, ReliefMethod, consolidated_relief_rules,
    rent_relief_rules,
};
pub use registry::RegimeRegistry;

/// Errors raised while building or looking up a regime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxRegimeError {
    #[error("band width must be positive, got {0}")]
    InvalidBandWidth(Decimal),

    #[error("band rate must be between 0 and 1, got {0}")]
    InvalidBandRate(Decimal),

    #[error("{kind:?} rate must be between 0 and 1, got {rate}")]
    InvalidDeductionRate { kind: DeductionKind, rate: Decimal },

    #[error("{kind:?} amount must be non-negative, got {value}")]
    NegativeDeductionAmount { kind: DeductionKind, value: Decimal },

    #[error("{0:?} appears more than once in the deduction list")]
    DuplicateDeduction(DeductionKind),

    #[error("unknown regime '{name}'; available: {available:?}")]
    UnknownRegime {
        name: String,
        available: Vec<String>,
    },
}

/// A complete rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegime {
    pub name: String,
    pub bands: BandSchedule,
    pub deductions: Vec<DeductionRule>,
}

impl TaxRegime {
    pub const RENT_RELIEF: &'static str = "rent-relief";
    pub const CONSOLIDATED_RELIEF: &'static str = "consolidated-relief";

    /// Current rules: rent relief, no consolidated relief.
    pub fn rent_relief() -> Self {
        Self {
            name: Self::RENT_RELIEF.to_string(),
            bands: BandSchedule::standard(),
            deductions: rent_relief_rules(),
        }
    }

    /// Earlier rules: consolidated relief in place of rent relief.
    pub fn consolidated_relief() -> Self {
        Self {
            name: Self::CONSOLIDATED_RELIEF.to_string(),
            bands: BandSchedule::standard(),
            deductions: consolidated_relief_rules(),
        }
    }

    /// Same deductions, different bands.
    pub fn with_bands(mut self, bands: BandSchedule) -> Self {
        self.bands = bands;
        self
    }

    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if the band schedule or any deduction rule
    /// is invalid, or if a deduction kind is listed twice.
    pub fn validate(&self) -> Result<(), TaxRegimeError> {
        self.bands.validate()?;

        let mut seen = HashSet::new();
        for rule in &self.deductions {
            rule.validate()?;
            if !seen.insert(rule.kind) {
                return Err(TaxRegimeError::DuplicateDeduction(rule.kind));
            }
        }
        Ok(())
    }
}

impl Default for TaxRegime {
    fn default() -> Self {
        Self::rent_relief()
    }
}

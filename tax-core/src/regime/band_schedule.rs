use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TaxRegimeError;

/// A bounded band: the next `width` of taxable income is charged at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandRule {
    pub width: Decimal,
    /// Fraction between 0 and 1 (0.15 for 15%).
    pub rate: Decimal,
}

impl BandRule {
    pub fn new(width: Decimal, rate: Decimal) -> Self {
        Self { width, rate }
    }
}

/// Ordered progressive bands plus the rate for income above all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSchedule {
    pub bands: Vec<BandRule>,
    pub top_rate: Decimal,
}

impl BandSchedule {
    /// The personal income tax schedule:
    ///
    /// | Width        | Rate |
    /// |--------------|------|
    /// | 800,000      | 0%   |
    /// | 2,200,000    | 15%  |
    /// | 9,000,000    | 18%  |
    /// | 13,000,000   | 21%  |
    /// | 25,000,000   | 23%  |
    /// | remainder    | 25%  |
    pub fn standard() -> Self {
        Self {
            bands: vec![
                BandRule::new(dec!(800000), dec!(0.00)),
                BandRule::new(dec!(2200000), dec!(0.15)),
                BandRule::new(dec!(9000000), dec!(0.18)),
                BandRule::new(dec!(13000000), dec!(0.21)),
                BandRule::new(dec!(25000000), dec!(0.23)),
            ],
            top_rate: dec!(0.25),
        }
    }

    /// Income level where the top rate starts (sum of all band widths).
    pub fn top_threshold(&self) -> Decimal {
        self.bands.iter().map(|band| band.width).sum()
    }

    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if any band width is not positive or any
    /// rate (including `top_rate`) lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), TaxRegimeError> {
        for band in &self.bands {
            if band.width <= Decimal::ZERO {
                return Err(TaxRegimeError::InvalidBandWidth(band.width));
            }
            validate_rate(band.rate)?;
        }
        validate_rate(self.top_rate)
    }
}

impl Default for BandSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_rate(rate: Decimal) -> Result<(), TaxRegimeError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        Err(TaxRegimeError::InvalidBandRate(rate))
    } else {
        Ok(())
    }
}

//! Personal income tax calculation.
//!
//! A calculation runs five stages in order, each consuming the output of
//! the one before:
//!
//! | Stage | Description |
//! |-------|-------------|
//! | 1     | Normalize income (business expenses, digital losses, total) |
//! | 2     | Resolve each deduction against its cap |
//! | 3     | Taxable income: total income - total deductions, minimum 0 |
//! | 4     | Allocate taxable income across the progressive bands |
//! | 5     | Assemble the result with effective rate and savings |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{TaxCalculator, TaxInput};
//!
//! let input = TaxInput {
//!     employment_income: dec!(1000000),
//!     ..Default::default()
//! };
//!
//! let result = TaxCalculator::default().calculate(&input);
//!
//! assert_eq!(result.taxable_income, dec!(1000000));
//! assert_eq!(result.tax_payable, dec!(30000));
//! assert_eq!(result.effective_tax_rate, dec!(3));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::bands::allocate_bands;
use crate::calculations::common::max;
use crate::calculations::deductions::resolve_deductions;
use crate::calculations::income::normalize_income;
use crate::regime::{TaxRegime, TaxRegimeError};
use crate::{TaxCalculationResult, TaxInput};

/// Calculator bound to one validated regime.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent calculations.
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    regime: TaxRegime,
}

impl TaxCalculator {
    /// Creates a calculator for `regime`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if the regime fails validation.
    pub fn new(regime: TaxRegime) -> Result<Self, TaxRegimeError> {
        regime.validate()?;
        Ok(Self { regime })
    }

    pub fn regime(&self) -> &TaxRegime {
        &self.regime
    }

    /// Runs every stage for `input`.
    ///
    /// Inputs are not validated here. Negative amounts flow through the
    /// arithmetic unchanged; see [`TaxInput::validate`].
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> TaxCalculationResult {
        let income = normalize_income(input);

        let deductions = resolve_deductions(&self.regime.deductions, input, &income);

        let taxable_income = self.taxable_income(income.total_income, deductions.total);

        let allocation = allocate_bands(&self.regime.bands, taxable_income);

        let effective_tax_rate = self.effective_tax_rate(allocation.tax, income.total_income);

        debug!(
            regime = %self.regime.name,
            total_income = %income.total_income,
            total_deductions = %deductions.total,
            %taxable_income,
            tax_payable = %allocation.tax,
            "tax calculated"
        );

        TaxCalculationResult {
            employment_type: input.employment_type,
            resident: input.resident,
            total_income: income.total_income,
            adjusted_business_income: income.adjusted_business_income,
            net_digital_income: income.net_digital_income,
            total_deductions: deductions.total,
            taxable_income,
            tax_payable: allocation.tax,
            effective_tax_rate,
            band_breakdown: allocation.bands,
            savings_from_deductions: deductions.total,
            deduction_details: deductions.summary(),
            detailed_deductions: deductions.details(),
        }
    }

    /// Calculates taxable income. Deductions beyond total income are lost.
    fn taxable_income(
        &self,
        total_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(total_income - total_deductions, Decimal::ZERO)
    }

    /// Tax as a percentage of total income; zero when there is no income.
    fn effective_tax_rate(
        &self,
        tax_payable: Decimal,
        total_income: Decimal,
    ) -> Decimal {
        if total_income > Decimal::ZERO {
            tax_payable / total_income * dec!(100)
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::regime::BandSchedule;

    // =========================================================================
    // taxable_income tests
    // =========================================================================

    #[test]
    fn taxable_income_subtracts_deductions() {
        let calculator = TaxCalculator::default();

        let result = calculator.taxable_income(dec!(1000000), dec!(250000));

        assert_eq!(result, dec!(750000));
    }

    #[test]
    fn taxable_income_returns_zero_when_deductions_exceed_income() {
        let calculator = TaxCalculator::default();

        let result = calculator.taxable_income(dec!(100000), dec!(500000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // effective_tax_rate tests
    // =========================================================================

    #[test]
    fn effective_tax_rate_is_a_percentage() {
        let calculator = TaxCalculator::default();

        let result = calculator.effective_tax_rate(dec!(30000), dec!(1000000));

        assert_eq!(result, dec!(3));
    }

    #[test]
    fn effective_tax_rate_is_zero_without_income() {
        let calculator = TaxCalculator::default();

        let result = calculator.effective_tax_rate(dec!(0), dec!(0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_rejects_invalid_regime() {
        let regime = TaxRegime::rent_relief().with_bands(BandSchedule {
            bands: vec![],
            top_rate: dec!(2),
        });

        let result = TaxCalculator::new(regime);

        assert_eq!(result.unwrap_err(), TaxRegimeError::InvalidBandRate(dec!(2)));
    }

    #[test]
    fn new_accepts_builtin_regimes() {
        assert!(TaxCalculator::new(TaxRegime::rent_relief()).is_ok());
        assert!(TaxCalculator::new(TaxRegime::consolidated_relief()).is_ok());
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_carries_resident_flag_through() {
        let input = TaxInput {
            resident: true,
            employment_income: dec!(100),
            ..Default::default()
        };

        let result = TaxCalculator::default().calculate(&input);

        assert!(result.resident);
    }

    #[test]
    fn savings_equal_total_deductions() {
        let input = TaxInput {
            employment_income: dec!(5000000),
            nhis_contrib: dec!(60000),
            rent_paid: dec!(1000000),
            ..Default::default()
        };

        let result = TaxCalculator::default().calculate(&input);

        assert_eq!(result.total_deductions, dec!(260000));
        assert_eq!(result.savings_from_deductions, result.total_deductions);
    }

    #[test]
    fn consolidated_regime_reduces_taxable_income_without_claims() {
        let input = TaxInput {
            employment_income: dec!(5000000),
            ..Default::default()
        };
        let calculator = TaxCalculator::new(TaxRegime::consolidated_relief()).unwrap();

        let result = calculator.calculate(&input);

        assert_eq!(result.total_deductions, dec!(1000000));
        assert_eq!(result.taxable_income, dec!(4000000));
        // 2,200,000 × 15% + 1,000,000 × 18%
        assert_eq!(result.tax_payable, dec!(510000));
    }
}

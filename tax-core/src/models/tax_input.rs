use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::EmploymentType;

/// Errors reported by [`TaxInput::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxInputError {
    /// A monetary field holds a negative amount.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A monetary field exceeds [`TaxInput::MAX_AMOUNT`].
    #[error("{field} must not exceed {max}, got {value}", max = TaxInput::MAX_AMOUNT)]
    AmountTooLarge { field: &'static str, value: Decimal },
}

/// Income and deduction figures for a single calculation.
///
/// Every field is required when deserializing. A request that leaves a
/// field out is rejected rather than treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInput {
    pub employment_type: EmploymentType,

    /// Carried through for display; does not affect the calculation.
    pub resident: bool,

    // Income sources
    pub employment_income: Decimal,
    pub freelance_income: Decimal,
    pub digital_income: Decimal,
    pub rental_income: Decimal,
    pub investment_income: Decimal,
    pub capital_gains: Decimal,

    /// Offset against freelance income unless the taxpayer is an employee.
    pub business_expenses: Decimal,

    /// Offset against digital income only.
    pub losses_digital: Decimal,

    // Deduction claims
    pub pension_contrib: Decimal,
    pub nhf_contrib: Decimal,
    pub nhis_contrib: Decimal,
    pub life_insurance: Decimal,
    pub rent_paid: Decimal,
    pub loan_interest: Decimal,
    pub donations: Decimal,
    pub dependents: u32,
}

impl TaxInput {
    /// Largest amount accepted for any single field (₦1 quadrillion).
    ///
    /// Fifteen fields at this ceiling still sum well inside `Decimal`'s
    /// range, so no stage of a calculation can overflow on validated input.
    pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

    /// Monetary fields paired with their wire names, in declaration order.
    fn amounts(&self) -> [(&'static str, Decimal); 15] {
        [
            ("employmentIncome", self.employment_income),
            ("freelanceIncome", self.freelance_income),
            ("digitalIncome", self.digital_income),
            ("rentalIncome", self.rental_income),
            ("investmentIncome", self.investment_income),
            ("capitalGains", self.capital_gains),
            ("businessExpenses", self.business_expenses),
            ("lossesDigital", self.losses_digital),
            ("pensionContrib", self.pension_contrib),
            ("nhfContrib", self.nhf_contrib),
            ("nhisContrib", self.nhis_contrib),
            ("lifeInsurance", self.life_insurance),
            ("rentPaid", self.rent_paid),
            ("loanInterest", self.loan_interest),
            ("donations", self.donations),
        ]
    }

    /// Rejects negative amounts and amounts above [`Self::MAX_AMOUNT`].
    ///
    /// The calculator does not call this itself; callers validate at their
    /// boundary before calculating. Unvalidated amounts near `Decimal::MAX`
    /// can overflow while income streams are summed.
    ///
    /// # Errors
    ///
    /// Returns [`TaxInputError::NegativeAmount`] or
    /// [`TaxInputError::AmountTooLarge`] for the first offending field.
    pub fn validate(&self) -> Result<(), TaxInputError> {
        for (field, value) in self.amounts() {
            if value < Decimal::ZERO {
                return Err(TaxInputError::NegativeAmount { field, value });
            }
            if value > Self::MAX_AMOUNT {
                return Err(TaxInputError::AmountTooLarge { field, value });
            }
        }
        Ok(())
    }

    /// True when at least one income stream is positive.
    pub fn has_income(&self) -> bool {
        self.amounts()[..6]
            .iter()
            .any(|(_, value)| *value > Decimal::ZERO)
    }
}

//! Income normalization: offsets expenses and losses against the streams
//! they belong to, then sums every stream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxInput;
use crate::calculations::common::max;

/// Income totals after expenses and losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIncome {
    /// Freelance income, less business expenses unless the taxpayer is an
    /// employee. Never negative.
    pub adjusted_business_income: Decimal,
    /// Digital income less digital losses. Never negative.
    pub net_digital_income: Decimal,
    pub total_income: Decimal,
}

/// Normalizes the income streams of `input`.
///
/// Losses on one stream never reduce another stream.
pub fn normalize_income(input: &TaxInput) -> NormalizedIncome {
    let adjusted_business_income = if input.employment_type.deducts_business_expenses() {
        max(input.freelance_income - input.business_expenses, Decimal::ZERO)
    } else {
        input.freelance_income
    };

    let net_digital_income = max(input.digital_income - input.losses_digital, Decimal::ZERO);

    let total_income = input.employment_income
        + adjusted_business_income
        + net_digital_income
        + input.rental_income
        + input.investment_income
        + input.capital_gains;

    NormalizedIncome {
        adjusted_business_income,
        net_digital_income,
        total_income,
    }
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// One slice of taxable income taxed at a single rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Human-readable bounds of the slice, e.g. `₦800,000 - ₦1,000,000`.
    pub range: String,
    /// Income taxed in this slice.
    pub amount: Decimal,
    /// Rate as a percentage (15 for 15%).
    pub rate: Decimal,
    /// Tax charged on this slice.
    pub tax: Decimal,
}

/// Allowed amount per deduction kind.
///
/// Kinds that the active regime does not include stay at zero, so the
/// shape is identical across regimes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionSummary {
    pub pension: Decimal,
    pub nhf: Decimal,
    pub nhis: Decimal,
    pub life_insurance: Decimal,
    pub rent_relief: Decimal,
    pub loan_interest: Decimal,
    pub donations: Decimal,
    pub dependent_relief: Decimal,
    pub consolidated_relief: Decimal,
}

/// Itemized explanation of one allowed deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionDetail {
    pub name: String,
    /// Amount actually deducted.
    pub amount: Decimal,
    /// Amount claimed before any cap.
    pub original_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    /// How `amount` was derived.
    pub calculation: String,
    pub description: String,
}

/// Full breakdown of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    pub employment_type: EmploymentType,
    pub resident: bool,
    pub total_income: Decimal,
    pub adjusted_business_income: Decimal,
    pub net_digital_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_payable: Decimal,
    /// Tax payable as a percentage of total income.
    pub effective_tax_rate: Decimal,
    pub band_breakdown: Vec<TaxBand>,
    pub savings_from_deductions: Decimal,
    pub deduction_details: DeductionSummary,
    pub detailed_deductions: Vec<DeductionDetail>,
}

/// Rough burden classification derived from the effective rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl TaxCalculationResult {
    /// Below 10% is low, below 18% medium, anything else high.
    pub fn risk_level(&self) -> RiskLevel {
        if self.effective_tax_rate < dec!(10) {
            RiskLevel::Low
        } else if self.effective_tax_rate < dec!(18) {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

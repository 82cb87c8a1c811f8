use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TaxRegimeError;
use crate::TaxInput;

/// Every deduction or relief the calculator knows how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeductionKind {
    Pension,
    Nhf,
    Nhis,
    LifeInsurance,
    RentRelief,
    LoanInterest,
    Donations,
    DependentRelief,
    ConsolidatedRelief,
}

impl DeductionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pension => "Pension Contribution",
            Self::Nhf => "National Housing Fund (NHF)",
            Self::Nhis => "National Health Insurance Scheme (NHIS)",
            Self::LifeInsurance => "Life Insurance / Annuity Premium",
            Self::RentRelief => "Rent Relief",
            Self::LoanInterest => "Loan Interest (Home Ownership)",
            Self::Donations => "Charitable Donations",
            Self::DependentRelief => "Dependent Relief",
            Self::ConsolidatedRelief => "Consolidated Relief Allowance (CRA)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pension => {
                "Contributions under the Pension Reform Act. Maximum deductible is 8% of your employment income."
            }
            Self::Nhf => "National Housing Fund contributions. Typically 2.5% of basic salary.",
            Self::Nhis => "Your annual NHIS premium payments for health insurance coverage.",
            Self::LifeInsurance => {
                "Annual premiums paid for life insurance policies or annuity plans for yourself or your spouse."
            }
            Self::RentRelief => {
                "Rent relief replaces the previous Consolidated Relief Allowance (CRA). You can claim 20% of your annual rent paid, subject to a maximum of ₦500,000 (whichever is lower). Documentary evidence such as lease agreements or payment receipts is required."
            }
            Self::LoanInterest => {
                "Interest paid on loans used to develop or purchase your owner-occupied residential house."
            }
            Self::Donations => {
                "Donations to approved NGOs or charitable organizations. Maximum deductible is 10% of your total income."
            }
            Self::DependentRelief => {
                "Relief for dependents you support financially. ₦2,500 per dependent, maximum 4 dependents (₦10,000 total)."
            }
            Self::ConsolidatedRelief => {
                "A flat relief of 20% of your total income, subject to a minimum of ₦200,000. No claim or evidence is required."
            }
        }
    }

    /// Wording used when a claim is allowed in full.
    pub fn actual_label(&self) -> &'static str {
        match self {
            Self::Nhis => "Actual contribution",
            Self::LifeInsurance => "Actual premium paid",
            Self::LoanInterest => "Actual interest paid",
            _ => "Actual amount claimed",
        }
    }

    /// What the claimed figure counts, as used in trace strings.
    pub fn claim_noun(&self) -> &'static str {
        match self {
            Self::RentRelief => "rent",
            Self::DependentRelief => "dependent",
            _ => "claim",
        }
    }

    /// The figure the taxpayer claimed for this kind, before any cap.
    ///
    /// Consolidated relief is not claimed, so it reads zero.
    pub fn claimed(&self, input: &TaxInput) -> Decimal {
        match self {
            Self::Pension => input.pension_contrib,
            Self::Nhf => input.nhf_contrib,
            Self::Nhis => input.nhis_contrib,
            Self::LifeInsurance => input.life_insurance,
            Self::RentRelief => input.rent_paid,
            Self::LoanInterest => input.loan_interest,
            Self::Donations => input.donations,
            Self::DependentRelief => Decimal::from(input.dependents),
            Self::ConsolidatedRelief => Decimal::ZERO,
        }
    }
}

/// Income figure a percentage cap is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapBasis {
    EmploymentIncome,
    TotalIncome,
}

impl CapBasis {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmploymentIncome => "employment income",
            Self::TotalIncome => "total income",
        }
    }
}

/// How a claimed figure becomes an allowed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum ReliefMethod {
    /// `min(claimed, basis × rate)`.
    IncomeCapped { basis: CapBasis, rate: Decimal },
    /// The claim is allowed as is.
    Actual,
    /// `min(claimed × rate, ceiling)`.
    RateWithCeiling { rate: Decimal, ceiling: Decimal },
    /// `min(claimed, max_count) × per_head`, where the claim is a head count.
    PerHead { per_head: Decimal, max_count: u32 },
    /// `max(basis × rate, floor)`, independent of any claim.
    GreaterOf {
        basis: CapBasis,
        rate: Decimal,
        floor: Decimal,
    },
}

/// One entry in a regime's ordered deduction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRule {
    pub kind: DeductionKind,
    #[serde(flatten)]
    pub method: ReliefMethod,
}

impl DeductionRule {
    pub fn new(kind: DeductionKind, method: ReliefMethod) -> Self {
        Self { kind, method }
    }

    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if a rate lies outside `[0, 1]` or a
    /// monetary parameter is negative.
    pub fn validate(&self) -> Result<(), TaxRegimeError> {
        let (rate, amount) = match &self.method {
            ReliefMethod::IncomeCapped { rate, .. } => (Some(*rate), None),
            ReliefMethod::Actual => (None, None),
            ReliefMethod::RateWithCeiling { rate, ceiling } => (Some(*rate), Some(*ceiling)),
            ReliefMethod::PerHead { per_head, .. } => (None, Some(*per_head)),
            ReliefMethod::GreaterOf { rate, floor, .. } => (Some(*rate), Some(*floor)),
        };

        if let Some(rate) = rate.filter(|r| *r < Decimal::ZERO || *r > Decimal::ONE) {
            return Err(TaxRegimeError::InvalidDeductionRate {
                kind: self.kind,
                rate,
            });
        }
        if let Some(value) = amount.filter(|v| *v < Decimal::ZERO) {
            return Err(TaxRegimeError::NegativeDeductionAmount {
                kind: self.kind,
                value,
            });
        }
        Ok(())
    }
}

/// Deductions applied when rent relief is in force, in display order.
pub fn rent_relief_rules() -> Vec<DeductionRule> {
    vec![
        DeductionRule::new(
            DeductionKind::Pension,
            ReliefMethod::IncomeCapped {
                basis: CapBasis::EmploymentIncome,
                rate: dec!(0.08),
            },
        ),
        DeductionRule::new(
            DeductionKind::Nhf,
            ReliefMethod::IncomeCapped {
                basis: CapBasis::EmploymentIncome,
                rate: dec!(0.025),
            },
        ),
        DeductionRule::new(DeductionKind::Nhis, ReliefMethod::Actual),
        DeductionRule::new(DeductionKind::LifeInsurance, ReliefMethod::Actual),
        DeductionRule::new(
            DeductionKind::RentRelief,
            ReliefMethod::RateWithCeiling {
                rate: dec!(0.20),
                ceiling: dec!(500000),
            },
        ),
        DeductionRule::new(DeductionKind::LoanInterest, ReliefMethod::Actual),
        DeductionRule::new(
            DeductionKind::Donations,
            ReliefMethod::IncomeCapped {
                basis: CapBasis::TotalIncome,
                rate: dec!(0.10),
            },
        ),
        DeductionRule::new(
            DeductionKind::DependentRelief,
            ReliefMethod::PerHead {
                per_head: dec!(2500),
                max_count: 4,
            },
        ),
    ]
}

/// The older list: rent relief is replaced by consolidated relief.
pub fn consolidated_relief_rules() -> Vec<DeductionRule> {
    rent_relief_rules()
        .into_iter()
        .map(|rule| match rule.kind {
            DeductionKind::RentRelief => DeductionRule::new(
                DeductionKind::ConsolidatedRelief,
                ReliefMethod::GreaterOf {
                    basis: CapBasis::TotalIncome,
                    rate: dec!(0.20),
                    floor: dec!(200000),
                },
            ),
            _ => rule,
        })
        .collect()
}

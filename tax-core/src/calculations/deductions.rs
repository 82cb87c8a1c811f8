//! Deduction resolution.
//!
//! Each rule in the regime's list turns a claimed figure into an allowed
//! amount and a trace string describing how the amount was reached. Rules
//! are independent of each other; list order only fixes display order.

use rust_decimal::Decimal;

use crate::calculations::common::{format_naira, format_percent, max, min};
use crate::calculations::income::NormalizedIncome;
use crate::regime::{CapBasis, DeductionKind, DeductionRule, ReliefMethod};
use crate::{DeductionDetail, DeductionSummary, TaxInput};

/// One rule applied to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeduction {
    pub kind: DeductionKind,
    pub amount: Decimal,
    pub original_amount: Decimal,
    pub limit: Option<Decimal>,
    pub calculation: String,
}

impl ResolvedDeduction {
    fn to_detail(&self) -> DeductionDetail {
        DeductionDetail {
            name: self.kind.name().to_string(),
            amount: self.amount,
            original_amount: self.original_amount,
            limit: self.limit,
            calculation: self.calculation.clone(),
            description: self.kind.description().to_string(),
        }
    }
}

/// Every rule of a regime applied to one input, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeductions {
    pub items: Vec<ResolvedDeduction>,
    pub total: Decimal,
}

impl ResolvedDeductions {
    /// Allowed amount per kind; kinds outside the regime stay at zero.
    pub fn summary(&self) -> DeductionSummary {
        let mut summary = DeductionSummary::default();
        for item in &self.items {
            let slot = match item.kind {
                DeductionKind::Pension => &mut summary.pension,
                DeductionKind::Nhf => &mut summary.nhf,
                DeductionKind::Nhis => &mut summary.nhis,
                DeductionKind::LifeInsurance => &mut summary.life_insurance,
                DeductionKind::RentRelief => &mut summary.rent_relief,
                DeductionKind::LoanInterest => &mut summary.loan_interest,
                DeductionKind::Donations => &mut summary.donations,
                DeductionKind::DependentRelief => &mut summary.dependent_relief,
                DeductionKind::ConsolidatedRelief => &mut summary.consolidated_relief,
            };
            *slot = item.amount;
        }
        summary
    }

    /// Itemized entries for every deduction with a positive amount.
    pub fn details(&self) -> Vec<DeductionDetail> {
        self.items
            .iter()
            .filter(|item| item.amount > Decimal::ZERO)
            .map(ResolvedDeduction::to_detail)
            .collect()
    }
}

/// Applies `rules` to `input` in order.
pub fn resolve_deductions(
    rules: &[DeductionRule],
    input: &TaxInput,
    income: &NormalizedIncome,
) -> ResolvedDeductions {
    let items: Vec<_> = rules
        .iter()
        .map(|rule| resolve(rule, input, income))
        .collect();
    let total = items.iter().map(|item| item.amount).sum();

    ResolvedDeductions { items, total }
}

fn basis_value(
    basis: CapBasis,
    input: &TaxInput,
    income: &NormalizedIncome,
) -> Decimal {
    match basis {
        CapBasis::EmploymentIncome => input.employment_income,
        CapBasis::TotalIncome => income.total_income,
    }
}

fn resolve(
    rule: &DeductionRule,
    input: &TaxInput,
    income: &NormalizedIncome,
) -> ResolvedDeduction {
    let kind = rule.kind;
    let claimed = kind.claimed(input);

    match &rule.method {
        ReliefMethod::IncomeCapped { basis, rate } => {
            let basis_amount = basis_value(*basis, input, income);
            let limit = basis_amount * rate;
            let pct = format_percent(*rate);
            let calculation = if limit < claimed {
                format!(
                    "Limited to {pct} of {} ({})",
                    basis.label(),
                    format_naira(limit)
                )
            } else {
                format!(
                    "{pct} of {}: {} × {pct} = {}",
                    basis.label(),
                    format_naira(basis_amount),
                    format_naira(limit)
                )
            };

            ResolvedDeduction {
                kind,
                amount: min(claimed, limit),
                original_amount: claimed,
                limit: Some(limit),
                calculation,
            }
        }
        ReliefMethod::Actual => ResolvedDeduction {
            kind,
            amount: claimed,
            original_amount: claimed,
            limit: None,
            calculation: format!("{}: {}", kind.actual_label(), format_naira(claimed)),
        },
        ReliefMethod::RateWithCeiling { rate, ceiling } => {
            let candidate = claimed * rate;
            let amount = min(candidate, *ceiling);
            let pct = format_percent(*rate);
            let calculation = if candidate > *ceiling {
                format!(
                    "{pct} of {} ({}) capped at {} maximum",
                    kind.claim_noun(),
                    format_naira(candidate),
                    format_naira(*ceiling)
                )
            } else {
                format!(
                    "{pct} of {} paid: {} × {pct} = {}",
                    kind.claim_noun(),
                    format_naira(claimed),
                    format_naira(amount)
                )
            };

            ResolvedDeduction {
                kind,
                amount,
                original_amount: claimed,
                limit: Some(*ceiling),
                calculation,
            }
        }
        ReliefMethod::PerHead {
            per_head,
            max_count,
        } => {
            let max_heads = Decimal::from(*max_count);
            let heads = min(claimed, max_heads);
            let amount = heads * per_head;
            let noun = kind.claim_noun();
            let plural = if heads > Decimal::ONE { "s" } else { "" };
            let capped = if claimed > max_heads {
                format!(" (capped at {max_count} {noun}s)")
            } else {
                String::new()
            };

            ResolvedDeduction {
                kind,
                amount,
                original_amount: claimed,
                limit: Some(max_heads),
                calculation: format!(
                    "{} {noun}{plural} × {} = {}{capped}",
                    heads.normalize(),
                    format_naira(*per_head),
                    format_naira(amount)
                ),
            }
        }
        ReliefMethod::GreaterOf { basis, rate, floor } => {
            let basis_amount = basis_value(*basis, input, income);
            let portion = basis_amount * rate;
            let pct = format_percent(*rate);
            let calculation = if portion >= *floor {
                format!(
                    "{pct} of {}: {} × {pct} = {}",
                    basis.label(),
                    format_naira(basis_amount),
                    format_naira(portion)
                )
            } else {
                format!(
                    "Minimum relief of {} applies ({pct} of {} is {})",
                    format_naira(*floor),
                    basis.label(),
                    format_naira(portion)
                )
            };

            ResolvedDeduction {
                kind,
                amount: max(portion, *floor),
                original_amount: portion,
                limit: None,
                calculation,
            }
        }
    }
}

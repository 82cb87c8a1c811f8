//! End-to-end scenarios and properties of the tax calculator.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{EmploymentType, TaxCalculationResult, TaxCalculator, TaxInput, TaxRegime};

fn calculate(input: &TaxInput) -> TaxCalculationResult {
    TaxCalculator::default().calculate(input)
}

/// A mixed input that touches every income stream and every deduction.
fn busy_input() -> TaxInput {
    TaxInput {
        employment_type: EmploymentType::Both,
        resident: true,
        employment_income: dec!(18500000),
        freelance_income: dec!(6200000),
        digital_income: dec!(1500000),
        rental_income: dec!(2400000),
        investment_income: dec!(750000),
        capital_gains: dec!(2000000),
        business_expenses: dec!(1800000),
        losses_digital: dec!(300000),
        pension_contrib: dec!(2000000),
        nhf_contrib: dec!(300000),
        nhis_contrib: dec!(150000),
        life_insurance: dec!(400000),
        rent_paid: dec!(4000000),
        loan_interest: dec!(250000),
        donations: dec!(5000000),
        dependents: 5,
    }
}

// =========================================================================
// scenarios
// =========================================================================

#[test]
fn scenario_a_employee_on_one_million() {
    let input = TaxInput {
        employment_type: EmploymentType::Employee,
        employment_income: dec!(1000000),
        ..Default::default()
    };

    let result = calculate(&input);

    assert_eq!(result.total_income, dec!(1000000));
    assert_eq!(result.total_deductions, dec!(0));
    assert_eq!(result.taxable_income, dec!(1000000));
    assert_eq!(result.band_breakdown.len(), 2);
    assert_eq!(result.band_breakdown[0].amount, dec!(800000));
    assert_eq!(result.band_breakdown[0].rate, dec!(0));
    assert_eq!(result.band_breakdown[0].tax, dec!(0));
    assert_eq!(result.band_breakdown[1].amount, dec!(200000));
    assert_eq!(result.band_breakdown[1].rate, dec!(15));
    assert_eq!(result.band_breakdown[1].tax, dec!(30000));
    assert_eq!(result.tax_payable, dec!(30000));
    assert_eq!(result.effective_tax_rate, dec!(3.0));
    assert!(result.detailed_deductions.is_empty());
}

#[test]
fn scenario_b_expenses_exceed_freelance_income() {
    let input = TaxInput {
        employment_type: EmploymentType::Freelancer,
        freelance_income: dec!(500000),
        business_expenses: dec!(600000),
        ..Default::default()
    };

    let result = calculate(&input);

    assert_eq!(result.adjusted_business_income, dec!(0));
    assert_eq!(result.total_income, dec!(0));
    assert_eq!(result.taxable_income, dec!(0));
    assert_eq!(result.tax_payable, dec!(0));
    assert_eq!(result.effective_tax_rate, dec!(0));
    assert!(result.band_breakdown.is_empty());
}

#[test]
fn scenario_c_pension_capped_at_eight_percent() {
    let input = TaxInput {
        employment_type: EmploymentType::Employee,
        employment_income: dec!(10000000),
        pension_contrib: dec!(2000000),
        ..Default::default()
    };

    let result = calculate(&input);

    assert_eq!(result.deduction_details.pension, dec!(800000));
    let pension = &result.detailed_deductions[0];
    assert_eq!(pension.name, "Pension Contribution");
    assert_eq!(pension.amount, dec!(800000));
    assert_eq!(pension.original_amount, dec!(2000000));
    assert_eq!(pension.limit, Some(dec!(800000)));
    assert_eq!(
        pension.calculation,
        "Limited to 8% of employment income (₦800,000)"
    );
}

#[test]
fn scenario_d_rent_relief_capped() {
    let input = TaxInput {
        rent_paid: dec!(3000000),
        ..Default::default()
    };

    let result = calculate(&input);

    assert_eq!(result.deduction_details.rent_relief, dec!(500000));
    assert_eq!(result.detailed_deductions.len(), 1);
    assert_eq!(result.detailed_deductions[0].name, "Rent Relief");
    assert_eq!(result.detailed_deductions[0].amount, dec!(500000));
}

#[test]
fn scenario_e_dependents_capped_at_four() {
    let input = TaxInput {
        dependents: 7,
        ..Default::default()
    };

    let result = calculate(&input);

    assert_eq!(result.deduction_details.dependent_relief, dec!(10000));
    assert_eq!(result.total_deductions, dec!(10000));
    // No income, so the relief is unusable.
    assert_eq!(result.taxable_income, dec!(0));
}

#[test]
fn busy_input_matches_hand_calculation() {
    let result = calculate(&busy_input());

    assert_eq!(result.adjusted_business_income, dec!(4400000));
    assert_eq!(result.net_digital_income, dec!(1200000));
    // 18.5M + 4.4M + 1.2M + 2.4M + 0.75M + 2M
    assert_eq!(result.total_income, dec!(29250000));

    let details = &result.deduction_details;
    assert_eq!(details.pension, dec!(1480000));
    assert_eq!(details.nhf, dec!(300000));
    assert_eq!(details.nhis, dec!(150000));
    assert_eq!(details.life_insurance, dec!(400000));
    assert_eq!(details.rent_relief, dec!(500000));
    assert_eq!(details.loan_interest, dec!(250000));
    assert_eq!(details.donations, dec!(2925000));
    assert_eq!(details.dependent_relief, dec!(10000));
    assert_eq!(details.consolidated_relief, dec!(0));
    assert_eq!(result.total_deductions, dec!(6015000));

    assert_eq!(result.taxable_income, dec!(23235000));
    // 330,000 + 1,620,000 + 11,235,000 × 21%
    assert_eq!(result.tax_payable, dec!(4309350));
    assert_eq!(result.band_breakdown.len(), 4);
    assert_eq!(result.detailed_deductions.len(), 8);
}

// =========================================================================
// properties
// =========================================================================

fn sample_inputs() -> Vec<TaxInput> {
    let mut inputs = vec![TaxInput::default(), busy_input()];
    for income in [
        dec!(1),
        dec!(799999.99),
        dec!(800000),
        dec!(800000.01),
        dec!(3000000),
        dec!(12000000),
        dec!(25000000),
        dec!(50000000),
        dec!(50000001),
        dec!(125000000),
    ] {
        inputs.push(TaxInput {
            employment_income: income,
            pension_contrib: income * dec!(0.1),
            rent_paid: dec!(900000),
            dependents: 2,
            ..Default::default()
        });
    }
    inputs
}

#[test]
fn taxable_income_is_floored_difference() {
    for input in sample_inputs() {
        let result = calculate(&input);

        let expected = (result.total_income - result.total_deductions).max(Decimal::ZERO);
        assert_eq!(result.taxable_income, expected);
    }
}

#[test]
fn band_slices_sum_to_taxable_income_and_tax() {
    for input in sample_inputs() {
        let result = calculate(&input);

        let amounts: Decimal = result.band_breakdown.iter().map(|b| b.amount).sum();
        let taxes: Decimal = result.band_breakdown.iter().map(|b| b.tax).sum();
        assert_eq!(amounts, result.taxable_income);
        assert_eq!(taxes, result.tax_payable);
    }
}

#[test]
fn every_emitted_amount_is_non_negative() {
    for input in sample_inputs() {
        let result = calculate(&input);

        assert!(result.total_income >= Decimal::ZERO);
        assert!(result.taxable_income >= Decimal::ZERO);
        assert!(result.tax_payable >= Decimal::ZERO);
        assert!(result.effective_tax_rate >= Decimal::ZERO);
        for band in &result.band_breakdown {
            assert!(band.amount > Decimal::ZERO);
            assert!(band.tax >= Decimal::ZERO);
        }
        for detail in &result.detailed_deductions {
            assert!(detail.amount > Decimal::ZERO);
        }
    }
}

#[test]
fn repeated_calculation_is_identical() {
    let calculator = TaxCalculator::default();
    let input = busy_input();

    let first = calculator.calculate(&input);
    let second = calculator.calculate(&input);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn raising_any_income_never_lowers_income_or_tax() {
    let bump = dec!(1750000);
    let base = busy_input();
    let base_result = calculate(&base);

    let bumped: Vec<TaxInput> = vec![
        TaxInput { employment_income: base.employment_income + bump, ..base.clone() },
        TaxInput { freelance_income: base.freelance_income + bump, ..base.clone() },
        TaxInput { digital_income: base.digital_income + bump, ..base.clone() },
        TaxInput { rental_income: base.rental_income + bump, ..base.clone() },
        TaxInput { investment_income: base.investment_income + bump, ..base.clone() },
        TaxInput { capital_gains: base.capital_gains + bump, ..base.clone() },
    ];

    for input in bumped {
        let result = calculate(&input);
        assert!(result.total_income >= base_result.total_income);
        assert!(result.tax_payable >= base_result.tax_payable);
    }
}

#[test]
fn pension_cap_binds_exactly() {
    for employment_income in [dec!(250000), dec!(3333333.33), dec!(90000000)] {
        let input = TaxInput {
            employment_income,
            pension_contrib: employment_income,
            ..Default::default()
        };

        let result = calculate(&input);

        assert_eq!(
            result.deduction_details.pension,
            employment_income * dec!(0.08)
        );
    }
}

#[test]
fn detailed_deductions_are_the_positive_summary_fields() {
    let result = calculate(&TaxInput {
        employment_income: dec!(2000000),
        nhis_contrib: dec!(10000),
        donations: dec!(1000),
        ..Default::default()
    });

    let names: Vec<_> = result
        .detailed_deductions
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["National Health Insurance Scheme (NHIS)", "Charitable Donations"]
    );
}

#[test]
fn result_serializes_with_camel_case_wire_names() {
    let result = calculate(&TaxInput {
        employment_income: dec!(1000000),
        pension_contrib: dec!(10000),
        ..Default::default()
    });

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["taxPayable"], serde_json::json!(30000.0));
    assert_eq!(json["bandBreakdown"][1]["range"], "₦800,000 - ₦1,000,000");
    assert_eq!(json["deductionDetails"]["consolidatedRelief"], serde_json::json!(0.0));
    assert_eq!(json["detailedDeductions"][0]["originalAmount"], serde_json::json!(10000.0));
    assert!(json["detailedDeductions"][0].get("limit").is_some());
}

#[test]
fn regimes_differ_only_in_relief() {
    let input = TaxInput {
        employment_income: dec!(6000000),
        rent_paid: dec!(1000000),
        ..Default::default()
    };
    let consolidated = TaxCalculator::new(TaxRegime::consolidated_relief()).unwrap();

    let rent = calculate(&input);
    let cra = consolidated.calculate(&input);

    assert_eq!(rent.deduction_details.rent_relief, dec!(200000));
    assert_eq!(rent.deduction_details.consolidated_relief, dec!(0));
    assert_eq!(cra.deduction_details.rent_relief, dec!(0));
    assert_eq!(cra.deduction_details.consolidated_relief, dec!(1200000));
    assert!(cra.tax_payable < rent.tax_payable);
}

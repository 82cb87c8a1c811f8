//! Integration tests for loading fixtures and running them through the calculator.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::regime::BandSchedule;
use tax_core::{EmploymentType, RegimeRegistry, TaxCalculator, TaxRegime};
use tax_data::{BandScheduleLoader, BandScheduleLoaderError, InputLoader};

const STANDARD_BANDS: &str = include_str!("../test-data/bands_standard.csv");
const FLAT_BANDS: &str = include_str!("../test-data/bands_flat.csv");
const INPUTS: &str = include_str!("../test-data/inputs.json");

#[test]
fn test_standard_csv_matches_builtin_schedule() {
    let schedule = BandScheduleLoader::load(STANDARD_BANDS.as_bytes()).expect("Failed to load");

    assert_eq!(schedule, BandSchedule::standard());
    assert_eq!(schedule.top_threshold(), dec!(50000000));
}

#[test]
fn test_load_fixture_inputs() {
    let inputs = InputLoader::load(INPUTS.as_bytes()).expect("Failed to load inputs");

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].employment_type, EmploymentType::Employee);
    assert_eq!(inputs[1].employment_type, EmploymentType::Freelancer);
    assert!(!inputs[1].resident);
}

#[test]
fn test_fixture_inputs_under_rent_relief() {
    let inputs = InputLoader::load(INPUTS.as_bytes()).expect("Failed to load inputs");
    let calculator = TaxCalculator::default();

    let employee = calculator.calculate(&inputs[0]);
    // pension 400,000 + rent 240,000 + dependents 5,000
    assert_eq!(employee.total_deductions, dec!(645000));
    assert_eq!(employee.taxable_income, dec!(4355000));
    assert_eq!(employee.tax_payable, dec!(573900));

    let freelancer = calculator.calculate(&inputs[1]);
    assert_eq!(freelancer.adjusted_business_income, dec!(2500000));
    assert_eq!(freelancer.net_digital_income, dec!(800000));
    assert_eq!(freelancer.total_income, dec!(3300000));
    assert_eq!(freelancer.tax_payable, dec!(384000));
}

#[test]
fn test_fixture_inputs_under_consolidated_relief() {
    let inputs = InputLoader::load(INPUTS.as_bytes()).expect("Failed to load inputs");
    let regime = RegimeRegistry::builtin()
        .get(TaxRegime::CONSOLIDATED_RELIEF)
        .expect("builtin regime")
        .clone();
    let calculator = TaxCalculator::new(regime).expect("valid regime");

    let result = calculator.calculate(&inputs[0]);

    assert_eq!(result.deduction_details.consolidated_relief, dec!(1000000));
    assert_eq!(result.deduction_details.rent_relief, dec!(0));
    assert_eq!(result.total_deductions, dec!(1405000));
    assert_eq!(result.tax_payable, dec!(437100));
}

#[test]
fn test_custom_band_schedule_replaces_builtin() {
    let inputs = InputLoader::load(INPUTS.as_bytes()).expect("Failed to load inputs");
    let bands = BandScheduleLoader::load(FLAT_BANDS.as_bytes()).expect("Failed to load bands");
    let calculator =
        TaxCalculator::new(TaxRegime::rent_relief().with_bands(bands)).expect("valid regime");

    let results: Vec<_> = inputs.iter().map(|i| calculator.calculate(i)).collect();

    assert_eq!(results[0].tax_payable, dec!(335500));
    assert_eq!(results[1].tax_payable, dec!(230000));
    assert_eq!(results[1].band_breakdown[1].range, "Above ₦1,000,000");
}

#[test]
fn test_truncated_schedule_is_rejected() {
    let truncated: String = STANDARD_BANDS.lines().take(3).collect::<Vec<_>>().join("\n");

    let err = BandScheduleLoader::load(truncated.as_bytes()).expect_err("Should fail");

    assert!(matches!(err, BandScheduleLoaderError::MissingTopRate));
}

mod employment_type;
mod tax_input;
mod tax_result;

pub use employment_type::EmploymentType;
pub use tax_input::{TaxInput, TaxInputError};
pub use tax_result::{DeductionDetail, DeductionSummary, RiskLevel, TaxBand, TaxCalculationResult};

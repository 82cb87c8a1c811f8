//! Tax calculation stages.
//!
//! Each stage lives in its own module and is a plain function of its
//! inputs. [`TaxCalculator`] runs them in order against a regime.

pub mod bands;
pub mod calculator;
pub mod common;
pub mod deductions;
pub mod income;

pub use bands::{BandAllocation, allocate_bands};
pub use calculator::TaxCalculator;
pub use deductions::{ResolvedDeduction, ResolvedDeductions, resolve_deductions};
pub use income::{NormalizedIncome, normalize_income};

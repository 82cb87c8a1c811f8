//! Progressive band allocation.
//!
//! Taxable income fills each band of the schedule in turn. Whatever is
//! left once every bounded band is full is charged at the top rate.

use rust_decimal::Decimal;

use crate::TaxBand;
use crate::calculations::common::{format_naira, percent};
use crate::regime::BandSchedule;

/// Taxable income split across bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandAllocation {
    /// Slices in ascending income order. Empty when nothing is taxable.
    pub bands: Vec<TaxBand>,
    /// Sum of the tax on every slice.
    pub tax: Decimal,
}

/// Allocates `taxable_income` across `schedule`.
///
/// Income landing exactly on a band boundary stays in the lower band.
pub fn allocate_bands(
    schedule: &BandSchedule,
    taxable_income: Decimal,
) -> BandAllocation {
    let mut remaining = taxable_income;
    let mut previous_threshold = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut bands = Vec::new();

    for band in &schedule.bands {
        if remaining <= Decimal::ZERO {
            break;
        }

        let slice = if remaining > band.width {
            band.width
        } else {
            remaining
        };
        let slice_tax = slice * band.rate;

        bands.push(TaxBand {
            range: format!(
                "{} - {}",
                format_naira(previous_threshold),
                format_naira(previous_threshold + slice)
            ),
            amount: slice,
            rate: percent(band.rate),
            tax: slice_tax,
        });
        tax += slice_tax;
        remaining -= slice;
        previous_threshold += band.width;
    }

    if remaining > Decimal::ZERO {
        let slice_tax = remaining * schedule.top_rate;
        bands.push(TaxBand {
            range: format!("Above {}", format_naira(schedule.top_threshold())),
            amount: remaining,
            rate: percent(schedule.top_rate),
            tax: slice_tax,
        });
        tax += slice_tax;
    }

    BandAllocation { bands, tax }
}

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::TaxRegimeError;
use tax_core::regime::{BandRule, BandSchedule};
use thiserror::Error;

/// Errors that can occur when loading a band schedule.
#[derive(Debug, Error)]
pub enum BandScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no top-rate row (a row with an empty width) found")]
    MissingTopRate,

    #[error("row {0} has an empty width but is not the last row")]
    TopRateNotLast(usize),

    #[error("invalid band schedule: {0}")]
    Invalid(#[from] TaxRegimeError),
}

impl From<csv::Error> for BandScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        BandScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a band schedule CSV file.
///
/// - `width`: how much income the band covers (empty for the top rate)
/// - `rate`: the band rate as a decimal (e.g., 0.15 for 15%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BandScheduleRecord {
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub width: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim()
        .parse::<Decimal>()
        .map_err(|e| serde::de::Error::custom(format!("invalid rate '{s}': {e}")))
}

/// Loader for band schedules from CSV files.
///
/// The CSV lists bands in ascending order. The final row leaves `width`
/// empty and carries the rate for income above every bounded band:
///
/// ```csv
/// width,rate
/// 800000,0.00
/// 2200000,0.15
/// ,0.25
/// ```
pub struct BandScheduleLoader;

impl BandScheduleLoader {
    /// Parse band records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BandScheduleRecord>, BandScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BandScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a validated schedule from parsed records.
    ///
    /// Row numbers in errors are 1-based and exclude the header.
    pub fn build(records: &[BandScheduleRecord]) -> Result<BandSchedule, BandScheduleLoaderError> {
        let Some((top, bounded)) = records.split_last() else {
            return Err(BandScheduleLoaderError::MissingTopRate);
        };
        if top.width.is_some() {
            return Err(BandScheduleLoaderError::MissingTopRate);
        }

        let mut bands = Vec::with_capacity(bounded.len());
        for (index, record) in bounded.iter().enumerate() {
            let width = record
                .width
                .ok_or(BandScheduleLoaderError::TopRateNotLast(index + 1))?;
            bands.push(BandRule::new(width, record.rate));
        }

        let schedule = BandSchedule {
            bands,
            top_rate: top.rate,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(reader: R) -> Result<BandSchedule, BandScheduleLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records)
    }
}

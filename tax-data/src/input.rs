use std::io::Read;

use serde::Deserialize;
use tax_core::{TaxInput, TaxInputError};
use thiserror::Error;

/// Errors that can occur when loading taxpayer inputs.
#[derive(Debug, Error)]
pub enum InputLoaderError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("input {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: TaxInputError,
    },
}

impl From<serde_json::Error> for InputLoaderError {
    fn from(err: serde_json::Error) -> Self {
        InputLoaderError::JsonParse(err.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<TaxInput>),
    Many(Vec<TaxInput>),
}

/// Loader for taxpayer inputs stored as JSON.
///
/// A file holds either a single input object or an array of them, using
/// the same field names as the HTTP request body.
pub struct InputLoader;

impl InputLoader {
    /// Parse inputs from a JSON reader without validating them.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxInput>, InputLoaderError> {
        let inputs = match serde_json::from_reader(reader)? {
            OneOrMany::One(input) => vec![*input],
            OneOrMany::Many(inputs) => inputs,
        };
        Ok(inputs)
    }

    /// Parse inputs and reject any with a negative amount.
    ///
    /// The index in [`InputLoaderError::Invalid`] is 0-based.
    pub fn load<R: Read>(reader: R) -> Result<Vec<TaxInput>, InputLoaderError> {
        let inputs = Self::parse(reader)?;
        for (index, input) in inputs.iter().enumerate() {
            input
                .validate()
                .map_err(|source| InputLoaderError::Invalid { index, source })?;
        }
        Ok(inputs)
    }
}

use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the raw value of a material parameter
///
/// A parameter may be given as a single number (applied to every sample of the batch),
/// as a number written as text (e.g., read from a spreadsheet), or as one value per sample.
///
/// In JSON, the variants correspond to a number, a string, and an array of numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Single value shared by all samples
    Scalar(f64),

    /// Single value written as text
    Text(String),

    /// One value per sample
    Sequence(Vec<f64>),
}

/// Holds the result of converting a [ParamValue] into numbers
#[derive(Clone, Debug, PartialEq)]
pub enum Coerced {
    /// A single number
    Numeric(f64),

    /// One number per sample
    Sequence(Vec<f64>),

    /// The text could not be converted to a float
    Invalid,
}

impl ParamValue {
    /// Converts the raw value into numbers
    ///
    /// Text is trimmed and parsed as a float; failure yields [Coerced::Invalid].
    pub fn coerce(&self) -> Coerced {
        match self {
            ParamValue::Scalar(value) => Coerced::Numeric(*value),
            ParamValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => Coerced::Numeric(value),
                Err(_) => Coerced::Invalid,
            },
            ParamValue::Sequence(values) => Coerced::Sequence(values.clone()),
        }
    }

    /// Returns the column of values for a batch with `nsample` samples
    ///
    /// A single number is repeated `nsample` times; a sequence must have exactly `nsample` values.
    pub fn column(&self, nsample: usize) -> Result<Vec<f64>, StrError> {
        match self.coerce() {
            Coerced::Numeric(value) => Ok(vec![value; nsample]),
            Coerced::Sequence(values) => {
                if values.len() != nsample {
                    return Err("parameters must all have the same length");
                }
                Ok(values)
            }
            Coerced::Invalid => Err("parameter cannot be converted to a float"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        ParamValue::Text(text)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(values: Vec<f64>) -> Self {
        ParamValue::Sequence(values)
    }
}

impl From<&[f64]> for ParamValue {
    fn from(values: &[f64]) -> Self {
        ParamValue::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ParamValue {
    fn from(values: [f64; N]) -> Self {
        ParamValue::Sequence(values.to_vec())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

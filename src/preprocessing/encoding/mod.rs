//! Categorical feature encoding transformers.
//!
//! # Available Encoders
//!
//! ## OneHotEncoder
//! Replaces each categorical column with one binary indicator column per
//! category seen during fit.
//!
//! ```text
//! city: [Chicago, Seattle]  ->  city_1: [1, 0], city_2: [0, 1]
//! ```
//!
//! ## OrdinalEncoder
//! Maps each category to a 1-based ordinal in order of first appearance.
//! The one-hot encoder is built on top of it.
//!
//! # Missing and unknown values
//!
//! Both encoders take a [`HandleMissing`] and a [`HandleUnknown`] policy that
//! decide what happens to missing cells and to categories never seen during
//! fit. Policies parse from their snake_case names, so they can come straight
//! from a config file.

mod one_hot;
mod ordinal;

pub use one_hot::{
    FittedOneHotEncoder, IndicatorColumn, IndicatorGroup, OneHotEncoder, OneHotEncoderConfig,
    OneHotEncoderParams,
};
pub use ordinal::{
    ColumnOrdinals, FittedOrdinalEncoder, OrdinalEncoder, OrdinalEncoderConfig,
    OrdinalEncoderParams,
};

use crate::frame::Frame;
use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal assigned to categories never seen during fit.
pub const UNKNOWN_ORDINAL: i64 = -1;
/// Ordinal assigned to the missing marker when it was never seen during fit.
pub const MISSING_ORDINAL: i64 = -2;

/// Strategy for handling categories not seen during fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Fail the transform.
    Error,
    /// Emit missing markers for the whole row of the column.
    ReturnNan,
    /// Substitute a fixed value (all zeros for one-hot, `-1` for ordinal).
    #[default]
    Value,
    /// Set a dedicated `<col>_-1` indicator column (one-hot only).
    Indicator,
}

/// Strategy for handling missing cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleMissing {
    /// Fail both fit and transform.
    Error,
    /// Emit missing markers for the whole row of the column.
    ReturnNan,
    /// Treat missing as an ordinary category when seen in fit, zeros otherwise.
    #[default]
    Value,
    /// Always give missing its own indicator column (one-hot only).
    Indicator,
    /// Encode missing cells as all zeros, never as a column (one-hot only).
    Ignore,
}

impl HandleUnknown {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleUnknown::Error => "error",
            HandleUnknown::ReturnNan => "return_nan",
            HandleUnknown::Value => "value",
            HandleUnknown::Indicator => "indicator",
        }
    }
}

impl HandleMissing {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleMissing::Error => "error",
            HandleMissing::ReturnNan => "return_nan",
            HandleMissing::Value => "value",
            HandleMissing::Indicator => "indicator",
            HandleMissing::Ignore => "ignore",
        }
    }
}

impl fmt::Display for HandleUnknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HandleMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandleUnknown {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(HandleUnknown::Error),
            "return_nan" => Ok(HandleUnknown::ReturnNan),
            "value" => Ok(HandleUnknown::Value),
            "indicator" => Ok(HandleUnknown::Indicator),
            other => Err(PreprocessingError::InvalidParameter(format!(
                "unrecognised handle_unknown '{}'",
                other
            ))),
        }
    }
}

impl FromStr for HandleMissing {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(HandleMissing::Error),
            "return_nan" => Ok(HandleMissing::ReturnNan),
            "value" => Ok(HandleMissing::Value),
            "indicator" => Ok(HandleMissing::Indicator),
            "ignore" => Ok(HandleMissing::Ignore),
            other => Err(PreprocessingError::InvalidParameter(format!(
                "unrecognised handle_missing '{}'",
                other
            ))),
        }
    }
}

/// Columns an encoder works on: the configured list, or every categorical column.
pub(crate) fn resolve_columns(
    data: &Frame,
    cols: Option<&[String]>,
) -> Result<Vec<String>, PreprocessingError> {
    match cols {
        Some(cols) => {
            let mut resolved: Vec<String> = Vec::with_capacity(cols.len());
            for col in cols {
                if data.column(col).is_none() {
                    return Err(PreprocessingError::ColumnNotFound(col.clone()));
                }
                // repeated names are encoded once, at their first position
                if !resolved.contains(col) {
                    resolved.push(col.clone());
                }
            }
            Ok(resolved)
        }
        None => Ok(data
            .columns()
            .iter()
            .filter(|c| c.is_categorical())
            .map(|c| c.name().to_string())
            .collect()),
    }
}

/// Checks that a frame carries exactly the columns seen during fit.
pub(crate) fn check_input_columns(
    data: &Frame,
    expected: &[String],
) -> Result<(), PreprocessingError> {
    if data.n_cols() != expected.len() {
        return Err(PreprocessingError::FeatureMismatch {
            expected_features: expected.len(),
            got_features: data.n_cols(),
        });
    }
    for name in expected {
        if data.column(name).is_none() {
            return Err(PreprocessingError::ColumnNotFound(name.clone()));
        }
    }
    Ok(())
}

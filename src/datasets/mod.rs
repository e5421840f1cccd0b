//! Bundled datasets.
//!
//! The only dataset is a sample of 100 UK postcodes with their hierarchy
//! (area, district, sector prefixes) and three target columns. It is compiled
//! into the crate, so loading never touches the filesystem.

use crate::frame::{Column, Frame};
use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const POSTCODES_CSV: &str = include_str!("data/postcode_dataset_100.csv");

/// Which target column [`load_postcodes`] returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// `target_binary`: 0 or 1.
    #[default]
    Binary,
    /// `target_non_binary`: integers 0 to 4.
    NonBinary,
    /// `target_categorical`: the labels `a`, `b`, `c`.
    Categorical,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Binary => "binary",
            TargetType::NonBinary => "non_binary",
            TargetType::Categorical => "categorical",
        }
    }

    /// Name of the target column in the bundled file.
    pub fn column_name(&self) -> String {
        format!("target_{}", self.as_str())
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(TargetType::Binary),
            "non_binary" => Ok(TargetType::NonBinary),
            "categorical" => Ok(TargetType::Categorical),
            other => Err(PreprocessingError::InvalidParameter(format!(
                "unrecognised target type '{}', expected binary, non_binary or categorical",
                other
            ))),
        }
    }
}

/// Load the postcode dataset as `(features, target)`.
///
/// Features are every column whose name does not start with `target`:
/// `index`, `postcode` and `HIER_postcode1` to `HIER_postcode4`.
///
/// # Example
/// ```
/// use category_encoders::datasets::{load_postcodes, TargetType};
///
/// let (x, y) = load_postcodes(TargetType::Categorical).unwrap();
/// assert_eq!(x.shape(), (100, 6));
/// assert_eq!(y.name(), "target_categorical");
/// ```
pub fn load_postcodes(target: TargetType) -> Result<(Frame, Column), PreprocessingError> {
    let frame = Frame::from_csv_reader(POSTCODES_CSV.as_bytes())?;
    let target_name = target.column_name();

    let y = frame
        .column(&target_name)
        .cloned()
        .ok_or(PreprocessingError::ColumnNotFound(target_name))?;
    let x = frame.select(|c| !c.name().starts_with("target"));

    tracing::debug!(rows = x.n_rows(), features = x.n_cols(), target = %target, "loaded postcodes");
    Ok((x, y))
}

//! Ordinal encoding for categorical features.
//!
//! Maps each category to a 1-based ordinal in order of first appearance.
//! Unknown categories map to `-1`; a missing marker never seen during fit
//! maps to `-2`.

use crate::frame::{Category, Column, Frame, Value};
use crate::preprocessing::encoding::{
    check_input_columns, resolve_columns, HandleMissing, HandleUnknown, MISSING_ORDINAL,
    UNKNOWN_ORDINAL,
};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for OrdinalEncoder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdinalEncoderConfig {
    /// Columns to encode. `None` selects every categorical column.
    pub cols: Option<Vec<String>>,
    /// `value`, `return_nan` or `error`.
    pub handle_unknown: HandleUnknown,
    /// `value`, `return_nan` or `error`.
    pub handle_missing: HandleMissing,
}

/// Ordinal encoder for categorical features.
///
/// # Example
/// ```
/// use category_encoders::frame::{Frame, Value};
/// use category_encoders::preprocessing::{FittedTransformer, OrdinalEncoder, Transformer};
///
/// let data = Frame::from_values(vec!["b".into(), "a".into(), "b".into()]);
/// let encoded = OrdinalEncoder::new().fit_transform(&data).unwrap();
/// assert_eq!(
///     encoded.column("0").unwrap().values(),
///     &[Value::Int(1), Value::Int(2), Value::Int(1)]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrdinalEncoder {
    config: OrdinalEncoderConfig,
}

impl OrdinalEncoder {
    /// Create a new OrdinalEncoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: OrdinalEncoderConfig) -> Self {
        Self { config }
    }

    /// Restrict encoding to the named columns.
    pub fn with_cols<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.cols = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    /// Set the strategy for handling unknown categories.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.config.handle_unknown = strategy;
        self
    }

    /// Set the strategy for handling missing values.
    pub fn with_handle_missing(mut self, strategy: HandleMissing) -> Self {
        self.config.handle_missing = strategy;
        self
    }

    pub fn config(&self) -> &OrdinalEncoderConfig {
        &self.config
    }

    fn validate(&self) -> Result<(), PreprocessingError> {
        if self.config.handle_unknown == HandleUnknown::Indicator {
            return Err(PreprocessingError::InvalidParameter(
                "OrdinalEncoder does not support handle_unknown 'indicator'".to_string(),
            ));
        }
        if matches!(
            self.config.handle_missing,
            HandleMissing::Indicator | HandleMissing::Ignore
        ) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "OrdinalEncoder does not support handle_missing '{}'",
                self.config.handle_missing
            )));
        }
        Ok(())
    }
}

/// Learned ordinals of one column, in first-appearance order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnOrdinals {
    /// Source column name.
    pub column: String,
    /// `(category, ordinal)` pairs. The missing marker is always present.
    pub ordinals: Vec<(Category, i64)>,
}

impl ColumnOrdinals {
    fn learn(column: &Column, handle_missing: HandleMissing) -> Self {
        let mut ordinals: Vec<(Category, i64)> = Vec::new();
        let mut seen: HashMap<Category, usize> = HashMap::new();

        for value in column.values() {
            let category = Category::from(value);
            if !seen.contains_key(&category) {
                seen.insert(category.clone(), ordinals.len());
                ordinals.push((category, ordinals.len() as i64 + 1));
            }
        }

        match (seen.get(&Category::Missing), handle_missing) {
            (None, _) => ordinals.push((Category::Missing, MISSING_ORDINAL)),
            (Some(&idx), HandleMissing::ReturnNan) => ordinals[idx].1 = MISSING_ORDINAL,
            (Some(_), _) => {}
        }

        Self {
            column: column.name().to_string(),
            ordinals,
        }
    }

    /// Number of categories observed during fit, the missing marker included if seen.
    pub fn n_categories(&self) -> usize {
        self.ordinals.iter().filter(|(_, ord)| *ord > 0).count()
    }
}

/// Serializable parameters for a fitted OrdinalEncoder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrdinalEncoderParams {
    pub config: OrdinalEncoderConfig,
    /// Every column of the training frame, in order.
    pub input_columns: Vec<String>,
    /// Learned ordinals for each encoded column.
    pub mappings: Vec<ColumnOrdinals>,
}

/// Fitted OrdinalEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedOrdinalEncoder {
    config: OrdinalEncoderConfig,
    input_columns: Vec<String>,
    mappings: Vec<ColumnOrdinals>,
    lookups: Vec<HashMap<Category, i64>>,
    inverse: Vec<HashMap<i64, Category>>,
}

impl FittedOrdinalEncoder {
    fn build(
        config: OrdinalEncoderConfig,
        input_columns: Vec<String>,
        mappings: Vec<ColumnOrdinals>,
    ) -> Self {
        let lookups: Vec<HashMap<Category, i64>> = mappings
            .iter()
            .map(|m| m.ordinals.iter().cloned().collect::<HashMap<_, _>>())
            .collect();
        let inverse: Vec<HashMap<i64, Category>> = mappings
            .iter()
            .map(|m| {
                m.ordinals
                    .iter()
                    .map(|(c, o)| (*o, c.clone()))
                    .collect::<HashMap<_, _>>()
            })
            .collect();
        Self {
            config,
            input_columns,
            mappings,
            lookups,
            inverse,
        }
    }

    /// Learned ordinals for each encoded column.
    pub fn mappings(&self) -> &[ColumnOrdinals] {
        &self.mappings
    }

    /// Learned ordinals for one column.
    pub fn mapping(&self, column: &str) -> Option<&ColumnOrdinals> {
        self.mappings.iter().find(|m| m.column == column)
    }

    pub(crate) fn position(&self, column: &str) -> Option<usize> {
        self.mappings.iter().position(|m| m.column == column)
    }

    pub(crate) fn ordinal(&self, idx: usize, category: &Category) -> Option<i64> {
        self.lookups[idx].get(category).copied()
    }

    pub(crate) fn category(&self, idx: usize, ordinal: i64) -> Option<&Category> {
        self.inverse[idx].get(&ordinal)
    }

    fn encode(&self, idx: usize, value: &Value, row: usize) -> Result<Value, PreprocessingError> {
        let column = &self.mappings[idx].column;
        let category = Category::from(value);

        if category.is_missing() {
            return match self.config.handle_missing {
                HandleMissing::Error => Err(PreprocessingError::MissingValues(format!(
                    "column '{}' contains null at row {}",
                    column, row
                ))),
                HandleMissing::ReturnNan => Ok(Value::Null),
                _ => Ok(Value::Int(
                    self.ordinal(idx, &category).unwrap_or(MISSING_ORDINAL),
                )),
            };
        }

        match self.ordinal(idx, &category) {
            Some(ordinal) => Ok(Value::Int(ordinal)),
            None => match self.config.handle_unknown {
                HandleUnknown::Error => Err(PreprocessingError::UnknownCategory(format!(
                    "'{}' in column '{}' at row {}",
                    category, column, row
                ))),
                HandleUnknown::ReturnNan => Ok(Value::Null),
                _ => Ok(Value::Int(UNKNOWN_ORDINAL)),
            },
        }
    }

    fn decode(&self, idx: usize, value: &Value, row: usize) -> Result<Value, PreprocessingError> {
        let ordinal = match value {
            Value::Int(i) => *i,
            Value::Float(f) if f.fract() == 0.0 => *f as i64,
            v if v.is_missing() => return Ok(Value::Null),
            other => {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "expected an ordinal in column '{}' at row {}, got '{}'",
                    self.mappings[idx].column, row, other
                )))
            }
        };
        Ok(self
            .category(idx, ordinal)
            .map_or(Value::Null, Category::to_value))
    }
}

impl Transformer for OrdinalEncoder {
    type Input = Frame;
    type Output = Frame;
    type Params = OrdinalEncoderParams;
    type Fitted = FittedOrdinalEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        self.validate()?;

        if data.n_rows() == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit OrdinalEncoder on empty data".to_string(),
            ));
        }

        let cols = resolve_columns(data, self.config.cols.as_deref())?;
        let mut mappings = Vec::with_capacity(cols.len());
        for name in &cols {
            let column = data
                .column(name)
                .ok_or_else(|| PreprocessingError::ColumnNotFound(name.clone()))?;
            if self.config.handle_missing == HandleMissing::Error && column.has_missing() {
                return Err(PreprocessingError::MissingValues(format!(
                    "column '{}' contains null values",
                    name
                )));
            }
            mappings.push(ColumnOrdinals::learn(column, self.config.handle_missing));
        }

        tracing::debug!(
            columns = mappings.len(),
            rows = data.n_rows(),
            "fitted ordinal encoder"
        );

        let input_columns = data.column_names().into_iter().map(String::from).collect();
        Ok(FittedOrdinalEncoder::build(
            self.config.clone(),
            input_columns,
            mappings,
        ))
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

impl FittedTransformer for FittedOrdinalEncoder {
    type Input = Frame;
    type Output = Frame;
    type Params = OrdinalEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        check_input_columns(data, &self.input_columns)?;

        let mut out = Frame::new();
        for column in data.columns() {
            match self.position(column.name()) {
                Some(idx) => {
                    let values = column
                        .values()
                        .iter()
                        .enumerate()
                        .map(|(row, v)| self.encode(idx, v, row))
                        .collect::<Result<Vec<_>, _>>()?;
                    out.push_column(Column::new(column.name(), values))?;
                }
                None => out.push_column(column.clone())?,
            }
        }
        Ok(out)
    }

    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input, PreprocessingError> {
        check_input_columns(data, &self.input_columns)?;

        let mut out = Frame::new();
        for column in data.columns() {
            match self.position(column.name()) {
                Some(idx) => {
                    if self.config.handle_unknown == HandleUnknown::Value
                        && column.values().contains(&Value::Int(UNKNOWN_ORDINAL))
                    {
                        tracing::warn!(
                            column = column.name(),
                            "inverse_transform is not supported because transform impute the unknown category -1 when encode {}",
                            column.name()
                        );
                    }
                    let values = column
                        .values()
                        .iter()
                        .enumerate()
                        .map(|(row, v)| self.decode(idx, v, row))
                        .collect::<Result<Vec<_>, _>>()?;
                    out.push_column(Column::new(column.name(), values))?;
                }
                None => out.push_column(column.clone())?,
            }
        }
        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        OrdinalEncoderParams {
            config: self.config.clone(),
            input_columns: self.input_columns.clone(),
            mappings: self.mappings.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        Ok(FittedOrdinalEncoder::build(
            params.config,
            params.input_columns,
            params.mappings,
        ))
    }

    fn n_features_in(&self) -> usize {
        self.input_columns.len()
    }
}

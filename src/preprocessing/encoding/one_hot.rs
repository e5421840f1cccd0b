//! One-hot encoding for categorical features.
//!
//! Each encoded column is replaced, in place, by one binary indicator column
//! per category learned during fit. Indicator names are `<col>_<ordinal>`, or
//! `<col>_<category>` with `use_cat_names`; colliding names get `#` suffixes.

use crate::frame::{Category, Column, Frame, Value};
use crate::preprocessing::encoding::ordinal::{
    FittedOrdinalEncoder, OrdinalEncoder, OrdinalEncoderParams,
};
use crate::preprocessing::encoding::{
    check_input_columns, resolve_columns, HandleMissing, HandleUnknown, MISSING_ORDINAL,
    UNKNOWN_ORDINAL,
};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Configuration for OneHotEncoder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneHotEncoderConfig {
    /// Columns to encode. `None` selects every categorical column.
    pub cols: Option<Vec<String>>,
    /// Name indicators after the category instead of its ordinal.
    pub use_cat_names: bool,
    /// What to do with categories not seen during fit.
    pub handle_unknown: HandleUnknown,
    /// What to do with missing cells.
    pub handle_missing: HandleMissing,
    /// Drop output columns that are constant on the training data.
    pub drop_invariant: bool,
}

/// One-hot encoder for categorical features.
///
/// # Example
/// ```
/// use category_encoders::frame::{Column, Frame, Value};
/// use category_encoders::preprocessing::{
///     FittedTransformer, HandleUnknown, OneHotEncoder, Transformer,
/// };
///
/// let train = Frame::from_columns(vec![Column::new(
///     "city",
///     vec!["Chicago".into(), "Seattle".into()],
/// )])
/// .unwrap();
/// let test = Frame::from_columns(vec![Column::new(
///     "city",
///     vec!["Chicago".into(), "Detroit".into()],
/// )])
/// .unwrap();
///
/// let fitted = OneHotEncoder::new()
///     .with_handle_unknown(HandleUnknown::Indicator)
///     .fit(&train)
///     .unwrap();
/// let encoded = fitted.transform(&test).unwrap();
///
/// assert_eq!(encoded.column_names(), vec!["city_1", "city_2", "city_-1"]);
/// assert_eq!(encoded.column("city_-1").unwrap().values(), &[Value::Int(0), Value::Int(1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    config: OneHotEncoderConfig,
}

impl OneHotEncoder {
    /// Create a new OneHotEncoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: OneHotEncoderConfig) -> Self {
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

    /// Name indicator columns after category labels instead of ordinals.
    pub fn with_use_cat_names(mut self, use_cat_names: bool) -> Self {
        self.config.use_cat_names = use_cat_names;
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

    /// Drop output columns that are constant on the training data.
    pub fn with_drop_invariant(mut self, drop_invariant: bool) -> Self {
        self.config.drop_invariant = drop_invariant;
        self
    }

    pub fn config(&self) -> &OneHotEncoderConfig {
        &self.config
    }

    /// Whether the missing marker, observed during fit under `ordinal`, gets a column.
    fn keeps_missing(&self, ordinal: i64) -> bool {
        match self.config.handle_missing {
            HandleMissing::Value => ordinal > 0,
            HandleMissing::Indicator => true,
            HandleMissing::ReturnNan | HandleMissing::Ignore | HandleMissing::Error => false,
        }
    }

    fn build_groups(
        &self,
        input_columns: &[String],
        ordinal: &FittedOrdinalEncoder,
    ) -> Vec<IndicatorGroup> {
        let mut namer = ColumnNamer::default();
        for name in input_columns {
            if ordinal.position(name).is_none() {
                namer.reserve(name);
            }
        }

        let mut groups = Vec::with_capacity(ordinal.mappings().len());
        for mapping in ordinal.mappings() {
            let col = &mapping.column;
            let mut indicators = Vec::new();

            for (category, ord) in &mapping.ordinals {
                if category.is_missing() && !self.keeps_missing(*ord) {
                    continue;
                }
                let base = if self.config.use_cat_names {
                    format!("{}_{}", col, category)
                } else {
                    format!("{}_{}", col, ord)
                };
                indicators.push(IndicatorColumn {
                    name: namer.claim(base),
                    ordinal: *ord,
                });
            }

            if self.config.handle_unknown == HandleUnknown::Indicator {
                indicators.push(IndicatorColumn {
                    name: namer.claim(format!("{}_{}", col, UNKNOWN_ORDINAL)),
                    ordinal: UNKNOWN_ORDINAL,
                });
            }

            groups.push(IndicatorGroup {
                column: col.clone(),
                indicators,
            });
        }
        groups
    }
}

/// Hands out unique output column names, suffixing `#` on collision.
#[derive(Default)]
struct ColumnNamer {
    counts: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl ColumnNamer {
    fn reserve(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
        self.taken.insert(name.to_string());
    }

    fn claim(&mut self, base: String) -> String {
        let count = self.counts.entry(base.clone()).or_insert(0);
        let mut name = format!("{}{}", base, "#".repeat(*count));
        *count += 1;
        while self.taken.contains(&name) {
            name.push('#');
        }
        self.taken.insert(name.clone());
        name
    }
}

/// One generated indicator column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorColumn {
    /// Output column name.
    pub name: String,
    /// Ordinal of the category it flags. `-1` is the unknown indicator,
    /// `-2` the indicator for a missing marker never seen during fit.
    pub ordinal: i64,
}

/// The indicator columns that replace one source column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorGroup {
    /// Source column name.
    pub column: String,
    /// Indicators in output order.
    pub indicators: Vec<IndicatorColumn>,
}

impl IndicatorGroup {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indicators.iter().map(|i| i.name.as_str())
    }

    fn code(&self, ordinal: i64) -> RowCode {
        self.indicators
            .iter()
            .position(|i| i.ordinal == ordinal)
            .map_or(RowCode::Cold, RowCode::Hot)
    }
}

/// Encoding of one source cell across its indicator group.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RowCode {
    /// A single indicator set.
    Hot(usize),
    /// All indicators zero.
    Cold,
    /// All indicators missing.
    Nan,
}

/// Serializable parameters for a fitted OneHotEncoder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    pub config: OneHotEncoderConfig,
    /// Every column of the training frame, in order.
    pub input_columns: Vec<String>,
    /// Underlying category ordinals.
    pub ordinal: OrdinalEncoderParams,
    /// Indicator columns per encoded column.
    pub groups: Vec<IndicatorGroup>,
    /// Output columns removed by `drop_invariant`.
    pub dropped: Vec<String>,
}

/// Fitted OneHotEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedOneHotEncoder {
    config: OneHotEncoderConfig,
    input_columns: Vec<String>,
    ordinal: FittedOrdinalEncoder,
    groups: Vec<IndicatorGroup>,
    dropped: Vec<String>,
    feature_names: Vec<String>,
}

impl FittedOneHotEncoder {
    fn build(
        config: OneHotEncoderConfig,
        input_columns: Vec<String>,
        ordinal: FittedOrdinalEncoder,
        groups: Vec<IndicatorGroup>,
        dropped: Vec<String>,
    ) -> Self {
        let mut fitted = Self {
            config,
            input_columns,
            ordinal,
            groups,
            dropped,
            feature_names: Vec::new(),
        };
        fitted.feature_names = fitted.output_names();
        fitted
    }

    fn output_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for input in &self.input_columns {
            match self.group(input) {
                Some(group) => names.extend(group.names().map(String::from)),
                None => names.push(input.clone()),
            }
        }
        names.retain(|n| !self.dropped.contains(n));
        names
    }

    fn group(&self, column: &str) -> Option<&IndicatorGroup> {
        self.groups.iter().find(|g| g.column == column)
    }

    /// Output column names, in order.
    pub fn feature_names_out(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of output columns.
    pub fn n_features_out(&self) -> usize {
        self.feature_names.len()
    }

    /// Indicator columns generated for each encoded column.
    pub fn mapping(&self) -> &[IndicatorGroup] {
        &self.groups
    }

    /// The category ordinals the indicators are built on.
    pub fn ordinal_encoder(&self) -> &FittedOrdinalEncoder {
        &self.ordinal
    }

    /// Output columns removed because they were constant during fit.
    pub fn dropped_columns(&self) -> &[String] {
        &self.dropped
    }

    pub fn config(&self) -> &OneHotEncoderConfig {
        &self.config
    }

    fn row_code(
        &self,
        idx: usize,
        group: &IndicatorGroup,
        value: &Value,
        row: usize,
    ) -> Result<RowCode, PreprocessingError> {
        let category = Category::from(value);

        if category.is_missing() {
            return match self.config.handle_missing {
                HandleMissing::Error => Err(PreprocessingError::MissingValues(format!(
                    "column '{}' contains null at row {}",
                    group.column, row
                ))),
                HandleMissing::ReturnNan => Ok(RowCode::Nan),
                _ => Ok(group.code(
                    self.ordinal
                        .ordinal(idx, &category)
                        .unwrap_or(MISSING_ORDINAL),
                )),
            };
        }

        match self.ordinal.ordinal(idx, &category) {
            Some(ordinal) => Ok(group.code(ordinal)),
            None => match self.config.handle_unknown {
                HandleUnknown::Error => Err(PreprocessingError::UnknownCategory(format!(
                    "unexpected category '{}' in column '{}' at row {}",
                    category, group.column, row
                ))),
                HandleUnknown::ReturnNan => Ok(RowCode::Nan),
                HandleUnknown::Value => Ok(RowCode::Cold),
                HandleUnknown::Indicator => Ok(group.code(UNKNOWN_ORDINAL)),
            },
        }
    }

    fn encode_column(&self, column: &Column) -> Result<Vec<Column>, PreprocessingError> {
        let idx = self
            .ordinal
            .position(column.name())
            .ok_or_else(|| PreprocessingError::ColumnNotFound(column.name().to_string()))?;
        let group = &self.groups[idx];

        let mut cells: Vec<Vec<Value>> =
            vec![Vec::with_capacity(column.len()); group.indicators.len()];
        for (row, value) in column.values().iter().enumerate() {
            let code = self.row_code(idx, group, value, row)?;
            for (k, cell) in cells.iter_mut().enumerate() {
                cell.push(match code {
                    RowCode::Hot(hot) if hot == k => Value::Int(1),
                    RowCode::Nan => Value::Null,
                    _ => Value::Int(0),
                });
            }
        }

        Ok(group
            .indicators
            .iter()
            .zip(cells)
            .map(|(indicator, values)| Column::new(indicator.name.clone(), values))
            .collect())
    }

    fn decode_group(&self, idx: usize, data: &Frame) -> Result<Column, PreprocessingError> {
        let group = &self.groups[idx];
        let indicators = group
            .indicators
            .iter()
            .map(|i| {
                data.column(&i.name)
                    .ok_or_else(|| PreprocessingError::ColumnNotFound(i.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values = (0..data.n_rows())
            .map(|row| {
                indicators
                    .iter()
                    .position(|c| c.values()[row].is_hot())
                    .and_then(|k| self.ordinal.category(idx, group.indicators[k].ordinal))
                    .map_or(Value::Null, Category::to_value)
            })
            .collect();

        Ok(Column::new(group.column.clone(), values))
    }
}

fn is_invariant(column: &Column) -> bool {
    if !column.is_numeric() {
        return false;
    }
    let mut present = column.values().iter().filter(|v| !v.is_missing());
    match present.next() {
        Some(first) => present.all(|v| v == first),
        None => false,
    }
}

impl Transformer for OneHotEncoder {
    type Input = Frame;
    type Output = Frame;
    type Params = OneHotEncoderParams;
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        if data.n_rows() == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit OneHotEncoder on empty data".to_string(),
            ));
        }

        let cols = resolve_columns(data, self.config.cols.as_deref())?;

        if self.config.handle_missing == HandleMissing::Error {
            for name in &cols {
                if data.column(name).is_some_and(Column::has_missing) {
                    return Err(PreprocessingError::MissingValues(format!(
                        "columns to be encoded can not contain null, found null in '{}'",
                        name
                    )));
                }
            }
        }

        let ordinal = OrdinalEncoder::new().with_cols(cols).fit(data)?;
        let input_columns: Vec<String> =
            data.column_names().into_iter().map(String::from).collect();
        let groups = self.build_groups(&input_columns, &ordinal);

        let mut fitted = FittedOneHotEncoder::build(
            self.config.clone(),
            input_columns,
            ordinal,
            groups,
            Vec::new(),
        );

        if self.config.drop_invariant {
            let encoded = fitted.transform(data)?;
            let generated: HashSet<&str> = fitted.groups.iter().flat_map(|g| g.names()).collect();
            let dropped: Vec<String> = encoded
                .columns()
                .iter()
                .filter(|c| generated.contains(c.name()) && is_invariant(c))
                .map(|c| c.name().to_string())
                .collect();
            tracing::debug!(dropped = dropped.len(), "dropping invariant columns");
            fitted.dropped = dropped;
            fitted.feature_names = fitted.output_names();
        }

        tracing::debug!(
            encoded = fitted.groups.len(),
            features_out = fitted.n_features_out(),
            "fitted one-hot encoder"
        );

        Ok(fitted)
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = Frame;
    type Output = Frame;
    type Params = OneHotEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        check_input_columns(data, &self.input_columns)?;

        let mut out = Frame::new();
        for column in data.columns() {
            let produced = if self.group(column.name()).is_some() {
                self.encode_column(column)?
            } else {
                vec![column.clone()]
            };
            for c in produced {
                if !self.dropped.iter().any(|d| d == c.name()) {
                    out.push_column(c)?;
                }
            }
        }

        tracing::debug!(
            rows = data.n_rows(),
            columns = out.n_cols(),
            "one-hot transform"
        );
        Ok(out)
    }

    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input, PreprocessingError> {
        if !self.dropped.is_empty() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "inverse_transform is not supported after drop_invariant removed {:?}",
                self.dropped
            )));
        }
        if data.n_cols() != self.feature_names.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.feature_names.len(),
                got_features: data.n_cols(),
            });
        }

        let lossy = self.config.handle_unknown == HandleUnknown::ReturnNan
            && self.config.handle_missing == HandleMissing::ReturnNan;

        let mut out = Frame::new();
        for name in &self.input_columns {
            match self.ordinal.position(name) {
                Some(idx) => {
                    let column = self.decode_group(idx, data)?;
                    if lossy && column.has_missing() {
                        tracing::warn!(
                            column = name.as_str(),
                            "inverse_transform is not supported because transform impute the unknown category nan when encode {}",
                            name
                        );
                    }
                    out.push_column(column)?;
                }
                None => {
                    let column = data
                        .column(name)
                        .ok_or_else(|| PreprocessingError::ColumnNotFound(name.clone()))?;
                    out.push_column(column.clone())?;
                }
            }
        }
        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        OneHotEncoderParams {
            config: self.config.clone(),
            input_columns: self.input_columns.clone(),
            ordinal: self.ordinal.extract_params(),
            groups: self.groups.clone(),
            dropped: self.dropped.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let ordinal = FittedOrdinalEncoder::from_params(params.ordinal)?;
        if ordinal.mappings().len() != params.groups.len() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "{} ordinal mappings for {} indicator groups",
                ordinal.mappings().len(),
                params.groups.len()
            )));
        }
        for (mapping, group) in ordinal.mappings().iter().zip(&params.groups) {
            if mapping.column != group.column {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "indicator group for '{}' does not line up with ordinal mapping for '{}'",
                    group.column, mapping.column
                )));
            }
        }
        Ok(FittedOneHotEncoder::build(
            params.config,
            params.input_columns,
            ordinal,
            params.groups,
            params.dropped,
        ))
    }

    fn n_features_in(&self) -> usize {
        self.input_columns.len()
    }
}

//! In-memory table of named, row-aligned, nullable columns.
//!
//! A [`Frame`] is what the encoders consume and produce. Columns are
//! dynamically typed: each cell is a [`Value`], so a column can mix strings,
//! integers and missing markers the way a CSV file does.
//!
//! # Example
//!
//! ```
//! use category_encoders::frame::{Column, Frame, Value};
//!
//! let frame = Frame::from_columns(vec![
//!     Column::new("city", vec!["Chicago".into(), Value::Null]),
//!     Column::new("visits", vec![3i64.into(), 5i64.into()]),
//! ])
//! .unwrap();
//!
//! assert_eq!(frame.shape(), (2, 2));
//! assert!(frame.column("city").unwrap().is_categorical());
//! ```

mod csv_reader;
mod value;

pub use value::{Category, Value};

use crate::preprocessing::error::PreprocessingError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A named column of cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether any cell is missing.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Value::is_missing)
    }

    /// A column is categorical when it holds at least one string or boolean.
    pub fn is_categorical(&self) -> bool {
        self.values.iter().any(Value::is_categorical)
    }

    /// Whether every cell is numeric or missing.
    pub fn is_numeric(&self) -> bool {
        self.values.iter().all(|v| v.as_f64().is_some())
    }
}

/// Ordered collection of equally long columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Frame {
    /// Create an empty frame with no rows and no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from columns.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidShape`] when column lengths differ and
    /// [`PreprocessingError::InvalidParameter`] on a duplicate column name.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, PreprocessingError> {
        let mut frame = Frame::new();
        for column in columns {
            frame.push_column(column)?;
        }
        Ok(frame)
    }

    /// Build a frame from row-major data. Columns are named `"0"`, `"1"`, ...
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self, PreprocessingError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(rows.len()); n_cols];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(PreprocessingError::InvalidShape {
                    expected: format!("{} values in row {}", n_cols, i),
                    got: row.len().to_string(),
                });
            }
            for (col, value) in row.into_iter().enumerate() {
                columns[col].push(value);
            }
        }
        Self::from_columns(
            columns
                .into_iter()
                .enumerate()
                .map(|(i, values)| Column::new(i.to_string(), values))
                .collect(),
        )
    }

    /// Build a single-column frame named `"0"`.
    pub fn from_values(values: Vec<Value>) -> Self {
        let n_rows = values.len();
        Self {
            columns: vec![Column::new("0", values)],
            n_rows,
        }
    }

    /// Append a column at the right edge.
    pub fn push_column(&mut self, column: Column) -> Result<(), PreprocessingError> {
        if self.column_index(column.name()).is_some() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "duplicate column name '{}'",
                column.name()
            )));
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PreprocessingError::InvalidShape {
                expected: format!("{} rows", self.n_rows),
                got: format!("{} rows in column '{}'", column.len(), column.name()),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Keep the columns matching `predicate`, in their current order.
    pub fn select<F>(&self, mut predicate: F) -> Frame
    where
        F: FnMut(&Column) -> bool,
    {
        let columns: Vec<Column> = self.columns.iter().filter(|c| predicate(c)).cloned().collect();
        let n_rows = if columns.is_empty() { 0 } else { self.n_rows };
        Frame { columns, n_rows }
    }

    /// Numeric export. Missing cells become NaN.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidParameter`] if a column holds strings.
    pub fn to_array(&self) -> Result<Array2<f64>, PreprocessingError> {
        let (rows, cols) = self.shape();
        let mut out = Array2::<f64>::zeros((rows, cols));
        for (j, column) in self.columns.iter().enumerate() {
            for (i, value) in column.values.iter().enumerate() {
                out[[i, j]] = value.as_f64().ok_or_else(|| {
                    PreprocessingError::InvalidParameter(format!(
                        "column '{}' holds non-numeric value '{}' at row {}",
                        column.name, value, i
                    ))
                })?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_frame() -> Frame {
        Frame::from_columns(vec![
            Column::new("city", vec!["Chicago".into(), "Seattle".into(), Value::Null]),
            Column::new("visits", vec![3i64.into(), 5i64.into(), 1.5f64.into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_frame_shape_and_lookup() {
        let frame = city_frame();
        assert_eq!(frame.shape(), (3, 2));
        assert_eq!(frame.column_names(), vec!["city", "visits"]);
        assert_eq!(frame.column_index("visits"), Some(1));
        assert!(frame.column("missing").is_none());
    }

    #[test]
    fn test_column_kinds() {
        let frame = city_frame();
        let city = frame.column("city").unwrap();
        let visits = frame.column("visits").unwrap();
        assert!(city.is_categorical());
        assert!(city.has_missing());
        assert!(!visits.is_categorical());
        assert!(visits.is_numeric());
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let result = Frame::from_columns(vec![
            Column::new("a", vec![1i64.into()]),
            Column::new("b", vec![1i64.into(), 2i64.into()]),
        ]);
        assert!(matches!(result, Err(PreprocessingError::InvalidShape { .. })));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut frame = city_frame();
        let result = frame.push_column(Column::new("city", vec![Value::Null; 3]));
        assert!(matches!(result, Err(PreprocessingError::InvalidParameter(_))));
    }

    #[test]
    fn test_from_rows_names_columns_by_position() {
        let frame = Frame::from_rows(vec![
            vec![Value::Int(-1), "x".into()],
            vec![Value::Int(2), "y".into()],
        ])
        .unwrap();
        assert_eq!(frame.column_names(), vec!["0", "1"]);
        assert_eq!(frame.column("1").unwrap().values()[1], Value::from("y"));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Frame::from_rows(vec![vec![Value::Int(1)], vec![]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select() {
        let frame = city_frame();
        let numeric = frame.select(|c| !c.is_categorical());
        assert_eq!(numeric.column_names(), vec!["visits"]);
        assert_eq!(numeric.n_rows(), 3);
    }

    #[test]
    fn test_to_array() {
        let frame = city_frame().select(|c| c.name() == "visits");
        let array = frame.to_array().unwrap();
        assert_eq!(array.shape(), &[3, 1]);
        assert_eq!(array[[2, 0]], 1.5);

        assert!(city_frame().to_array().is_err());
    }

    #[test]
    fn test_to_array_missing_is_nan() {
        let frame = Frame::from_values(vec![Value::Int(1), Value::Null]);
        let array = frame.to_array().unwrap();
        assert!(array[[1, 0]].is_nan());
    }
}

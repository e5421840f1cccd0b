//! Cell values and their hashable category projection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single, dynamically typed table cell.
///
/// `Null` and a NaN `Float` are both treated as missing. Unlike plain `f64`
/// comparison, two NaN floats compare equal so that whole tables can be
/// compared with `==`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Whether this cell holds the missing marker.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Whether this cell marks its column as categorical.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Value::Str(_) | Value::Bool(_))
    }

    /// Numeric view of the cell. Missing cells are NaN; strings have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Null => Some(f64::NAN),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(_) => None,
        }
    }

    /// Whether the cell is an indicator set to one.
    pub(crate) fn is_hot(&self) -> bool {
        match self {
            Value::Int(i) => *i == 1,
            Value::Float(f) => *f == 1.0,
            Value::Bool(b) => *b,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nan"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Hashable projection of a [`Value`], used as a mapping key.
///
/// Floats are keyed by bit pattern; every missing cell collapses to
/// [`Category::Missing`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Missing,
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
}

impl Category {
    /// The cell value this category was built from.
    pub fn to_value(&self) -> Value {
        match self {
            Category::Missing => Value::Null,
            Category::Bool(b) => Value::Bool(*b),
            Category::Int(i) => Value::Int(*i),
            Category::Float(bits) => Value::Float(f64::from_bits(*bits)),
            Category::Str(s) => Value::Str(s.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Category::Missing)
    }
}

impl From<&Value> for Category {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Category::Missing,
            Value::Float(f) if f.is_nan() => Category::Missing,
            // -0.0 and 0.0 are the same category
            Value::Float(f) if *f == 0.0 => Category::Float(0f64.to_bits()),
            Value::Float(f) => Category::Float(f.to_bits()),
            Value::Bool(b) => Category::Bool(*b),
            Value::Int(i) => Category::Int(*i),
            Value::Str(s) => Category::Str(s.clone()),
        }
    }
}

/// Label used when a category names an indicator column.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_detection() {
        assert!(Value::Null.is_missing());
        assert!(Value::Float(f64::NAN).is_missing());
        assert!(!Value::Float(f64::INFINITY).is_missing());
        assert!(!Value::from("").is_missing());
    }

    #[test]
    fn test_nan_values_compare_equal() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(f64::NAN), Value::Null);
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_category_collapses_missing() {
        assert_eq!(Category::from(&Value::Null), Category::Missing);
        assert_eq!(Category::from(&Value::Float(f64::NAN)), Category::Missing);
        assert_eq!(
            Category::from(&Value::Float(-0.0)),
            Category::from(&Value::Float(0.0))
        );
    }

    #[test]
    fn test_category_back_to_value() {
        let values = [
            Value::from("box_-1"),
            Value::Int(-1),
            Value::Float(2.5),
            Value::Bool(true),
            Value::Null,
        ];
        for value in values {
            assert_eq!(Category::from(&value).to_value(), value);
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Str("B_b".to_string()).to_string(), "B_b");
        assert_eq!(Category::Int(-32).to_string(), "-32");
        assert_eq!(Category::from(&Value::Float(2.0)).to_string(), "2.0");
        assert_eq!(Category::Missing.to_string(), "nan");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }
}

//! Shared fixtures for the encoder integration tests.

#![allow(dead_code)]

use category_encoders::frame::{Column, Frame, Value};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn pick(rng: &mut StdRng, choices: &[Value]) -> Value {
    choices.choose(rng).cloned().unwrap_or_default()
}

fn strs(labels: &[&str]) -> Vec<Value> {
    labels.iter().map(|&l| Value::from(l)).collect()
}

/// Mixed-type frame used across the one-hot tests.
///
/// `extras` adds categories that a frame built without it never contains;
/// `has_missing` puts missing cells into the `none` column.
pub fn create_dataset(n_rows: usize, extras: bool, has_missing: bool) -> Frame {
    let mut rng = StdRng::seed_from_u64(2001);

    let float_edge = [
        Value::Float(f64::NAN),
        Value::Float(f64::INFINITY),
        Value::Float(f64::NEG_INFINITY),
        Value::Float(0.0),
        Value::Float(1.0),
        Value::Float(-1.0),
        Value::Float(std::f64::consts::PI),
    ];
    let invariant = if extras { strs(&["A", "B"]) } else { strs(&["A"]) };
    let underscore = strs(&["A", "B_b", "C_c_c"]);
    let mut none = strs(&["A", "B", "C"]);
    if has_missing {
        none.push(Value::Null);
    }
    let extra = if extras {
        strs(&["A", "B", "C", "D"])
    } else {
        strs(&["A", "B", "C"])
    };
    let numeric_names = [Value::Int(12), Value::Int(43), Value::Int(-32)];
    let categorical = strs(&["A", "B", "C"]);
    let na_categorical = vec![Value::from("A"), Value::from("B"), Value::from("C"), Value::Null];
    let categorical_int = [Value::Int(1), Value::Int(2), Value::Int(3)];

    let mut columns: Vec<(&str, Vec<Value>)> = vec![
        ("float", Vec::new()),
        ("float_edge", Vec::new()),
        ("unique_int", Vec::new()),
        ("unique_str", Vec::new()),
        ("invariant", Vec::new()),
        ("underscore", Vec::new()),
        ("none", Vec::new()),
        ("extra", Vec::new()),
        ("321", Vec::new()),
        ("categorical", Vec::new()),
        ("na_categorical", Vec::new()),
        ("categorical_int", Vec::new()),
    ];

    for row in 0..n_rows {
        let cells = [
            Value::Float(rng.gen::<f64>() * 10.0),
            pick(&mut rng, &float_edge),
            Value::Int(row as i64),
            Value::from(row.to_string()),
            pick(&mut rng, &invariant),
            pick(&mut rng, &underscore),
            pick(&mut rng, &none),
            pick(&mut rng, &extra),
            pick(&mut rng, &numeric_names),
            pick(&mut rng, &categorical),
            pick(&mut rng, &na_categorical),
            pick(&mut rng, &categorical_int),
        ];
        for ((_, values), cell) in columns.iter_mut().zip(cells) {
            values.push(cell);
        }
    }

    Frame::from_columns(
        columns
            .into_iter()
            .map(|(name, values)| Column::new(name, values))
            .collect(),
    )
    .unwrap()
}

/// Single-column frame of optional string labels.
pub fn labels(name: &str, values: &[Option<&str>]) -> Frame {
    Frame::from_columns(vec![Column::new(
        name,
        values.iter().map(|v| Value::from(*v)).collect(),
    )])
    .unwrap()
}

/// Row-major numeric view of an encoded frame, missing cells as NaN.
pub fn rows(frame: &Frame) -> Vec<Vec<f64>> {
    let array = frame.to_array().unwrap();
    array.outer_iter().map(|row| row.to_vec()).collect()
}

/// Asserts that inverse-transformed data matches the original, column by column.
pub fn verify_inverse_transform(expected: &Frame, obtained: &Frame) {
    assert_eq!(expected.column_names(), obtained.column_names());
    for column in expected.columns() {
        let other = obtained.column(column.name()).unwrap();
        assert_eq!(
            column.values(),
            other.values(),
            "column '{}' differs after inverse_transform",
            column.name()
        );
    }
}

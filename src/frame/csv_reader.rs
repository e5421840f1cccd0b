//! CSV input for [`Frame`].
//!
//! Fields are decoded as Latin-1, so any byte sequence is accepted. Column
//! types are inferred per column: empty fields are missing, then the whole
//! column is tried as integers, then as floats, and otherwise kept as strings.

use super::{Column, Frame, Value};
use crate::preprocessing::error::PreprocessingError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn infer_column(name: String, raw: Vec<String>) -> Column {
    let present = || raw.iter().filter(|s| !s.is_empty());

    let values = if present().all(|s| s.parse::<i64>().is_ok()) {
        raw.iter()
            .map(|s| s.parse::<i64>().map_or(Value::Null, Value::Int))
            .collect()
    } else if present().all(|s| s.parse::<f64>().is_ok()) {
        raw.iter()
            .map(|s| s.parse::<f64>().map_or(Value::Null, Value::Float))
            .collect()
    } else {
        raw.into_iter()
            .map(|s| if s.is_empty() { Value::Null } else { Value::Str(s) })
            .collect()
    };
    Column::new(name, values)
}

impl Frame {
    /// Read a headed CSV stream into a frame.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PreprocessingError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let names: Vec<String> = rdr.byte_headers()?.iter().map(decode_latin1).collect();
        let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];

        for (line, result) in rdr.byte_records().enumerate() {
            let record = result?;
            if record.len() != names.len() {
                return Err(PreprocessingError::InvalidShape {
                    expected: format!("{} fields", names.len()),
                    got: format!("{} fields in record {}", record.len(), line + 1),
                });
            }
            for (col, field) in record.iter().enumerate() {
                raw[col].push(decode_latin1(field));
            }
        }

        Frame::from_columns(
            names
                .into_iter()
                .zip(raw)
                .map(|(name, fields)| infer_column(name, fields))
                .collect(),
        )
    }

    /// Read a headed CSV file into a frame.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_inference() {
        let data = "id,score,city\n1,0.5,Chicago\n2,,\n3,2,Seattle\n";
        let frame = Frame::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(frame.shape(), (3, 3));
        assert_eq!(
            frame.column("id").unwrap().values(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(
            frame.column("score").unwrap().values(),
            &[Value::Float(0.5), Value::Null, Value::Float(2.0)]
        );
        assert_eq!(
            frame.column("city").unwrap().values(),
            &[Value::from("Chicago"), Value::Null, Value::from("Seattle")]
        );
    }

    #[test]
    fn test_mixed_column_stays_string() {
        let data = "code\n12\nA1\n";
        let frame = Frame::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(
            frame.column("code").unwrap().values(),
            &[Value::from("12"), Value::from("A1")]
        );
    }

    #[test]
    fn test_latin1_decoding() {
        let data: &[u8] = b"name\nZ\xfcrich\n";
        let frame = Frame::from_csv_reader(data).unwrap();
        assert_eq!(frame.column("name").unwrap().values()[0], Value::from("Zürich"));
    }

    #[test]
    fn test_ragged_record_is_error() {
        let data = "a,b\n1,2\n3\n";
        match Frame::from_csv_reader(data.as_bytes()) {
            Err(PreprocessingError::InvalidShape { expected, got }) => {
                assert_eq!(expected, "2 fields");
                assert_eq!(got, "1 fields in record 2");
            }
            other => panic!("expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = Frame::from_csv_path("/definitely/not/here.csv");
        assert!(matches!(result, Err(PreprocessingError::IoError(_))));
    }
}

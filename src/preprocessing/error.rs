//! The single error type shared by frames, encoders and the dataset loader.

use thiserror::Error;

/// Everything that can go wrong while loading, encoding or persisting.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// Shape mismatch between expected and actual table dimensions.
    #[error("Invalid shape: expected {expected}, got {got}")]
    InvalidShape { expected: String, got: String },
    /// Data contains missing values when the missing-value policy forbids them.
    #[error("Missing values: {0}")]
    MissingValues(String),
    /// A category not seen during fit, under the `error` unknown policy.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    /// Invalid hyperparameter value or unsupported operation for the configuration.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// A named column is absent from the table.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    /// Fitted parameters could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(String),
    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Fit was called on a frame with no rows.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// A frame has a different column count than the encoder expects.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for PreprocessingError {
    fn from(err: csv::Error) -> Self {
        PreprocessingError::CsvError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let shape = PreprocessingError::InvalidShape {
            expected: "3 rows".to_string(),
            got: "2 rows in column 'b'".to_string(),
        };
        assert_eq!(
            shape.to_string(),
            "Invalid shape: expected 3 rows, got 2 rows in column 'b'"
        );

        let mismatch = PreprocessingError::FeatureMismatch {
            expected_features: 4,
            got_features: 2,
        };
        assert_eq!(
            mismatch.to_string(),
            "Feature mismatch: expected 4 features, got 2"
        );

        let unknown = PreprocessingError::UnknownCategory("'Detroit' in column 'city'".to_string());
        assert_eq!(unknown.to_string(), "Unknown category: 'Detroit' in column 'city'");
    }

    #[test]
    fn test_csv_error_converts() {
        let raw: Result<Vec<csv::StringRecord>, csv::Error> = csv::ReaderBuilder::new()
            .flexible(false)
            .from_reader("a,b\n1,2,3\n".as_bytes())
            .records()
            .collect();
        let err = PreprocessingError::from(raw.unwrap_err());
        assert!(matches!(err, PreprocessingError::CsvError(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err = PreprocessingError::from(io);
        assert_eq!(err.to_string(), "I/O error: locked");
    }

    #[test]
    fn test_bincode_error_converts() {
        let truncated: Result<(u64, String), bincode::Error> = bincode::deserialize(&[1, 2]);
        let err = PreprocessingError::from(truncated.unwrap_err());
        assert!(matches!(err, PreprocessingError::SerializationError(_)));
    }

    #[test]
    fn test_usable_as_boxed_error() {
        fn lookup() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err(PreprocessingError::ColumnNotFound("city".to_string()))?
        }
        assert_eq!(lookup().unwrap_err().to_string(), "Column not found: city");
    }
}

//! Core traits for encoders.
//!
//! - [`Transformer`]: the configured, unfitted encoder. Fitting borrows the
//!   training data and returns a separate fitted value.
//! - [`FittedTransformer`]: holds the learned mapping, transforms new data and
//!   can be persisted.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;
use std::path::Path;

/// An encoder configured but not yet fitted.
///
/// # Example
/// ```
/// use category_encoders::frame::{Frame, Value};
/// use category_encoders::preprocessing::{FittedTransformer, OneHotEncoder, Transformer};
///
/// let train = Frame::from_values(vec![Value::from("A"), Value::from("B")]);
/// let fitted = OneHotEncoder::new().fit(&train).unwrap();
/// let encoded = fitted.transform(&train).unwrap();
/// assert_eq!(encoded.shape(), (2, 2));
/// ```
pub trait Transformer: Clone {
    /// What `fit` and `transform` consume.
    type Input;
    /// What `transform` produces.
    type Output;
    /// Learned state in persistable form.
    type Params: SerializableParams;
    /// The value `fit` returns.
    type Fitted: FittedTransformer<Params = Self::Params, Input = Self::Input, Output = Self::Output>;

    /// Learn the encoding from training data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the data is empty, a configured
    /// column is absent, or the data violates the missing-value policy.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Same as `fit` followed by `transform` on the same data.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;
}

/// A fitted encoder.
///
/// `from_params(extract_params())` reproduces an encoder that transforms
/// identically, and the file helpers store exactly those params.
pub trait FittedTransformer: Clone {
    type Input;
    type Output;
    type Params: SerializableParams;

    /// Encode data with the learned mapping.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Decode encoded data back to categories.
    ///
    /// Values that were collapsed during transform (unknown or missing
    /// categories) come back as missing.
    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input, PreprocessingError>;

    fn extract_params(&self) -> Self::Params;

    /// Rebuild from params, validating that they are consistent.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Write the learned params to `path`.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.as_ref().display(), "saved fitted encoder");
        Ok(())
    }

    /// Read params written by [`save_to_file`](Self::save_to_file).
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(&path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        tracing::debug!(path = %path.as_ref().display(), "loaded fitted encoder");
        Self::from_params(params)
    }

    /// Number of columns seen during fit.
    fn n_features_in(&self) -> usize;
}

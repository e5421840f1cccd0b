//! Categorical encoders with a fit / transform / inverse lifecycle.
//!
//! Encoders follow the same split everywhere in this crate: a configured
//! [`Transformer`] is fitted on a training [`Frame`](crate::frame::Frame) and
//! returns a separate [`FittedTransformer`] that holds the learned mapping.
//! Only the fitted value can transform, and only it can be persisted.
//!
//! # Core Traits
//!
//! - [`Transformer`]: Unfitted encoder with hyperparameters
//! - [`FittedTransformer`]: Fitted encoder ready for inference
//!
//! # Available Encoders
//!
//! - [`OneHotEncoder`]: One binary indicator column per category
//! - [`OrdinalEncoder`]: 1-based category ordinals, used by the one-hot encoder
//!
//! # Example
//!
//! ```
//! use category_encoders::frame::{Column, Frame};
//! use category_encoders::preprocessing::{
//!     FittedOneHotEncoder, FittedTransformer, HandleMissing, OneHotEncoder, Transformer,
//! };
//!
//! let train = Frame::from_columns(vec![Column::new(
//!     "color",
//!     vec!["red".into(), "green".into(), None::<&str>.into()],
//! )])
//! .unwrap();
//!
//! let encoder = OneHotEncoder::new()
//!     .with_use_cat_names(true)
//!     .with_handle_missing(HandleMissing::Indicator);
//! let fitted = encoder.fit(&train).unwrap();
//! assert_eq!(fitted.feature_names_out(), &["color_red", "color_green", "color_nan"]);
//!
//! let path = std::env::temp_dir().join("doc_one_hot.bin");
//! fitted.save_to_file(&path).unwrap();
//! let loaded = FittedOneHotEncoder::load_from_file(&path).unwrap();
//! assert_eq!(loaded.transform(&train).unwrap(), fitted.transform(&train).unwrap());
//! # std::fs::remove_file(path).ok();
//! ```

pub mod encoding;
pub mod error;
pub mod traits;

pub use encoding::{
    ColumnOrdinals, FittedOneHotEncoder, FittedOrdinalEncoder, HandleMissing, HandleUnknown,
    IndicatorColumn, IndicatorGroup, OneHotEncoder, OneHotEncoderConfig, OneHotEncoderParams,
    OrdinalEncoder, OrdinalEncoderConfig, OrdinalEncoderParams, MISSING_ORDINAL, UNKNOWN_ORDINAL,
};
pub use error::PreprocessingError;
pub use traits::{FittedTransformer, Transformer};

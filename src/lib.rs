//! # category-encoders
//!
//! Categorical feature encoders over a small in-memory table.
//!
//! ## Core Design Principles
//!
//! - **Fitted State is a Separate Type**: configuring an encoder and fitting it
//!   produce different types, so an unfitted encoder cannot transform.
//! - **Explicit Policies**: missing cells and unseen categories are handled by
//!   a configured [`HandleMissing`] / [`HandleUnknown`] policy, never silently.
//! - **Persistable**: every fitted encoder exposes a serde parameter struct
//!   and can be saved to and loaded from a file.
//!
//! ## Quick Start
//!
//! ```rust
//! use category_encoders::datasets::{load_postcodes, TargetType};
//! use category_encoders::preprocessing::{FittedTransformer, OneHotEncoder, Transformer};
//!
//! let (x, _y) = load_postcodes(TargetType::Binary).unwrap();
//!
//! let fitted = OneHotEncoder::new()
//!     .with_cols(["HIER_postcode1"])
//!     .with_use_cat_names(true)
//!     .fit(&x)
//!     .unwrap();
//!
//! let encoded = fitted.transform(&x).unwrap();
//! assert_eq!(encoded.n_rows(), 100);
//! assert!(encoded.column("HIER_postcode1").is_none());
//!
//! let recovered = fitted.inverse_transform(&encoded).unwrap();
//! assert_eq!(recovered, x);
//! ```
//!
//! ## Module Structure
//!
//! - `frame`: Named, nullable, dynamically typed columns and CSV input
//! - `preprocessing`: The encoders, their policies and the transformer traits
//! - `datasets`: The bundled postcode dataset
//! - `serialization`: Byte encoding of fitted parameters

pub mod datasets;
pub mod frame;
pub mod preprocessing;
pub mod serialization;

pub use frame::{Column, Frame, Value};
pub use preprocessing::{
    FittedOneHotEncoder, FittedTransformer, HandleMissing, HandleUnknown, OneHotEncoder,
    PreprocessingError, Transformer,
};

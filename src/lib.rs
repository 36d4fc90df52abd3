//! Safe text normalization for tabular field values.
//!
//! A cell that is declared "text" can still arrive as a null slot, a NaN
//! missing-data sentinel, or a stray scalar. [`FieldValue`] models that at
//! the boundary; [`normalize`] turns any of it into guaranteed trimmed text.

pub mod normalize;
pub mod value;

pub use normalize::{normalize, normalize_cell, normalize_columns};
pub use value::FieldValue;

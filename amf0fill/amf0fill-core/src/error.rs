//! Error types for value conversion.

use crate::{schema::FieldType, value::ValueKind};

/// Error returned when a decoded [`Value`](crate::Value) cannot be converted
/// into a declared field type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The value kind has no conversion into the declared type.
    #[error("cannot convert {got} into {want}")]
    Incompatible { got: ValueKind, want: FieldType },

    /// A number is NaN, infinite or outside the range of an integer type.
    #[error("number {value} is out of range for {want}")]
    OutOfRange { value: f64, want: FieldType },

    /// A strict array does not have the length of a fixed-size array field.
    #[error("expected {expected} elements, got {actual}")]
    Length { expected: usize, actual: usize },

    /// An element of a strict array failed to convert.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ConversionError>,
    },

    /// A property of an object-like value failed to convert.
    #[error("property '{key}': {source}")]
    Property {
        key: String,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    pub fn incompatible(got: ValueKind, want: FieldType) -> Self {
        Self::Incompatible { got, want }
    }
}

//! Errors produced while filling a record.

use amf0fill_core::{ConversionError, FieldType, ValueKind};

/// Error returned by [`Filler::fill`](crate::Filler::fill).
///
/// Every variant aborts the fill; fields before `field_index` keep the values
/// already assigned and the rest are left untouched.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The value decoder failed (malformed bytes, short read, unsupported
    /// marker).
    #[error("failed to decode value for field {field_index}: {source}")]
    Upstream {
        field_index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A null or undefined value was read for a field that has no empty state.
    #[error(
        "field {field_index} ('{field_name}') of type {field_type} cannot represent an absent value"
    )]
    CannotRepresentAbsence {
        field_index: usize,
        field_name: &'static str,
        field_type: FieldType,
    },

    /// The decoded value cannot be converted into the field's declared type.
    #[error("field {field_index} ('{field_name}'): {source}")]
    TypeMismatch {
        field_index: usize,
        field_name: &'static str,
        got: ValueKind,
        want: FieldType,
        #[source]
        source: ConversionError,
    },
}

impl DecodeError {
    /// Index of the field at which decoding stopped.
    pub fn field_index(&self) -> usize {
        match self {
            DecodeError::Upstream { field_index, .. }
            | DecodeError::CannotRepresentAbsence { field_index, .. }
            | DecodeError::TypeMismatch { field_index, .. } => *field_index,
        }
    }
}

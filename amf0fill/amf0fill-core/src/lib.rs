//! Format-agnostic core types for `amf0fill`.
//!
//! This crate provides the decoded value representation ([`Value`]), the
//! destination field classification ([`FieldType`]), the describable record
//! contract ([`Record`] / [`Field`] / [`FromValue`]) and the
//! [`ValueDecoder`] trait implemented by wire decoders.

mod convert;
mod decoder;
mod error;
mod record;
mod schema;
mod value;

pub use convert::FromValue;
pub use decoder::{FnDecoder, ValueDecoder};
pub use error::ConversionError;
pub use record::{Field, FieldSlot, Record};
pub use schema::{FieldDef, FieldDefs, FieldType, format_field_defs};
pub use value::{Date, Properties, Value, ValueKind};

//! Fill statically declared records from AMF0 value streams.
//!
//! A [`Filler`] reads one value per record field, in declaration order, and
//! converts it into the field's type. [`decode_into`] is the one-shot entry
//! point using the default AMF0 decoder.

mod error;
mod filler;

pub use amf0fill_amf0 as amf0;
pub use amf0fill_core as core;
pub use amf0fill_core::{FieldType, FromValue, Record, Value, ValueKind, record};
pub use error::DecodeError;
pub use filler::{Filler, decode_into};

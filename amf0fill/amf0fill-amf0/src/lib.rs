//! AMF0 value decoder.
//!
//! [`Amf0Decoder`] implements [`ValueDecoder`](amf0fill_core::ValueDecoder)
//! for any [`std::io::Read`] source and is the default decoder used by
//! `amf0fill`.

mod decoder;
mod error;
mod marker;

pub use decoder::{Amf0Decoder, DecodeLimits, decode_value};
pub use error::Amf0Error;
pub use marker::Marker;

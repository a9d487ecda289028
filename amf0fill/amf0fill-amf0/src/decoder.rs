//! AMF0 decoding to the format-agnostic [`Value`] type.

use std::{io::Read, sync::Arc};

use amf0fill_core::{Date, Properties, Value, ValueDecoder};
use tracing::trace;

use crate::{error::Amf0Error, marker::Marker};

// Upper bound on capacity reserved from a declared element count.
const PREALLOC_LIMIT: usize = 1024;

/// Bounds applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum nesting of objects and arrays.
    pub max_depth: usize,
    /// Maximum declared string length or element count.
    pub max_length: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_length: 16 * 1024 * 1024,
        }
    }
}

impl DecodeLimits {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Stateless AMF0 decoder reading exactly one value per call.
#[derive(Debug, Clone, Default)]
pub struct Amf0Decoder {
    limits: DecodeLimits,
}

impl Amf0Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Decode the next value from `source`, leaving it positioned right after
    /// that value.
    pub fn decode_from<R: Read + ?Sized>(&self, source: &mut R) -> Result<Value, Amf0Error> {
        Reader {
            source,
            limits: self.limits,
        }
        .value(0)
    }
}

impl<R: Read + ?Sized> ValueDecoder<R> for Amf0Decoder {
    type Error = Amf0Error;

    fn decode(&mut self, source: &mut R) -> Result<Value, Self::Error> {
        self.decode_from(source)
    }
}

/// Decode one value from `source` with default limits.
pub fn decode_value<R: Read + ?Sized>(source: &mut R) -> Result<Value, Amf0Error> {
    Amf0Decoder::new().decode_from(source)
}

struct Reader<'a, R: ?Sized> {
    source: &'a mut R,
    limits: DecodeLimits,
}

impl<R: Read + ?Sized> Reader<'_, R> {
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Amf0Error> {
        let mut buf = [0; N];
        self.source.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8, Amf0Error> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_u16(&mut self) -> Result<u16, Amf0Error> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    fn read_u32(&mut self) -> Result<u32, Amf0Error> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    fn read_i16(&mut self) -> Result<i16, Amf0Error> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    fn read_f64(&mut self) -> Result<f64, Amf0Error> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    fn read_marker(&mut self) -> Result<Marker, Amf0Error> {
        let byte = self.read_u8()?;
        Marker::from_u8(byte).ok_or(Amf0Error::UnknownMarker(byte))
    }

    fn check_length(&self, len: usize) -> Result<(), Amf0Error> {
        if len > self.limits.max_length {
            return Err(Amf0Error::LengthLimitExceeded {
                len,
                limit: self.limits.max_length,
            });
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<(), Amf0Error> {
        if depth > self.limits.max_depth {
            return Err(Amf0Error::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        Ok(())
    }

    fn read_utf8(&mut self, len: usize) -> Result<Arc<str>, Amf0Error> {
        self.check_length(len)?;
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        Read::take(&mut *self.source, len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        Ok(Arc::from(String::from_utf8(buf)?))
    }

    fn read_short_string(&mut self) -> Result<Arc<str>, Amf0Error> {
        let len = self.read_u16()? as usize;
        self.read_utf8(len)
    }

    fn read_long_string(&mut self) -> Result<Arc<str>, Amf0Error> {
        let len = self.read_u32()? as usize;
        self.read_utf8(len)
    }

    fn value(&mut self, depth: usize) -> Result<Value, Amf0Error> {
        let marker = self.read_marker()?;
        self.value_body(marker, depth)
    }

    fn value_body(&mut self, marker: Marker, depth: usize) -> Result<Value, Amf0Error> {
        trace!(%marker, depth, "decoding AMF0 value");
        Ok(match marker {
            Marker::Number => Value::Number(self.read_f64()?),
            Marker::Boolean => Value::Boolean(self.read_u8()? != 0),
            Marker::String => Value::String(self.read_short_string()?),
            Marker::Object => Value::Object(self.properties(depth + 1)?),
            Marker::Null => Value::Null,
            Marker::Undefined => Value::Undefined,
            Marker::Reference => Value::Reference(self.read_u16()?),
            Marker::EcmaArray => {
                // The count is advisory; the end marker terminates the list.
                let count = self.read_u32()? as usize;
                self.check_length(count)?;
                Value::EcmaArray(self.properties(depth + 1)?)
            }
            Marker::StrictArray => {
                let count = self.read_u32()? as usize;
                self.check_length(count)?;
                self.enter(depth + 1)?;
                let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
                for _ in 0..count {
                    items.push(self.value(depth + 1)?);
                }
                Value::StrictArray(items)
            }
            Marker::Date => {
                let millis = self.read_f64()?;
                let timezone = self.read_i16()?;
                Value::Date(Date::new(millis, timezone))
            }
            Marker::LongString => Value::LongString(self.read_long_string()?),
            Marker::Unsupported => Value::Unsupported,
            Marker::XmlDocument => Value::XmlDocument(self.read_long_string()?),
            Marker::TypedObject => {
                let class_name = self.read_short_string()?;
                Value::TypedObject {
                    class_name,
                    properties: self.properties(depth + 1)?,
                }
            }
            Marker::ObjectEnd => return Err(Amf0Error::UnexpectedObjectEnd),
            Marker::MovieClip | Marker::Recordset | Marker::AvmPlusObject => {
                return Err(Amf0Error::UnsupportedMarker(marker));
            }
        })
    }

    /// Key/value pairs terminated by an empty key followed by the object-end
    /// marker.
    fn properties(&mut self, depth: usize) -> Result<Properties, Amf0Error> {
        self.enter(depth)?;
        let mut properties = Vec::new();
        loop {
            let key = self.read_short_string()?;
            let marker = self.read_marker()?;
            if key.is_empty() && marker == Marker::ObjectEnd {
                return Ok(properties);
            }
            let value = self.value_body(marker, depth)?;
            properties.push((key, value));
        }
    }
}

//! Error type for AMF0 value decoding.

use crate::marker::Marker;

/// Error returned by [`Amf0Decoder`](crate::Amf0Decoder).
#[derive(Debug, thiserror::Error)]
pub enum Amf0Error {
    /// Reading from the byte source failed; a truncated value surfaces as
    /// [`std::io::ErrorKind::UnexpectedEof`].
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown AMF0 type marker 0x{0:02x}")]
    UnknownMarker(u8),

    /// Reserved or AMF3-switch markers.
    #[error("unsupported AMF0 type marker {0}")]
    UnsupportedMarker(Marker),

    /// An object-end marker appeared where a value was expected.
    #[error("unexpected object-end marker outside an object")]
    UnexpectedObjectEnd,

    #[error("invalid UTF-8 in AMF0 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("AMF0 nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("AMF0 length {len} exceeds limit of {limit}")]
    LengthLimitExceeded { len: usize, limit: usize },
}

impl Amf0Error {
    pub fn is_eof(&self) -> bool {
        matches!(self, Amf0Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

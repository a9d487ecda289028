use std::fmt;

/// AMF0 type markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Marker {
    Number = 0x00,
    Boolean = 0x01,
    String = 0x02,
    Object = 0x03,
    /// Reserved, never decoded.
    MovieClip = 0x04,
    Null = 0x05,
    Undefined = 0x06,
    Reference = 0x07,
    EcmaArray = 0x08,
    ObjectEnd = 0x09,
    StrictArray = 0x0a,
    Date = 0x0b,
    LongString = 0x0c,
    Unsupported = 0x0d,
    /// Reserved, never decoded.
    Recordset = 0x0e,
    XmlDocument = 0x0f,
    TypedObject = 0x10,
    /// Switch to AMF3, not supported.
    AvmPlusObject = 0x11,
}

impl Marker {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => Self::Number,
            0x01 => Self::Boolean,
            0x02 => Self::String,
            0x03 => Self::Object,
            0x04 => Self::MovieClip,
            0x05 => Self::Null,
            0x06 => Self::Undefined,
            0x07 => Self::Reference,
            0x08 => Self::EcmaArray,
            0x09 => Self::ObjectEnd,
            0x0a => Self::StrictArray,
            0x0b => Self::Date,
            0x0c => Self::LongString,
            0x0d => Self::Unsupported,
            0x0e => Self::Recordset,
            0x0f => Self::XmlDocument,
            0x10 => Self::TypedObject,
            0x11 => Self::AvmPlusObject,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Object => "object",
            Self::MovieClip => "movieclip",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Reference => "reference",
            Self::EcmaArray => "ecma-array",
            Self::ObjectEnd => "object-end",
            Self::StrictArray => "strict-array",
            Self::Date => "date",
            Self::LongString => "long-string",
            Self::Unsupported => "unsupported",
            Self::Recordset => "recordset",
            Self::XmlDocument => "xml-document",
            Self::TypedObject => "typed-object",
            Self::AvmPlusObject => "avmplus-object",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.as_str(), *self as u8)
    }
}

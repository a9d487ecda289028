//! Decoded AMF0 value representation produced by value decoders.

use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// Ordered key/value pairs of an object-like value.
pub type Properties = Vec<(Arc<str>, Value)>;

/// AMF0 date payload: milliseconds since the Unix epoch plus the (unused,
/// usually zero) timezone offset carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Date {
    pub millis: f64,
    pub timezone: i16,
}

impl Date {
    pub fn new(millis: f64, timezone: i16) -> Self {
        Self { millis, timezone }
    }
}

/// Value produced by value decoders, one variant per AMF0 type marker that
/// carries meaning.
///
/// The default is `Null`, the empty state of a dynamic field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(Arc<str>),
    Object(Properties),
    #[default]
    Null,
    Undefined,
    Reference(u16),
    EcmaArray(Properties),
    StrictArray(Vec<Value>),
    Date(Date),
    LongString(Arc<str>),
    Unsupported,
    XmlDocument(Arc<str>),
    TypedObject {
        class_name: Arc<str>,
        properties: Properties,
    },
}

/// Payload-free tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Boolean,
    String,
    Object,
    Null,
    Undefined,
    Reference,
    EcmaArray,
    StrictArray,
    Date,
    LongString,
    Unsupported,
    XmlDocument,
    TypedObject,
}

impl ValueKind {
    /// Whether values of this kind carry a tag only and no payload.
    ///
    /// Only `Null` and `Undefined` are bodyless. Kinds whose payload merely
    /// happens to be empty (an empty string, an object without properties)
    /// are not.
    pub fn is_bodyless(self) -> bool {
        matches!(self, ValueKind::Null | ValueKind::Undefined)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Reference => "reference",
            ValueKind::EcmaArray => "ecma-array",
            ValueKind::StrictArray => "strict-array",
            ValueKind::Date => "date",
            ValueKind::LongString => "long-string",
            ValueKind::Unsupported => "unsupported",
            ValueKind::XmlDocument => "xml-document",
            ValueKind::TypedObject => "typed-object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Build an anonymous object from `(key, value)` pairs, keeping their order.
    pub fn object<K: AsRef<str>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Object(
            properties
                .into_iter()
                .map(|(k, v)| (Arc::from(k.as_ref()), v))
                .collect(),
        )
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Reference(_) => ValueKind::Reference,
            Value::EcmaArray(_) => ValueKind::EcmaArray,
            Value::StrictArray(_) => ValueKind::StrictArray,
            Value::Date(_) => ValueKind::Date,
            Value::LongString(_) => ValueKind::LongString,
            Value::Unsupported => ValueKind::Unsupported,
            Value::XmlDocument(_) => ValueKind::XmlDocument,
            Value::TypedObject { .. } => ValueKind::TypedObject,
        }
    }

    /// See [`ValueKind::is_bodyless`].
    pub fn is_bodyless(&self) -> bool {
        self.kind().is_bodyless()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::LongString(s) | Value::XmlDocument(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Properties of `Object`, `EcmaArray` and `TypedObject` values.
    pub fn properties(&self) -> Option<&[(Arc<str>, Value)]> {
        match self {
            Value::Object(p) | Value::EcmaArray(p) | Value::TypedObject { properties: p, .. } => {
                Some(p.as_slice())
            }
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) | Value::LongString(s) => write!(f, "{s:?}"),
            Value::XmlDocument(s) => write!(f, "xml({s:?})"),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Unsupported => f.write_str("unsupported"),
            Value::Reference(index) => write!(f, "ref({index})"),
            Value::Date(date) => write!(f, "date({}, tz={})", date.millis, date.timezone),
            Value::StrictArray(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(properties) => write_properties(f, properties),
            Value::EcmaArray(properties) => {
                f.write_str("ecma")?;
                write_properties(f, properties)
            }
            Value::TypedObject {
                class_name,
                properties,
            } => {
                f.write_str(class_name)?;
                write_properties(f, properties)
            }
        }
    }
}

fn write_properties(f: &mut Formatter<'_>, properties: &[(Arc<str>, Value)]) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in properties.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key:?}: {value}")?;
    }
    f.write_str("}")
}

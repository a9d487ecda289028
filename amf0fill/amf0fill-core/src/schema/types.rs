use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::value::ValueKind;

/// Declared type of a destination record field.
///
/// Each variant falls in exactly one of two classes, see
/// [`FieldType::is_absence_capable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Date,
    /// Fixed-length array `[T; N]`.
    Array(Box<FieldType>, usize),
    /// Growable sequence `Vec<T>`.
    Sequence(Box<FieldType>),
    /// String-keyed map.
    Map(Box<FieldType>),
    Function,
    Channel,
    /// Open type holding any decoded [`Value`](crate::Value).
    Dynamic,
    Optional(Box<FieldType>),
}

impl FieldType {
    /// Whether the type has a "no value" state, i.e. whether a null or
    /// undefined wire value may be skipped for a field of this type.
    ///
    /// Arrays, sequences, maps, functions, channels, dynamic values and
    /// optionals are absence-capable. Everything else must receive a
    /// concrete value.
    pub fn is_absence_capable(&self) -> bool {
        matches!(
            self,
            FieldType::Array(_, _)
                | FieldType::Sequence(_)
                | FieldType::Map(_)
                | FieldType::Function
                | FieldType::Channel
                | FieldType::Dynamic
                | FieldType::Optional(_)
        )
    }

    /// Closed conversion table: whether a non-bodyless value of `kind` can be
    /// converted into this type.
    ///
    /// Only the outer shape is checked here. Element and range checks happen
    /// during the conversion itself.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        match self {
            FieldType::Bool => kind == ValueKind::Boolean,
            FieldType::I8
            | FieldType::I16
            | FieldType::I32
            | FieldType::I64
            | FieldType::U8
            | FieldType::U16
            | FieldType::U32
            | FieldType::U64
            | FieldType::F32
            | FieldType::F64 => kind == ValueKind::Number,
            FieldType::String => matches!(
                kind,
                ValueKind::String | ValueKind::LongString | ValueKind::XmlDocument
            ),
            FieldType::Date => kind == ValueKind::Date,
            FieldType::Array(_, _) | FieldType::Sequence(_) => kind == ValueKind::StrictArray,
            FieldType::Map(_) => matches!(
                kind,
                ValueKind::Object | ValueKind::EcmaArray | ValueKind::TypedObject
            ),
            FieldType::Function | FieldType::Channel => false,
            FieldType::Dynamic => true,
            FieldType::Optional(inner) => inner.accepts(kind),
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            FieldType::Array(_, _)
                | FieldType::Sequence(_)
                | FieldType::Map(_)
                | FieldType::Optional(_)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::I8 => "i8",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Array(_, _) => "array",
            FieldType::Sequence(_) => "sequence",
            FieldType::Map(_) => "map",
            FieldType::Function => "function",
            FieldType::Channel => "channel",
            FieldType::Dynamic => "dynamic",
            FieldType::Optional(_) => "optional",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FieldType::Array(elem, len) => write!(f, "[{elem}; {len}]"),
            FieldType::Sequence(elem) => write!(f, "sequence<{elem}>"),
            FieldType::Map(elem) => write!(f, "map<string, {elem}>"),
            FieldType::Optional(inner) => write!(f, "optional<{inner}>"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Named field of a destination record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered field list of a record; the order is the decode order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}

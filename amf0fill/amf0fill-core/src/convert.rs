//! Conversions from decoded values into concrete Rust field types.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use crate::{
    error::ConversionError,
    schema::FieldType,
    value::{Date, Value},
};

/// A Rust type that can be the destination of one decoded value.
///
/// The set of implementations is the conversion table: a type without an
/// implementation cannot appear in a [`Record`](crate::Record).
pub trait FromValue: Sized {
    /// Declared type used for absence classification and diagnostics.
    fn field_type() -> FieldType;

    /// Unwrap `value` to its concrete payload and convert it.
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

fn mismatch<T: FromValue>(value: &Value) -> ConversionError {
    ConversionError::incompatible(value.kind(), T::field_type())
}

fn number<T: FromValue>(value: Value) -> Result<f64, ConversionError> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(mismatch::<T>(&other)),
    }
}

impl FromValue for bool {
    fn field_type() -> FieldType {
        FieldType::Bool
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for f64 {
    fn field_type() -> FieldType {
        FieldType::F64
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        number::<Self>(value)
    }
}

impl FromValue for f32 {
    fn field_type() -> FieldType {
        FieldType::F32
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        number::<Self>(value).map(|n| n as f32)
    }
}

// AMF0 only has doubles: integers truncate toward zero and must fit.
macro_rules! impl_integer {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn field_type() -> FieldType {
                    FieldType::$variant
                }

                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    let n = number::<Self>(value)?;
                    let t = n.trunc();
                    if t.is_finite() && t >= <$ty>::MIN as f64 && t < <$ty>::MAX as f64 + 1.0 {
                        Ok(t as $ty)
                    } else {
                        Err(ConversionError::OutOfRange {
                            value: n,
                            want: FieldType::$variant,
                        })
                    }
                }
            }
        )*
    };
}

impl_integer!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

impl FromValue for Arc<str> {
    fn field_type() -> FieldType {
        FieldType::String
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::String(s) | Value::LongString(s) | Value::XmlDocument(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for String {
    fn field_type() -> FieldType {
        FieldType::String
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        Arc::<str>::from_value(value).map(|s| s.to_string())
    }
}

impl FromValue for Date {
    fn field_type() -> FieldType {
        FieldType::Date
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Date(date) => Ok(date),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for Value {
    fn field_type() -> FieldType {
        FieldType::Dynamic
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn field_type() -> FieldType {
        FieldType::Optional(Box::new(T::field_type()))
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        if value.is_bodyless() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}

fn elements<T: FromValue>(items: Vec<Value>) -> Result<Vec<T>, ConversionError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_value(item).map_err(|e| ConversionError::Element {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

impl<T: FromValue> FromValue for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::Sequence(Box::new(T::field_type()))
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::StrictArray(items) => elements(items),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: FromValue, const N: usize> FromValue for [T; N] {
    fn field_type() -> FieldType {
        FieldType::Array(Box::new(T::field_type()), N)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        let items = match value {
            Value::StrictArray(items) => items,
            other => return Err(mismatch::<Self>(&other)),
        };
        if items.len() != N {
            return Err(ConversionError::Length {
                expected: N,
                actual: items.len(),
            });
        }
        elements::<T>(items)?
            .try_into()
            .map_err(|rest: Vec<T>| ConversionError::Length {
                expected: N,
                actual: rest.len(),
            })
    }
}

fn properties<T, M>(value: Value, want: FieldType) -> Result<M, ConversionError>
where
    T: FromValue,
    M: FromIterator<(String, T)>,
{
    let properties = match value {
        Value::Object(p) | Value::EcmaArray(p) | Value::TypedObject { properties: p, .. } => p,
        other => return Err(ConversionError::incompatible(other.kind(), want)),
    };
    properties
        .into_iter()
        .map(|(key, item)| match T::from_value(item) {
            Ok(v) => Ok((key.to_string(), v)),
            Err(e) => Err(ConversionError::Property {
                key: key.to_string(),
                source: Box::new(e),
            }),
        })
        .collect()
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn field_type() -> FieldType {
        FieldType::Map(Box::new(T::field_type()))
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        properties(value, Self::field_type())
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn field_type() -> FieldType {
        FieldType::Map(Box::new(T::field_type()))
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        properties(value, Self::field_type())
    }
}

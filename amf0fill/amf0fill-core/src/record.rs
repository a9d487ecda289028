//! Describable destination records.

use std::fmt;

use crate::{
    convert::FromValue,
    error::ConversionError,
    schema::{FieldDefs, FieldType},
    value::Value,
};

/// One assignable field of a record.
///
/// Every [`FromValue`] type is a `Field`. Hand-written implementations can
/// expose other classifications (e.g. [`FieldType::Function`]).
pub trait Field {
    fn field_type(&self) -> FieldType;

    /// Convert `value` into the field's type and store it.
    ///
    /// On error the field keeps its previous content.
    fn assign(&mut self, value: Value) -> Result<(), ConversionError>;
}

impl<T: FromValue> Field for T {
    fn field_type(&self) -> FieldType {
        T::field_type()
    }

    fn assign(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// Mutable view of a single record field together with its name.
pub struct FieldSlot<'a> {
    pub name: &'static str,
    pub field: &'a mut dyn Field,
}

impl<'a> FieldSlot<'a> {
    pub fn new(name: &'static str, field: &'a mut dyn Field) -> Self {
        Self { name, field }
    }
}

impl fmt::Debug for FieldSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSlot")
            .field("name", &self.name)
            .field("field_type", &self.field.field_type())
            .finish()
    }
}

/// A statically shaped record whose fields are filled in declaration order.
///
/// Usually implemented through [`record!`](crate::record).
pub trait Record {
    /// Ordered schema of the record.
    fn field_defs() -> FieldDefs
    where
        Self: Sized;

    /// Ordered mutable slots, one per field, matching [`Record::field_defs`].
    fn slots(&mut self) -> Vec<FieldSlot<'_>>;
}

/// Declare a struct and implement [`Record`] for it.
///
/// Field declaration order is the decode order.
///
/// ```
/// amf0fill_core::record! {
///     #[derive(Debug, Default)]
///     pub struct Person {
///         pub name: String,
///         pub age: Option<i32>,
///     }
/// }
///
/// use amf0fill_core::Record;
/// assert_eq!(Person::field_defs().len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn field_defs() -> $crate::FieldDefs {
                $crate::FieldDefs::new(::std::vec![
                    $(
                        $crate::FieldDef::new(
                            ::core::stringify!($field),
                            <$ty as $crate::FromValue>::field_type(),
                        ),
                    )*
                ])
            }

            fn slots(&mut self) -> ::std::vec::Vec<$crate::FieldSlot<'_>> {
                ::std::vec![
                    $(
                        $crate::FieldSlot::new(::core::stringify!($field), &mut self.$field),
                    )*
                ]
            }
        }
    };
}

//! Destination field classification and record schema description.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{FieldDef, FieldDefs, FieldType};

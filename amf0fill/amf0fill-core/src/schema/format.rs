use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldType};

/// Format field definitions in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Each line states whether a null/undefined wire value is skipped or rejected.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_labeled_type(&field.name, &field.field_type, 0, &mut out)?;
    }

    Ok(out)
}

fn absence(field_type: &FieldType) -> &'static str {
    if field_type.is_absence_capable() {
        "skip"
    } else {
        "reject"
    }
}

fn format_compound(field_type: &FieldType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", field_type.type_name())?;
    writeln!(out, "{pad}absence: {}", absence(field_type))?;

    match field_type {
        FieldType::Sequence(elem) => format_labeled_type("item", elem, indent, out)?,
        FieldType::Array(elem, size) => {
            format_labeled_type("item", elem, indent, out)?;
            writeln!(out, "{pad}size: {size}")?;
        }
        FieldType::Map(elem) => format_labeled_type("value", elem, indent, out)?,
        FieldType::Optional(inner) => format_labeled_type("inner", inner, indent, out)?,
        _ => unreachable!("{field_type:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    field_type: &FieldType,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if field_type.is_primitive() {
        writeln!(
            out,
            "{pad}{label}: {{ type: {}, absence: {} }}",
            field_type.type_name(),
            absence(field_type)
        )?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_compound(field_type, indent + 4, out)?;
    }
    Ok(())
}

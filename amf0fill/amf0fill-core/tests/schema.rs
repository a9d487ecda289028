use amf0fill_core::{FieldDef, FieldType, ValueKind, format_field_defs};

#[test]
fn absence_capable_classification() {
    let capable = [
        FieldType::Array(Box::new(FieldType::I32), 2),
        FieldType::Sequence(Box::new(FieldType::String)),
        FieldType::Map(Box::new(FieldType::Dynamic)),
        FieldType::Function,
        FieldType::Channel,
        FieldType::Dynamic,
        FieldType::Optional(Box::new(FieldType::I32)),
    ];
    for ty in capable {
        assert!(ty.is_absence_capable(), "{ty} should be absence-capable");
    }

    let incapable = [
        FieldType::Bool,
        FieldType::I8,
        FieldType::I16,
        FieldType::I32,
        FieldType::I64,
        FieldType::U8,
        FieldType::U16,
        FieldType::U32,
        FieldType::U64,
        FieldType::F32,
        FieldType::F64,
        FieldType::String,
        FieldType::Date,
    ];
    for ty in incapable {
        assert!(!ty.is_absence_capable(), "{ty} should be absence-incapable");
    }
}

#[test]
fn conversion_table_accepts_expected_kinds() {
    assert!(FieldType::I32.accepts(ValueKind::Number));
    assert!(!FieldType::I32.accepts(ValueKind::String));
    assert!(FieldType::String.accepts(ValueKind::LongString));
    assert!(FieldType::String.accepts(ValueKind::XmlDocument));
    assert!(!FieldType::String.accepts(ValueKind::Number));
    assert!(FieldType::Map(Box::new(FieldType::I32)).accepts(ValueKind::EcmaArray));
    assert!(FieldType::Map(Box::new(FieldType::I32)).accepts(ValueKind::TypedObject));
    assert!(!FieldType::Sequence(Box::new(FieldType::I32)).accepts(ValueKind::Object));
    assert!(FieldType::Optional(Box::new(FieldType::Bool)).accepts(ValueKind::Boolean));
    assert!(!FieldType::Optional(Box::new(FieldType::Bool)).accepts(ValueKind::Number));
    assert!(FieldType::Dynamic.accepts(ValueKind::Reference));
    assert!(!FieldType::Function.accepts(ValueKind::Object));
    assert!(!FieldType::Channel.accepts(ValueKind::Unsupported));
}

#[test]
fn display_names_nested_types() {
    let ty = FieldType::Optional(Box::new(FieldType::Sequence(Box::new(FieldType::Map(
        Box::new(FieldType::F64),
    )))));
    assert_eq!(ty.to_string(), "optional<sequence<map<string, f64>>>");
    assert_eq!(
        FieldType::Array(Box::new(FieldType::U8), 4).to_string(),
        "[u8; 4]"
    );
}

#[test]
fn format_renders_primitives_inline_and_compounds_as_blocks() -> Result<(), std::fmt::Error> {
    let fields = vec![
        FieldDef::new("name", FieldType::String),
        FieldDef::new("age", FieldType::Optional(Box::new(FieldType::I32))),
        FieldDef::new(
            "scores",
            FieldType::Array(Box::new(FieldType::F64), 3),
        ),
    ];

    let text = format_field_defs(&fields)?;
    let expected = "\
name: { type: string, absence: reject }
age:
    type: optional
    absence: skip
    inner: { type: i32, absence: reject }
scores:
    type: array
    absence: skip
    item: { type: f64, absence: reject }
    size: 3
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn dynamic_field_is_rendered_inline() -> Result<(), std::fmt::Error> {
    let text = format_field_defs([FieldDef::new("extra", FieldType::Dynamic)])?;
    assert_eq!(text, "extra: { type: dynamic, absence: skip }\n");
    Ok(())
}

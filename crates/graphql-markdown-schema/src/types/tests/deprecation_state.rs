use crate::Schema;
use crate::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn deprecated_without_reason_uses_default_reason() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, concat!(
            "type Query {\n",
            "  old: Int @deprecated\n",
            "  older: Int @deprecated(reason: \"Use `new`\")\n",
            "  new: Int\n",
            "}\n",
        ))?
        .build()?;

    let fields = schema.query_type().unwrap().fields();
    assert_eq!(
        fields.get("old").unwrap().deprecation_state(),
        DeprecationState::Deprecated("No longer supported"),
    );
    assert_eq!(
        fields.get("older").unwrap().deprecation_state().reason(),
        Some("Use `new`"),
    );
    assert!(!fields.get("new").unwrap().deprecation_state().is_deprecated());

    Ok(())
}

#[test]
fn enum_values_and_arguments_report_deprecation() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, concat!(
            "type Query { search(term: String, legacy: Boolean @deprecated): Int }\n",
            "enum Color { RED GREEN @deprecated(reason: \"Too green\") }\n",
        ))?
        .build()?;

    let color = schema.type_by_name("Color")
        .and_then(GraphQLType::as_enum)
        .unwrap();
    assert!(!color.values().get("RED").unwrap().deprecation_state().is_deprecated());
    assert_eq!(
        color.values().get("GREEN").unwrap().deprecation_state().reason(),
        Some("Too green"),
    );

    let search = schema.query_type().unwrap().fields().get("search").unwrap();
    assert!(search.arguments().get("legacy").unwrap().deprecation_state().is_deprecated());
    assert!(!search.arguments().get("term").unwrap().deprecation_state().is_deprecated());

    Ok(())
}

#[test]
fn specified_by_url_is_surfaced_on_scalars() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, concat!(
            "scalar UUID @specifiedBy(url: \"https://tools.ietf.org/html/rfc4122\")\n",
            "scalar Plain\n",
        ))?
        .build()?;

    let uuid = schema.type_by_name("UUID").and_then(GraphQLType::as_scalar).unwrap();
    assert_eq!(uuid.specified_by_url(), Some("https://tools.ietf.org/html/rfc4122"));
    let plain = schema.type_by_name("Plain").and_then(GraphQLType::as_scalar).unwrap();
    assert_eq!(plain.specified_by_url(), None);

    Ok(())
}

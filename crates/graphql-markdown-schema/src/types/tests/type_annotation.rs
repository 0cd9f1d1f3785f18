use crate::Schema;
use crate::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn field_annotation(schema: &Schema, field_name: &str) -> TypeAnnotation {
    schema.query_type()
        .and_then(|query| query.fields().get(field_name))
        .map(|field| field.type_annotation().clone())
        .unwrap()
}

#[test]
fn display_keeps_list_and_non_null_wrappers() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, concat!(
            "type Query {\n",
            "  a: Color\n",
            "  b: Color!\n",
            "  c: [Color!]!\n",
            "  d: [[Color]!]\n",
            "}\n",
            "enum Color { RED }\n",
        ))?
        .build()?;

    assert_eq!(field_annotation(&schema, "a").to_string(), "Color");
    assert_eq!(field_annotation(&schema, "b").to_string(), "Color!");
    assert_eq!(field_annotation(&schema, "c").to_string(), "[Color!]!");
    assert_eq!(field_annotation(&schema, "d").to_string(), "[[Color]!]");

    Ok(())
}

#[test]
fn innermost_named_type_unwraps_every_wrapper() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, "type Query { d: [[Color!]!] }\nenum Color { RED }")?
        .build()?;

    let annot = field_annotation(&schema, "d");
    assert!(annot.is_list());
    assert!(annot.nullable());
    assert_eq!(annot.innermost_type_name(), "Color");
    assert!(!annot.innermost_named_type_annotation().nullable());
    assert!(matches!(
        annot.innermost_type(&schema),
        Some(GraphQLType::Enum(_)),
    ));

    let TypeAnnotation::List(outer) = &annot else {
        panic!("expected a list annotation");
    };
    let inner = outer.inner_type_annotation();
    assert!(inner.is_list());
    assert!(!inner.nullable());

    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "Color");

    Ok(())
}

use crate::Schema;
use crate::SchemaBuildError;
use crate::Value;
use crate::quote_string;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn default_values_print_as_graphql_literals() -> Result<()> {
    let schema = Schema::builder()
        .load_str(None, concat!(
            "type Query {\n",
            "  search(\n",
            "    term: String = \"cat\"\n",
            "    limit: Int = 10\n",
            "    ratio: Float = 0.5\n",
            "    exact: Boolean = false\n",
            "    color: Color = RED\n",
            "    tags: [String] = [\"a\", \"b\"]\n",
            "    filter: Filter = { name: \"x\", max: 3 }\n",
            "    cursor: String = null\n",
            "  ): Int\n",
            "}\n",
            "enum Color { RED }\n",
            "input Filter { name: String max: Int }\n",
        ))?
        .build()?;

    let args = schema.query_type().unwrap().fields().get("search").unwrap().arguments();
    let default_of = |name: &str| args.get(name).unwrap().default_value().unwrap().to_string();

    assert_eq!(default_of("term"), "\"cat\"");
    assert_eq!(default_of("limit"), "10");
    assert_eq!(default_of("ratio"), "0.5");
    assert_eq!(default_of("exact"), "false");
    assert_eq!(default_of("color"), "RED");
    assert_eq!(default_of("tags"), "[\"a\", \"b\"]");
    assert_eq!(default_of("filter"), "{max: 3, name: \"x\"}");
    assert_eq!(default_of("cursor"), "null");

    assert_eq!(args.get("cursor").unwrap().default_value(), Some(&Value::Null));
    assert_eq!(
        args.get("color").unwrap().default_value(),
        Some(&Value::EnumValue("RED".to_string())),
    );

    Ok(())
}

fn input_default(sdl: &str) -> Result<Value> {
    let schema = Schema::builder()
        .load_str(None, &format!("type Query {{ a: Int }}\n{sdl}"))?
        .build()?;
    let Some(GraphQLType::InputObject(input)) = schema.type_by_name("I") else {
        panic!("input `I` is not defined");
    };
    Ok(input.fields().get("s").unwrap().default_value().unwrap().clone())
}

#[test]
fn string_defaults_print_with_graphql_escapes() -> Result<()> {
    let value = input_default(
        r#"input I { s: String = "bell\u0007 tab\t line\n quote\" slash\\ café" }"#,
    )?;
    assert_eq!(value, Value::String("bell\u{7} tab\t line\n quote\" slash\\ café".to_string()));

    let printed = value.to_string();
    assert_eq!(printed, r#""bell\u0007 tab\t line\n quote\" slash\\ café""#);

    let reparsed = input_default(&format!("input I {{ s: String = {printed} }}"))?;
    assert_eq!(reparsed, value);
    Ok(())
}

#[test]
fn quote_string_uses_short_escapes_where_graphql_has_them() {
    assert_eq!(quote_string("\u{8}\u{c}\r"), r#""\b\f\r""#);
    assert_eq!(quote_string("\u{1f}\u{7f}"), r#""\u001F\u007F""#);
    assert_eq!(quote_string("plain"), "\"plain\"");
}

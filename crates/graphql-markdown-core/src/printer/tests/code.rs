use crate::DeprecatedMode;
use crate::GeneratorConfig;
use crate::introspection::get_schema_map;
use crate::printer::PrintTypeOptions;
use crate::printer::format_default_value;
use crate::printer::print_code;
use crate::printer::tests::find_entity;
use crate::test_utils::ANIMALS_SDL;
use crate::test_utils::build_schema;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_animals_code(name: &str, config: &GeneratorConfig) -> String {
    let schema = build_schema(ANIMALS_SDL);
    let schema_map = get_schema_map(&schema);
    let options = PrintTypeOptions::new(&schema, &schema_map, config);
    let entity = find_entity(&schema_map, name)
        .or_else(|| schema_map.queries.get(name).copied());
    print_code(name, entity, &options)
}

#[test]
fn enum_prints_one_value_per_line() {
    assert_eq!(
        print_animals_code("Color", &GeneratorConfig::default()),
        "enum Color {\n  BROWN\n  BLACK\n  SPOTTED @deprecated\n}",
    );
}

#[test]
fn enum_omits_deprecated_values_in_skip_mode() {
    let mut config = GeneratorConfig::default();
    config.print_type.deprecated = DeprecatedMode::Skip;

    assert_eq!(
        print_animals_code("Color", &config),
        "enum Color {\n  BROWN\n  BLACK\n}",
    );
}

#[test]
fn union_scalar_and_directive_shapes() {
    let config = GeneratorConfig::default();

    assert_eq!(print_animals_code("Animal", &config), "union Animal = Dog | Cat");
    assert_eq!(print_animals_code("Date", &config), "scalar Date");
    assert_eq!(
        print_animals_code("auth", &config),
        "directive @auth(\n  requires: Role = ADMIN\n) on OBJECT | FIELD_DEFINITION",
    );
    assert_eq!(
        print_animals_code("noDoc", &config),
        "directive @noDoc on OBJECT | FIELD_DEFINITION | ARGUMENT_DEFINITION | ENUM_VALUE \
         | INPUT_FIELD_DEFINITION",
    );
}

#[test]
fn object_lists_interfaces_and_fields() {
    assert_eq!(
        print_animals_code("Dog", &GeneratorConfig::default()),
        concat!(
            "type Dog implements Pet, Node {\n",
            "  id: ID!\n",
            "  name: String\n",
            "  color: Color\n",
            "  barks: Boolean @deprecated\n",
            "}",
        ),
    );
}

#[test]
fn skip_directive_removes_fields() {
    let mut config = GeneratorConfig::default();
    config.skip_doc_directive = vec!["noDoc".to_string()];

    assert_eq!(
        print_animals_code("Owner", &config),
        "type Owner {\n  name: String!\n  pets: [Pet]\n}",
    );
}

#[test]
fn input_prints_default_values() {
    assert_eq!(
        print_animals_code("PetFilter", &GeneratorConfig::default()),
        "input PetFilter {\n  color: Color = BLACK\n  names: [String!] = [\"Rex\", \"Tom\"]\n}",
    );
}

#[test]
fn operation_prints_arguments_and_return_type() {
    let config = GeneratorConfig::default();

    assert_eq!(
        print_animals_code("pets", &config),
        "pets(\n  filter: PetFilter\n  first: Int = 10\n): [Pet!]!",
    );
    assert_eq!(
        print_animals_code("owner", &config),
        "owner(\n  name: String = \"Alice\"\n): Owner",
    );
}

#[test]
fn field_arguments_are_indented_inside_the_type() {
    let schema = build_schema(concat!(
        "type Query { box: Box }\n",
        "type Box { items(first: Int = 5, after: String): [String] }\n",
    ));
    let schema_map = get_schema_map(&schema);
    let config = GeneratorConfig::default();
    let options = PrintTypeOptions::new(&schema, &schema_map, &config);

    assert_eq!(
        print_code("Box", find_entity(&schema_map, "Box"), &options),
        "type Box {\n  items(\n    first: Int = 5\n    after: String\n  ): [String]\n}",
    );
}

#[test]
fn string_defaults_use_graphql_escapes() {
    let schema = build_schema(concat!(
        "type Query { a(filter: Filter): Int }\n",
        "input Filter { s: String = \"bell\\u0007 \\\"q\\\" caf\u{e9}\" }\n",
    ));
    let schema_map = get_schema_map(&schema);
    let config = GeneratorConfig::default();
    let options = PrintTypeOptions::new(&schema, &schema_map, &config);

    let code = print_code("Filter", find_entity(&schema_map, "Filter"), &options);
    assert_eq!(code, "input Filter {\n  s: String = \"bell\\u0007 \\\"q\\\" caf\u{e9}\"\n}");

    let reparsed = build_schema(&format!("type Query {{ a: Int }}\n{code}"));
    let reparsed_map = get_schema_map(&reparsed);
    let reparsed_options = PrintTypeOptions::new(&reparsed, &reparsed_map, &config);
    assert_eq!(print_code("Filter", find_entity(&reparsed_map, "Filter"), &reparsed_options), code);
}

#[test]
fn unknown_entities_are_not_supported() {
    let schema = build_schema(ANIMALS_SDL);
    let schema_map = get_schema_map(&schema);
    let config = GeneratorConfig::default();
    let options = PrintTypeOptions::new(&schema, &schema_map, &config);

    assert_eq!(print_code("Query", None, &options), "\"Query\" not supported");
}

#[test]
fn default_values_follow_their_type() -> Result<()> {
    let schema = build_schema(concat!(
        "enum Size { SMALL LARGE }\n",
        "type Query {\n",
        "  search(a: ID = 5, b: Float = 1.5, c: Boolean = true, d: [Int] = [1, 2],\n",
        "         e: String = null, f: [Size] = [SMALL], g: ID = \"abc\", h: Size = LARGE): Int\n",
        "}\n",
    ));
    let query = schema.query_type().ok_or("no query type")?;
    let arguments = query.fields()["search"].arguments();

    let formatted: Vec<String> = arguments.values()
        .map(|arg| match arg.default_value() {
            Some(value) => format_default_value(value, arg.type_annotation(), &schema),
            None => String::new(),
        })
        .collect();
    assert_eq!(formatted, vec![
        "\"5\"", "1.5", "true", "[1, 2]", "null", "[SMALL]", "\"abc\"", "LARGE",
    ]);
    Ok(())
}

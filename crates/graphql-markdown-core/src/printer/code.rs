use crate::SchemaEntity;
use crate::directives::Annotated;
use crate::printer::PrintTypeOptions;
use graphql_markdown_schema::Schema;
use graphql_markdown_schema::Value;
use graphql_markdown_schema::quote_string;
use graphql_markdown_schema::types::DeprecationState;
use graphql_markdown_schema::types::DirectiveDefinition;
use graphql_markdown_schema::types::EnumType;
use graphql_markdown_schema::types::Field;
use graphql_markdown_schema::types::GraphQLType;
use graphql_markdown_schema::types::InputValue;
use graphql_markdown_schema::types::TypeAnnotation;
use graphql_markdown_schema::types::UnionType;
use indexmap::IndexMap;

const INDENT: &str = "  ";

/// Prints the SDL shown in the code section of a document.
///
/// `None` stands for a construct the printer has no rule for and prints as
/// `"<name>" not supported`.
pub fn print_code(
    name: &str,
    entity: Option<SchemaEntity<'_>>,
    options: &PrintTypeOptions<'_>,
) -> String {
    let Some(entity) = entity else {
        return format!("\"{name}\" not supported");
    };

    match entity {
        SchemaEntity::Directive(definition) =>
            print_code_directive(definition, options),

        SchemaEntity::Enum(enum_type) =>
            print_code_enum(enum_type, options),

        SchemaEntity::InputObject(input_type) => {
            let lines = input_type.fields()
                .values()
                .filter(|input_field| is_printed_input_value(input_field, options))
                .map(|input_field| format!("{INDENT}{}", print_input_value(input_field, options)))
                .collect();
            print_code_block("input", input_type.name(), &[], lines)
        },

        SchemaEntity::Interface(iface_type) => print_code_block(
            "interface",
            iface_type.name(),
            &iface_type.interface_names(),
            print_code_fields(iface_type.fields(), options),
        ),

        SchemaEntity::Object(object_type) => print_code_block(
            "type",
            object_type.name(),
            &object_type.interface_names(),
            print_code_fields(object_type.fields(), options),
        ),

        SchemaEntity::Operation { field, .. } =>
            print_code_field(field, 0, options),

        SchemaEntity::Scalar(scalar_type) =>
            format!("scalar {}", scalar_type.name()),

        SchemaEntity::Union(union_type) =>
            print_code_union(union_type, options),
    }
}

/// Prints an argument list, one argument per line, indented to `level`.
/// Returns `""` when no argument is printed.
pub fn print_code_arguments(
    arguments: &IndexMap<String, InputValue>,
    level: usize,
    options: &PrintTypeOptions<'_>,
) -> String {
    let lines: Vec<String> = arguments.values()
        .filter(|arg| is_printed_input_value(arg, options))
        .map(|arg| format!("{}{}", INDENT.repeat(level), print_input_value(arg, options)))
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("(\n{}\n{})", lines.join("\n"), INDENT.repeat(level.saturating_sub(1)))
}

/// Formats a default value the way it would be written for a value of type
/// `annot`: enum values and `Int`/`Float`/`Boolean` literals bare, strings
/// and other scalars quoted, lists bracketed.
pub fn format_default_value(value: &Value, annot: &TypeAnnotation, schema: &Schema) -> String {
    match value {
        Value::Null => "null".to_string(),

        Value::List(items) => {
            let item_annot = match annot {
                TypeAnnotation::List(list_annot) => list_annot.inner_type_annotation(),
                TypeAnnotation::Named(_) => annot,
            };
            let items = items.iter()
                .map(|item| format_default_value(item, item_annot, schema))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{items}]")
        },

        Value::String(str) => quote_string(str),

        value => {
            let is_bare = matches!(annot.innermost_type_name(), "Boolean" | "Float" | "Int")
                || matches!(
                    annot.innermost_type(schema),
                    Some(GraphQLType::Enum(_) | GraphQLType::InputObject(_)),
                );
            if is_bare {
                value.to_string()
            } else {
                format!("\"{value}\"")
            }
        },
    }
}

fn is_printed_input_value(input_value: &InputValue, options: &PrintTypeOptions<'_>) -> bool {
    options.is_printed(input_value, Some(input_value.type_annotation().innermost_type_name()))
}

fn deprecated_suffix(item: &dyn Annotated) -> &'static str {
    if DeprecationState::from(item.annotations()).is_deprecated() {
        " @deprecated"
    } else {
        ""
    }
}

fn print_input_value(input_value: &InputValue, options: &PrintTypeOptions<'_>) -> String {
    let annot = input_value.type_annotation();
    let default = input_value.default_value()
        .map(|value| format!(" = {}", format_default_value(value, annot, options.schema)))
        .unwrap_or_default();
    format!("{}: {annot}{default}{}", input_value.name(), deprecated_suffix(input_value))
}

fn print_code_field(field: &Field, level: usize, options: &PrintTypeOptions<'_>) -> String {
    format!(
        "{}{}: {}{}",
        field.name(),
        print_code_arguments(field.arguments(), level + 1, options),
        field.type_annotation(),
        deprecated_suffix(field),
    )
}

fn print_code_fields(fields: &IndexMap<String, Field>, options: &PrintTypeOptions<'_>) -> Vec<String> {
    fields.values()
        .filter(|field| options.is_printed(*field, Some(field.type_annotation().innermost_type_name())))
        .map(|field| format!("{INDENT}{}", print_code_field(field, 1, options)))
        .collect()
}

fn print_code_block(keyword: &str, name: &str, interfaces: &[&str], lines: Vec<String>) -> String {
    let mut code = format!("{keyword} {name}");
    if !interfaces.is_empty() {
        code.push_str(" implements ");
        code.push_str(&interfaces.join(", "));
    }
    if !lines.is_empty() {
        code.push_str(" {\n");
        code.push_str(&lines.join("\n"));
        code.push_str("\n}");
    }
    code
}

fn print_code_enum(enum_type: &EnumType, options: &PrintTypeOptions<'_>) -> String {
    let lines = enum_type.values()
        .values()
        .filter(|value| options.is_printed(*value, None))
        .map(|value| format!("{INDENT}{}{}", value.name(), deprecated_suffix(value)))
        .collect();
    print_code_block("enum", enum_type.name(), &[], lines)
}

fn print_code_union(union_type: &UnionType, options: &PrintTypeOptions<'_>) -> String {
    let members: Vec<&str> = union_type.member_type_names()
        .into_iter()
        .filter(|member| !options.is_type_excluded(member))
        .collect();
    if members.is_empty() {
        return format!("union {}", union_type.name());
    }
    format!("union {} = {}", union_type.name(), members.join(" | "))
}

fn print_code_directive(definition: &DirectiveDefinition, options: &PrintTypeOptions<'_>) -> String {
    format!(
        "directive @{}{}{} on {}",
        definition.name(),
        print_code_arguments(definition.arguments(), 1, options),
        if definition.repeatable() { " repeatable" } else { "" },
        definition.locations().join(" | "),
    )
}

use crate::DeprecatedMode;
use crate::DirectiveError;
use crate::SchemaEntity;
use crate::directives::Annotated;
use crate::printer::MARKDOWN_EOP;
use crate::printer::PrintTypeOptions;
use crate::printer::badges::print_badge;
use crate::printer::badges::print_item_badges;
use crate::printer::description::print_custom_descriptors;
use crate::printer::description::print_deprecation;
use crate::printer::entity_path;
use crate::printer::to_link;
use crate::relations::RelationMap;
use crate::relations::get_relation_of_field;
use crate::relations::get_relation_of_interface;
use crate::relations::get_relation_of_return;
use crate::relations::get_relation_of_union;
use crate::relations::relation_key;
use graphql_markdown_schema::types::CompositeType;
use graphql_markdown_schema::types::DeprecationState;
use graphql_markdown_schema::types::InputValue;
use graphql_markdown_schema::types::TypeAnnotation;

const BULLET: &str = "<Bullet />";

/// One `####` entry of a section.
struct SectionItem {
    deprecated: bool,
    text: String,
}

/// Prints `### title` followed by `items`, arranged according to the
/// deprecated mode. Sections without items are omitted.
fn print_section(title: &str, items: Vec<SectionItem>, options: &PrintTypeOptions<'_>) -> String {
    let (deprecated, active): (Vec<SectionItem>, Vec<SectionItem>) = match options.deprecated {
        DeprecatedMode::Default => (vec![], items),
        DeprecatedMode::Group => items.into_iter().partition(|item| item.deprecated),
        DeprecatedMode::Skip => (vec![], items.into_iter().filter(|item| !item.deprecated).collect()),
    };
    if active.is_empty() && deprecated.is_empty() {
        return String::new();
    }

    let mut parts = vec![format!("### {title}")];
    parts.extend(active.into_iter().map(|item| item.text));
    if !deprecated.is_empty() {
        let deprecated = deprecated.into_iter()
            .map(|item| item.text)
            .collect::<Vec<_>>()
            .join(MARKDOWN_EOP);
        parts.push(format!(
            "<details>\n<summary>Show deprecated</summary>\n\n{deprecated}\n\n</details>",
        ));
    }
    parts.join(MARKDOWN_EOP)
}

/// `[<code>Parent.<b>name</b></code>](target)`, without the parent when the
/// parent type prefix is turned off.
fn print_item_name(
    parent: Option<&str>,
    name: &str,
    target: &str,
    options: &PrintTypeOptions<'_>,
) -> String {
    let prefix = match parent {
        Some(parent) if options.parent_type_prefix => format!("{parent}."),
        _ => String::new(),
    };
    format!("[<code style={{{{ fontWeight: 'normal' }}}}>{prefix}<b>{name}</b></code>]({target})")
}

/// Deprecation notice, then the description and custom descriptors quoted
/// line by line.
fn print_item_body(
    item: &dyn Annotated,
    description: Option<&str>,
    options: &PrintTypeOptions<'_>,
) -> Result<String, DirectiveError> {
    let mut parts = vec![];
    if let Some(reason) = DeprecationState::from(item.annotations()).reason() {
        parts.push(print_deprecation(reason));
    }

    let mut texts: Vec<String> = description.map(str::to_string).into_iter().collect();
    texts.extend(print_custom_descriptors(item, options)?);
    let quoted = texts.iter()
        .flat_map(|text| text.lines())
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    if !quoted.is_empty() {
        parts.push(quoted);
    }
    Ok(parts.join(MARKDOWN_EOP))
}

fn print_typed_item(
    heading: &str,
    parent: Option<&str>,
    item: &dyn Annotated,
    description: Option<&str>,
    annot: &TypeAnnotation,
    options: &PrintTypeOptions<'_>,
) -> Result<String, DirectiveError> {
    let mut text = format!(
        "{heading} {}{BULLET}{}{}",
        print_item_name(parent, item.annotated_name(), "#", options),
        to_link(&annot.to_string(), annot.innermost_type_name(), options),
        print_item_badges(item, Some(annot), options)?,
    );
    let body = print_item_body(item, description, options)?;
    if !body.is_empty() {
        text.push_str(MARKDOWN_EOP);
        text.push_str(&body);
    }
    Ok(text)
}

fn input_value_items<'v>(
    heading: &str,
    parent: Option<&str>,
    input_values: impl Iterator<Item = &'v InputValue>,
    options: &PrintTypeOptions<'_>,
) -> Result<Vec<SectionItem>, DirectiveError> {
    input_values
        .filter(|input_value| {
            options.is_printed(*input_value, Some(input_value.type_annotation().innermost_type_name()))
        })
        .map(|input_value| -> Result<SectionItem, DirectiveError> {
            Ok(SectionItem {
                deprecated: input_value.deprecation_state().is_deprecated(),
                text: print_typed_item(
                    heading,
                    parent,
                    input_value,
                    input_value.description(),
                    input_value.type_annotation(),
                    options,
                )?,
            })
        })
        .collect()
}

/// Fields of an object or interface, each followed by its arguments.
fn field_items(
    composite: &impl CompositeType,
    options: &PrintTypeOptions<'_>,
) -> Result<Vec<SectionItem>, DirectiveError> {
    let parent = composite.name();
    composite.fields()
        .values()
        .filter(|field| options.is_printed(*field, Some(field.type_annotation().innermost_type_name())))
        .map(|field| -> Result<SectionItem, DirectiveError> {
            let mut parts = vec![print_typed_item(
                "####",
                Some(parent),
                field,
                field.description(),
                field.type_annotation(),
                options,
            )?];
            let arg_parent = format!("{parent}.{}", field.name());
            parts.extend(
                input_value_items("#####", Some(arg_parent.as_str()), field.arguments().values(), options)?
                    .into_iter()
                    .map(|arg_item| arg_item.text),
            );
            Ok(SectionItem {
                deprecated: field.deprecation_state().is_deprecated(),
                text: parts.join(MARKDOWN_EOP),
            })
        })
        .collect()
}

fn print_composite_sections(
    composite: &impl CompositeType,
    options: &PrintTypeOptions<'_>,
) -> Result<Vec<String>, DirectiveError> {
    Ok(vec![
        print_section("Fields", field_items(composite, options)?, options),
        print_section("Interfaces", named_type_items(composite.interface_names(), options), options),
    ])
}

/// A named type listed by link, as in "Interfaces" and "Possible Types".
fn named_type_item(
    parent: Option<&str>,
    type_name: &str,
    options: &PrintTypeOptions<'_>,
) -> Option<SectionItem> {
    let (slot, entity) = options.schema_map.find_type(type_name)?;
    if !options.is_documented(entity) {
        return None;
    }
    let target = entity_path(slot, type_name, options);
    let mut text = format!("#### {}", print_item_name(parent, type_name, &target, options));
    if options.type_badges {
        text.push(' ');
        text.push_str(&print_badge(slot.singular_name()));
    }
    if let Some(description) = entity.description() {
        text.push_str(MARKDOWN_EOP);
        text.push_str(&description.lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"));
    }
    Some(SectionItem {
        deprecated: entity.deprecation_state().is_deprecated(),
        text,
    })
}

fn named_type_items<'n>(
    type_names: impl IntoIterator<Item = &'n str>,
    options: &PrintTypeOptions<'_>,
) -> Vec<SectionItem> {
    type_names.into_iter()
        .filter_map(|type_name| named_type_item(None, type_name, options))
        .collect()
}

/// Kind-specific sections: values, fields, arguments, member and return
/// types, scalar specification.
pub(super) fn print_type_metadata(
    entity: SchemaEntity<'_>,
    options: &PrintTypeOptions<'_>,
) -> Result<String, DirectiveError> {
    let sections = match entity {
        SchemaEntity::Directive(definition) => {
            let parent = format!("@{}", definition.name());
            let args = input_value_items("####", Some(parent.as_str()), definition.arguments().values(), options)?;
            vec![print_section("Arguments", args, options)]
        },

        SchemaEntity::Enum(enum_type) => {
            let mut values = vec![];
            for value in enum_type.values().values() {
                if !options.is_printed(value, None) {
                    continue;
                }
                let mut text = format!(
                    "#### {}{}",
                    print_item_name(Some(enum_type.name()), value.name(), "#", options),
                    print_item_badges(value, None, options)?,
                );
                let body = print_item_body(value, value.description(), options)?;
                if !body.is_empty() {
                    text.push_str(MARKDOWN_EOP);
                    text.push_str(&body);
                }
                values.push(SectionItem {
                    deprecated: value.deprecation_state().is_deprecated(),
                    text,
                });
            }
            vec![print_section("Values", values, options)]
        },

        SchemaEntity::InputObject(input_type) => {
            let fields = input_value_items("####", Some(input_type.name()), input_type.fields().values(), options)?;
            vec![print_section("Fields", fields, options)]
        },

        SchemaEntity::Interface(iface_type) => print_composite_sections(iface_type, options)?,

        SchemaEntity::Object(object_type) => print_composite_sections(object_type, options)?,

        SchemaEntity::Operation { field, .. } => {
            let args = input_value_items("####", Some(field.name()), field.arguments().values(), options)?;
            let return_type_options = PrintTypeOptions {
                parent_type_prefix: false,
                ..*options
            };
            let return_type = named_type_item(
                Some(field.name()),
                field.type_annotation().innermost_type_name(),
                &return_type_options,
            );
            vec![
                print_section("Arguments", args, options),
                print_section("Type", return_type.into_iter().collect(), &return_type_options),
            ]
        },

        SchemaEntity::Scalar(scalar_type) => vec![
            scalar_type.specified_by_url()
                .map(|url| format!("### Specification{MARKDOWN_EOP}[{url}]({url})"))
                .unwrap_or_default(),
        ],

        SchemaEntity::Union(union_type) => vec![print_section(
            "Possible Types",
            named_type_items(union_type.member_type_names(), options),
            options,
        )],
    };

    Ok(sections.into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join(MARKDOWN_EOP))
}

/// Prints one relation section: every related entity that is documented,
/// linked and badged with its category, separated by bullets.
fn print_relation(title: &str, relations: RelationMap<'_>, options: &PrintTypeOptions<'_>) -> String {
    let links: Vec<String> = relations.iter()
        .flat_map(|(slot, entities)| entities.iter().map(move |entity| (*slot, *entity)))
        .filter(|(_, entity)| options.is_documented(*entity))
        .map(|(slot, entity)| {
            let name = relation_key(entity);
            let mut link = format!("[`{name}`]({})", entity_path(slot, name, options));
            if options.type_badges {
                link.push(' ');
                link.push_str(&print_badge(slot.singular_name()));
            }
            link
        })
        .collect();
    if links.is_empty() {
        return String::new();
    }
    format!("### {title}{MARKDOWN_EOP}{}", links.join(BULLET))
}

/// "Returned By", "Member Of", "Implemented By" and "Used By" sections of a
/// named type. Directives and operations have none.
pub(super) fn print_relations(entity: SchemaEntity<'_>, options: &PrintTypeOptions<'_>) -> String {
    if matches!(entity, SchemaEntity::Directive(_) | SchemaEntity::Operation { .. }) {
        return String::new();
    }

    let type_name = entity.name();
    let schema_map = options.schema_map;
    let mut sections = vec![
        print_relation("Returned By", get_relation_of_return(type_name, schema_map), options),
        print_relation("Member Of", get_relation_of_union(type_name, schema_map), options),
    ];
    if let SchemaEntity::Interface(_) = entity {
        sections.push(print_relation(
            "Implemented By",
            get_relation_of_interface(type_name, schema_map),
            options,
        ));
    }
    sections.push(print_relation("Used By", get_relation_of_field(type_name, schema_map), options));

    sections.into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join(MARKDOWN_EOP)
}

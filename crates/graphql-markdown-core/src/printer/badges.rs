use crate::DirectiveError;
use crate::directives::Annotated;
use crate::directives::get_const_directive_map;
use crate::groups::lookup_group;
use crate::printer::PrintTypeOptions;
use graphql_markdown_schema::types::DeprecationState;
use graphql_markdown_schema::types::TypeAnnotation;

pub(super) fn print_badge(text: &str) -> String {
    let text = text.replace('&', "&amp;").replace('"', "&quot;");
    format!("<Badge class=\"badge badge--secondary\" text=\"{text}\"/>")
}

/// Badges following the heading of a field, argument or enum value, each
/// preceded by a space.
///
/// Type badges describe `annot` and the type it names; custom directive tags
/// are printed even when type badges are turned off.
pub(super) fn print_item_badges(
    item: &dyn Annotated,
    annot: Option<&TypeAnnotation>,
    options: &PrintTypeOptions<'_>,
) -> Result<String, DirectiveError> {
    let mut badges: Vec<String> = vec![];

    if options.type_badges {
        if DeprecationState::from(item.annotations()).is_deprecated() {
            badges.push("deprecated".to_string());
        }
        if let Some(annot) = annot {
            if !annot.nullable() {
                badges.push("non-null".to_string());
            }
            if annot.is_list() {
                badges.push("list".to_string());
            }
            let type_name = annot.innermost_type_name();
            if let Some((slot, _)) = options.schema_map.find_type(type_name) {
                badges.push(slot.singular_name().to_string());
                if let Some(group) = lookup_group(options.groups, slot, type_name) {
                    badges.push(group.to_string());
                }
            }
        }
    }
    badges.extend(custom_tags(item, options)?);

    Ok(badges.iter()
        .map(|badge| format!(" {}", print_badge(badge)))
        .collect())
}

/// Output of the `tag` handlers of the custom directives applied to `item`.
fn custom_tags(
    item: &dyn Annotated,
    options: &PrintTypeOptions<'_>,
) -> Result<Vec<String>, DirectiveError> {
    let Some(applied) = options.custom_directives
        .and_then(|custom_directives| get_const_directive_map(item, custom_directives)) else {
        return Ok(vec![]);
    };

    let mut tags = vec![];
    for custom_directive in applied.values() {
        let Some(tag) = custom_directive.tag() else {
            continue;
        };
        let text = tag.apply(custom_directive.definition, item)?;
        if !text.is_empty() {
            tags.push(text);
        }
    }
    Ok(tags)
}

use crate::DirectiveError;
use crate::SchemaEntity;
use crate::directives::Annotated;
use crate::directives::get_const_directive_map;
use crate::printer::MARKDOWN_EOP;
use crate::printer::PrintTypeOptions;

const NO_DESCRIPTION: &str = "No description";

pub(super) fn print_deprecation(reason: &str) -> String {
    format!(":::caution DEPRECATED\n{reason}\n:::")
}

/// Deprecation notice, description and custom directive descriptors of a
/// documented entity.
pub(super) fn print_description(
    entity: SchemaEntity<'_>,
    options: &PrintTypeOptions<'_>,
) -> Result<String, DirectiveError> {
    let mut parts = vec![];
    if let Some(reason) = entity.deprecation_state().reason() {
        parts.push(print_deprecation(reason));
    }
    parts.push(entity.description().unwrap_or(NO_DESCRIPTION).to_string());
    parts.extend(print_custom_descriptors(&entity, options)?);
    Ok(parts.join(MARKDOWN_EOP))
}

/// Output of the `descriptor` handlers of the custom directives applied to
/// `item`, in the order the directives were applied. Empty output is
/// dropped.
pub(super) fn print_custom_descriptors(
    item: &dyn Annotated,
    options: &PrintTypeOptions<'_>,
) -> Result<Vec<String>, DirectiveError> {
    let Some(applied) = options.custom_directives
        .and_then(|custom_directives| get_const_directive_map(item, custom_directives)) else {
        return Ok(vec![]);
    };

    let mut descriptors = vec![];
    for custom_directive in applied.values() {
        let Some(descriptor) = custom_directive.descriptor() else {
            continue;
        };
        let text = descriptor.apply(custom_directive.definition, item)?;
        if !text.is_empty() {
            descriptors.push(text);
        }
    }
    Ok(descriptors)
}

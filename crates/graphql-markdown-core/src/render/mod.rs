use crate::ConfigError;
use crate::GeneratorConfig;
use crate::SchemaEntity;
use crate::SchemaMapSlot;
use crate::directives::get_custom_directives;
use crate::groups::get_groups;
use crate::groups::lookup_group;
use crate::introspection::get_schema_map;
use crate::printer::PrintTypeOptions;
use crate::printer::print_type;
use crate::printer::slugify;
use graphql_markdown_schema::Schema;
use rayon::prelude::*;

/// One generated document, along with where it belongs in the output tree.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedDocument {
    pub body: String,
    pub category: SchemaMapSlot,
    pub group: Option<String>,
    pub name: String,
    pub slug: String,
}

/// Renders a document for every documented entity of `schema`.
///
/// Configuration problems (such as a template naming an argument its
/// directive does not declare) fail the whole run before anything is
/// rendered. An entity whose custom directive handler fails is logged and
/// left out. Documents are ordered by slot, then by schema order.
pub fn render_schema(
    schema: &Schema,
    config: &GeneratorConfig,
) -> Result<Vec<RenderedDocument>, ConfigError> {
    let schema_map = get_schema_map(schema);
    let custom_directives = get_custom_directives(&schema_map, &config.custom_directive)?;
    let groups = config.group_by_directive
        .as_ref()
        .map(|group_by| get_groups(&schema_map, group_by));
    let options = PrintTypeOptions {
        custom_directives: custom_directives.as_ref(),
        groups: groups.as_ref(),
        ..PrintTypeOptions::new(schema, &schema_map, config)
    };

    let entities: Vec<(SchemaMapSlot, SchemaEntity<'_>)> = schema_map.entities()
        .filter(|(_, entity)| options.is_documented(*entity))
        .collect();
    tracing::debug!(
        "rendering {} of {} schema entities",
        entities.len(),
        schema_map.entities().count(),
    );

    let documents: Vec<RenderedDocument> = entities
        .par_iter()
        .filter_map(|(slot, entity)| {
            let name = entity.name();
            match print_type(name, Some(*entity), &options) {
                Ok(body) => Some(RenderedDocument {
                    body,
                    category: *slot,
                    group: lookup_group(options.groups, *slot, name).map(str::to_string),
                    name: name.to_string(),
                    slug: slugify(name),
                }),
                Err(err) => {
                    tracing::warn!("skipping `{name}` ({slot}): {err}");
                    None
                },
            }
        })
        .collect();

    tracing::info!("rendered {} documents", documents.len());
    Ok(documents)
}

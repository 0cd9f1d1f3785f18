//! Renders one [`SchemaEntity`] into a Markdown/MDX document.
//!
//! A document is, in order: frontmatter header, description, fenced GraphQL
//! code block, kind-specific metadata sections and relation sections. Every
//! piece is a pure function of the entity and the [`PrintTypeOptions`].

mod badges;
mod code;
mod description;
mod header;
mod link;
mod section;
mod slug;

pub use code::format_default_value;
pub use code::print_code;
pub use code::print_code_arguments;
pub use header::print_header;
pub use link::entity_path;
pub use link::to_link;
pub use slug::slugify;

use crate::DeprecatedMode;
use crate::GeneratorConfig;
use crate::HeaderOptions;
use crate::Hierarchy;
use crate::PrintError;
use crate::SchemaEntity;
use crate::SchemaMap;
use crate::directives::Annotated;
use crate::directives::CustomDirectiveMap;
use crate::groups::SchemaEntitiesGroupMap;
use graphql_markdown_schema::Schema;
use graphql_markdown_schema::types::DeprecationState;

const MARKDOWN_EOP: &str = "\n\n";

/// Everything the printer consults besides the entity itself.
///
/// Never mutated: a section needing a different setting prints with a copy,
/// e.g. `PrintTypeOptions { parent_type_prefix: false, ..*options }`.
#[derive(Clone, Copy, Debug)]
pub struct PrintTypeOptions<'a> {
    pub base_url: &'a str,
    pub code_section: bool,
    pub custom_directives: Option<&'a CustomDirectiveMap<'a>>,
    pub deprecated: DeprecatedMode,
    pub groups: Option<&'a SchemaEntitiesGroupMap>,
    pub header: HeaderOptions,
    pub hierarchy: Hierarchy,
    pub link_root: &'a str,
    pub only_doc_directive: &'a [String],
    pub parent_type_prefix: bool,
    pub related_type_section: bool,
    pub schema: &'a Schema,
    pub schema_map: &'a SchemaMap<'a>,
    pub skip_doc_directive: &'a [String],
    pub type_badges: bool,
}
impl<'a> PrintTypeOptions<'a> {
    /// Options taken from `config`, with neither groups nor custom
    /// directives attached.
    pub fn new(
        schema: &'a Schema,
        schema_map: &'a SchemaMap<'a>,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            base_url: config.base_url.as_str(),
            code_section: config.print_type.code_section,
            custom_directives: None,
            deprecated: config.print_type.deprecated,
            groups: None,
            header: config.print_type.header,
            hierarchy: config.print_type.hierarchy,
            link_root: config.link_root.as_str(),
            only_doc_directive: config.only_doc_directive.as_slice(),
            parent_type_prefix: config.print_type.parent_type_prefix,
            related_type_section: config.print_type.related_type_section,
            schema,
            schema_map,
            skip_doc_directive: config.skip_doc_directive.as_slice(),
            type_badges: config.print_type.type_badges,
        }
    }

    /// Indicates whether `item` should be left out of the documentation: it
    /// carries a skip directive, or its named type (if any) does.
    pub fn is_excluded(&self, item: &dyn Annotated, type_name: Option<&str>) -> bool {
        let is_skipped = self.skip_doc_directive
            .iter()
            .any(|directive| item.has_annotation(directive));
        is_skipped || type_name.is_some_and(|type_name| self.is_type_excluded(type_name))
    }

    /// Indicates whether a field, argument or enum value appears in the
    /// document of its parent at all.
    pub fn is_printed(&self, item: &dyn Annotated, type_name: Option<&str>) -> bool {
        let deprecation = DeprecationState::from(item.annotations());
        if self.deprecated == DeprecatedMode::Skip && deprecation.is_deprecated() {
            return false;
        }
        !self.is_excluded(item, type_name)
    }

    /// Indicates whether the named type `type_name` is excluded from the
    /// documentation. Unknown names are not.
    pub fn is_type_excluded(&self, type_name: &str) -> bool {
        self.schema.type_by_name(type_name)
            .map(SchemaEntity::from_graphql_type)
            .is_some_and(|type_entity| self.is_excluded(&type_entity, None))
    }

    /// Indicates whether `entity` gets its own document.
    pub fn is_documented(&self, entity: SchemaEntity<'_>) -> bool {
        let type_name = match entity {
            SchemaEntity::Operation { field, .. } =>
                Some(field.type_annotation().innermost_type_name()),
            _ => None,
        };
        if self.is_excluded(&entity, type_name) {
            return false;
        }
        self.only_doc_directive.is_empty()
            || self.only_doc_directive
                .iter()
                .any(|directive| entity.has_annotation(directive))
    }
}

/// Prints the full document of `entity`, or `""` when there is no entity.
///
/// The only failure is a custom directive handler that cannot resolve the
/// directive arguments it needs.
pub fn print_type(
    name: &str,
    entity: Option<SchemaEntity<'_>>,
    options: &PrintTypeOptions<'_>,
) -> Result<String, PrintError> {
    let Some(entity) = entity else {
        return Ok(String::new());
    };

    let wrap_error = |source| PrintError::CustomDirective {
        entity_name: name.to_string(),
        source,
    };

    let mut parts = vec![
        print_header(&slugify(name), name, options),
        description::print_description(entity, options).map_err(wrap_error)?,
    ];
    if options.code_section {
        parts.push(format!("```graphql\n{}\n```", print_code(name, Some(entity), options)));
    }
    parts.push(section::print_type_metadata(entity, options).map_err(wrap_error)?);
    if options.related_type_section {
        parts.push(section::print_relations(entity, options));
    }

    let mut document = parts.into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(MARKDOWN_EOP);
    document.push('\n');
    Ok(document)
}

#[cfg(test)]
mod tests;

mod annotated;
mod handler;

pub use annotated::Annotated;
pub use handler::DirectiveHandler;

use crate::CustomDirectiveConfig;
use crate::ConfigError;
use crate::DirectiveError;
use crate::SchemaEntity;
use crate::SchemaMap;
use graphql_markdown_schema::Value;
use graphql_markdown_schema::types::DirectiveDefinition;
use indexmap::IndexMap;
use serde::Deserialize;

/// Configuration key matching every declared directive.
pub const WILDCARD_DIRECTIVE: &str = "*";

/// Handlers configured for one custom directive (or for the wildcard).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomDirectiveOptions {
    /// Produces extra description text for entities the directive is
    /// applied to.
    pub descriptor: Option<DirectiveHandler>,
    /// Produces a badge label for entities the directive is applied to.
    pub tag: Option<DirectiveHandler>,
}
impl CustomDirectiveOptions {
    fn handlers(&self) -> impl Iterator<Item = &DirectiveHandler> {
        self.descriptor.iter().chain(self.tag.iter())
    }
}

/// A schema directive matched by the custom directive configuration.
#[derive(Clone, Copy, Debug)]
pub struct CustomDirective<'a> {
    pub definition: &'a DirectiveDefinition,
    pub options: &'a CustomDirectiveOptions,
}
impl<'a> CustomDirective<'a> {
    pub fn descriptor(&self) -> Option<&'a DirectiveHandler> {
        self.options.descriptor.as_ref()
    }

    pub fn tag(&self) -> Option<&'a DirectiveHandler> {
        self.options.tag.as_ref()
    }
}

pub type CustomDirectiveMap<'a> = IndexMap<&'a str, CustomDirective<'a>>;

pub fn is_custom_directive(name: &str, config: &CustomDirectiveConfig) -> bool {
    config.contains_key(name) || config.contains_key(WILDCARD_DIRECTIVE)
}

/// The options configured for `name`. An exact entry replaces the wildcard
/// entry as a whole; the two are never merged.
pub fn get_custom_directive_options<'c>(
    name: &str,
    config: &'c CustomDirectiveConfig,
) -> Option<&'c CustomDirectiveOptions> {
    config.get(name).or_else(|| config.get(WILDCARD_DIRECTIVE))
}

/// Matches the directives declared in the schema against `config`.
///
/// Built-in directives (`@deprecated`, `@include`, `@skip`, `@specifiedBy`)
/// are never matched, not even by a wildcard entry, unless the schema
/// redeclares them.
///
/// Returns `Ok(None)` when nothing matched. Template handlers are checked
/// against the arguments of every directive they are attached to, so a
/// misspelled placeholder fails here instead of while rendering.
pub fn get_custom_directives<'a>(
    schema_map: &SchemaMap<'a>,
    config: &'a CustomDirectiveConfig,
) -> Result<Option<CustomDirectiveMap<'a>>, ConfigError> {
    let mut custom_directives = CustomDirectiveMap::new();

    for (name, entity) in schema_map.directives.iter() {
        let SchemaEntity::Directive(definition) = *entity else {
            continue;
        };
        if definition.is_builtin() || !is_custom_directive(name, config) {
            continue;
        }
        let Some(options) = get_custom_directive_options(name, config) else {
            continue;
        };

        for handler in options.handlers() {
            if let Some(argument) = handler.placeholders()
                .find(|arg| !definition.arguments().contains_key(*arg)) {
                return Err(ConfigError::UnknownTemplateArgument {
                    directive_name: definition.name().to_string(),
                    argument: argument.to_string(),
                });
            }
        }

        custom_directives.insert(*name, CustomDirective { definition, options });
    }

    Ok((!custom_directives.is_empty()).then_some(custom_directives))
}

/// Restricts `custom_directives` to the directives applied to `entity`, in
/// the order they were applied. Returns `None` when none are.
pub fn get_const_directive_map<'a>(
    entity: &(impl Annotated + ?Sized),
    custom_directives: &CustomDirectiveMap<'a>,
) -> Option<CustomDirectiveMap<'a>> {
    let mut applied = CustomDirectiveMap::new();
    for annot in entity.annotations() {
        if let Some((name, custom_directive)) =
            custom_directives.get_key_value(annot.directive_name()) {
            applied.entry(*name).or_insert(*custom_directive);
        }
    }
    (!applied.is_empty()).then_some(applied)
}

/// Argument values of the first application of `definition` on `entity`, in
/// declaration order. Arguments left out fall back to their declared
/// default; arguments without either are absent.
pub fn get_type_directive_values(
    definition: &DirectiveDefinition,
    entity: &(impl Annotated + ?Sized),
) -> Result<IndexMap<String, Value>, DirectiveError> {
    let annot = entity.annotations()
        .iter()
        .find(|annot| annot.directive_name() == definition.name())
        .ok_or_else(|| DirectiveError::DirectiveNotApplied {
            directive_name: definition.name().to_string(),
            entity_name: entity.annotated_name().to_string(),
        })?;

    let mut values = IndexMap::new();
    for (arg_name, arg_def) in definition.arguments() {
        if let Some(value) = annot.argument(arg_name).or(arg_def.default_value()) {
            values.insert(arg_name.to_string(), value.clone());
        }
    }
    for (arg_name, value) in annot.arguments() {
        if !values.contains_key(arg_name) {
            values.insert(arg_name.to_string(), value.clone());
        }
    }

    Ok(values)
}

pub fn get_type_directive_arg_value(
    definition: &DirectiveDefinition,
    entity: &(impl Annotated + ?Sized),
    argument: &str,
) -> Result<Value, DirectiveError> {
    get_type_directive_values(definition, entity)?
        .shift_remove(argument)
        .ok_or_else(|| DirectiveError::ArgumentNotFound {
            directive_name: definition.name().to_string(),
            argument: argument.to_string(),
        })
}

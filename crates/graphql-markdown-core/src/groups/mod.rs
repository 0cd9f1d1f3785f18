use crate::ConfigError;
use crate::SchemaEntity;
use crate::SchemaMap;
use crate::SchemaMapSlot;
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::sync::OnceLock;

/// Group assigned to entities that carry no group directive.
pub const DEFAULT_GROUP: &str = "Miscellaneous";

/// Group names per slot, keyed by entity name.
pub type SchemaEntitiesGroupMap = IndexMap<SchemaMapSlot, IndexMap<String, String>>;

fn group_by_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^@(?P<directive>\w+)\((?P<field>\w+)(?:\|=(?P<fallback>\w+))?\)")
            .expect("group directive pattern is valid")
    })
}

/// Which directive argument assigns an entity to a documentation group.
///
/// Deserializes either from the compact `@directive(field|=fallback)` string
/// or from a table with the same three keys.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "GroupByDirectiveRepr")]
pub struct GroupByDirectiveOptions {
    pub directive: String,
    pub field: String,
    pub fallback: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupByDirectiveRepr {
    Compact(String),
    Table {
        directive: String,
        field: String,
        #[serde(default = "default_fallback")]
        fallback: String,
    },
}

fn default_fallback() -> String {
    DEFAULT_GROUP.to_string()
}

impl std::convert::TryFrom<GroupByDirectiveRepr> for GroupByDirectiveOptions {
    type Error = ConfigError;

    fn try_from(value: GroupByDirectiveRepr) -> Result<Self, Self::Error> {
        match value {
            GroupByDirectiveRepr::Compact(option) => parse_group_by_option(&option),
            GroupByDirectiveRepr::Table { directive, field, fallback } => Ok(Self {
                directive: directive.trim_start_matches('@').to_string(),
                field,
                fallback,
            }),
        }
    }
}

/// Parses `@directive(field)` or `@directive(field|=fallback)`.
///
/// The pattern must match from the start of `option`; anything else is a
/// [`ConfigError::InvalidGroupByDirective`].
pub fn parse_group_by_option(option: &str) -> Result<GroupByDirectiveOptions, ConfigError> {
    let captures = group_by_pattern()
        .captures(option)
        .ok_or_else(|| ConfigError::InvalidGroupByDirective(option.to_string()))?;

    let capture = |name: &str| captures.name(name).map(|m| m.as_str().to_string());
    match (capture("directive"), capture("field")) {
        (Some(directive), Some(field)) => Ok(GroupByDirectiveOptions {
            directive,
            field,
            fallback: capture("fallback").unwrap_or_else(default_fallback),
        }),
        _ => Err(ConfigError::InvalidGroupByDirective(option.to_string())),
    }
}

/// Assigns a group to every entity of every slot of `schema_map`.
pub fn get_groups(
    schema_map: &SchemaMap<'_>,
    options: &GroupByDirectiveOptions,
) -> SchemaEntitiesGroupMap {
    schema_map.iter()
        .map(|(slot, entries)| {
            let groups = entries.iter()
                .map(|(name, entity)| (name.to_string(), get_group_name(*entity, options)))
                .collect();
            (slot, groups)
        })
        .collect()
}

/// The group of `entity`: the string value of `options.field` on the first
/// application of `options.directive`, else `options.fallback`.
///
/// Only the first application is consulted. Built-in entities have no
/// declaration to carry a directive and always get the fallback.
pub fn get_group_name(entity: SchemaEntity<'_>, options: &GroupByDirectiveOptions) -> String {
    if !entity.def_location().is_declared() {
        return options.fallback.to_owned();
    }

    entity.directives()
        .iter()
        .find(|annot| annot.directive_name() == options.directive)
        .and_then(|annot| annot.argument(options.field.as_str()))
        .and_then(|value| value.as_str())
        .map(|group| group.to_string())
        .unwrap_or_else(|| options.fallback.to_owned())
}

/// Looks up the group assigned to `name` in `slot`, if grouping is enabled.
pub fn lookup_group<'g>(
    groups: Option<&'g SchemaEntitiesGroupMap>,
    slot: SchemaMapSlot,
    name: &str,
) -> Option<&'g str> {
    groups
        .and_then(|groups| groups.get(&slot))
        .and_then(|slot_groups| slot_groups.get(name))
        .map(|group| group.as_str())
}

#[cfg(test)]
mod tests;

use crate::directives::CustomDirectiveOptions;
use crate::groups::GroupByDirectiveOptions;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;

/// Custom directive handlers keyed by directive name (without `@`) or by
/// [`WILDCARD_DIRECTIVE`](crate::directives::WILDCARD_DIRECTIVE).
pub type CustomDirectiveConfig = IndexMap<String, CustomDirectiveOptions>;

/// How deprecated fields, arguments and enum values are printed.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DeprecatedMode {
    /// Inline, with a `deprecated` badge.
    #[default]
    Default,
    /// In a collapsible block after the other items of the section.
    Group,
    /// Omitted entirely.
    Skip,
}

/// Folder layout that links are resolved against.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Hierarchy {
    /// `operations/` and `types/` folders, then groups, then categories.
    #[default]
    Api,
    /// Groups, then categories.
    Entity,
    /// Every document directly under the base URL.
    Flat,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderOptions {
    pub pagination: bool,
    pub toc: bool,
}
impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            pagination: true,
            toc: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PrintTypeConfig {
    pub code_section: bool,
    pub deprecated: DeprecatedMode,
    pub header: HeaderOptions,
    pub hierarchy: Hierarchy,
    pub parent_type_prefix: bool,
    pub related_type_section: bool,
    pub type_badges: bool,
}
impl Default for PrintTypeConfig {
    fn default() -> Self {
        Self {
            code_section: true,
            deprecated: DeprecatedMode::default(),
            header: HeaderOptions::default(),
            hierarchy: Hierarchy::default(),
            parent_type_prefix: true,
            related_type_section: true,
            type_badges: true,
        }
    }
}

/// Everything the generator reads from its configuration file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub custom_directive: CustomDirectiveConfig,
    pub group_by_directive: Option<GroupByDirectiveOptions>,
    pub link_root: String,
    #[serde(deserialize_with = "directive_names")]
    pub only_doc_directive: Vec<String>,
    pub print_type: PrintTypeConfig,
    #[serde(deserialize_with = "directive_names")]
    pub skip_doc_directive: Vec<String>,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "schema".to_string(),
            custom_directive: CustomDirectiveConfig::new(),
            group_by_directive: None,
            link_root: "/".to_string(),
            only_doc_directive: vec![],
            print_type: PrintTypeConfig::default(),
            skip_doc_directive: vec![],
        }
    }
}

/// Accepts a single directive name or a list of them, with or without the
/// leading `@`.
fn directive_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let names = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    };
    Ok(names.into_iter()
        .map(|name| name.trim_start_matches('@').to_string())
        .collect())
}

#[cfg(test)]
mod tests;

use crate::DeprecatedMode;
use crate::GeneratorConfig;
use crate::Hierarchy;
use crate::directives::DirectiveHandler;
use crate::groups::DEFAULT_GROUP;
use crate::groups::GroupByDirectiveOptions;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn empty_config_uses_defaults() -> Result<()> {
    let config: GeneratorConfig = toml::from_str("")?;

    assert_eq!(config.base_url, "schema");
    assert_eq!(config.link_root, "/");
    assert_eq!(config.group_by_directive, None);
    assert!(config.custom_directive.is_empty());
    assert!(config.skip_doc_directive.is_empty());
    assert_eq!(config.print_type.deprecated, DeprecatedMode::Default);
    assert_eq!(config.print_type.hierarchy, Hierarchy::Api);
    assert!(config.print_type.code_section);
    assert!(config.print_type.header.toc);
    Ok(())
}

#[test]
fn full_config_is_read() -> Result<()> {
    let config: GeneratorConfig = toml::from_str(concat!(
        "link_root = \"/docs\"\n",
        "base_url = \"api\"\n",
        "group_by_directive = \"@doc(category)\"\n",
        "skip_doc_directive = [\"@noDoc\", \"internal\"]\n",
        "only_doc_directive = \"public\"\n",
        "\n",
        "[print_type]\n",
        "deprecated = \"group\"\n",
        "hierarchy = \"flat\"\n",
        "type_badges = false\n",
        "\n",
        "[print_type.header]\n",
        "pagination = false\n",
        "\n",
        "[custom_directive.auth]\n",
        "tag = \"{requires}\"\n",
    ))?;

    assert_eq!(config.link_root, "/docs");
    assert_eq!(config.base_url, "api");
    assert_eq!(config.group_by_directive, Some(GroupByDirectiveOptions {
        directive: "doc".to_string(),
        field: "category".to_string(),
        fallback: DEFAULT_GROUP.to_string(),
    }));
    assert_eq!(config.skip_doc_directive, vec!["noDoc", "internal"]);
    assert_eq!(config.only_doc_directive, vec!["public"]);
    assert_eq!(config.print_type.deprecated, DeprecatedMode::Group);
    assert_eq!(config.print_type.hierarchy, Hierarchy::Flat);
    assert!(!config.print_type.type_badges);
    assert!(config.print_type.parent_type_prefix);
    assert!(!config.print_type.header.pagination);
    assert!(config.print_type.header.toc);

    let auth = config.custom_directive.get("auth").ok_or("auth is configured")?;
    assert!(auth.descriptor.is_none());
    assert!(matches!(&auth.tag, Some(DirectiveHandler::Template(tag)) if tag == "{requires}"));
    Ok(())
}

#[test]
fn group_by_directive_accepts_a_table() -> Result<()> {
    let config: GeneratorConfig = toml::from_str(concat!(
        "[group_by_directive]\n",
        "directive = \"@doc\"\n",
        "field = \"category\"\n",
        "fallback = \"Other\"\n",
    ))?;

    assert_eq!(config.group_by_directive, Some(GroupByDirectiveOptions {
        directive: "doc".to_string(),
        field: "category".to_string(),
        fallback: "Other".to_string(),
    }));
    Ok(())
}

#[test]
fn invalid_group_by_directive_is_rejected() {
    let result = toml::from_str::<GeneratorConfig>("group_by_directive = \"doc(category)\"");
    assert!(result.is_err());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<GeneratorConfig>("groupByDirective = \"@doc(category)\"").is_err());
    assert!(toml::from_str::<GeneratorConfig>("[print_type]\ntypeBadges = false\n").is_err());
    assert!(toml::from_str::<GeneratorConfig>("[print_type.header]\ntoc_depth = 2\n").is_err());
    assert!(toml::from_str::<GeneratorConfig>("[custom_directive.auth]\ntags = \"x\"\n").is_err());
}

use crate::ConfigError;
use crate::groups::DEFAULT_GROUP;
use crate::groups::GroupByDirectiveOptions;
use crate::groups::parse_group_by_option;

type Result<T> = std::result::Result<T, ConfigError>;

#[test]
fn parses_directive_field_and_fallback() -> Result<()> {
    assert_eq!(parse_group_by_option("@doc(category|=misc)")?, GroupByDirectiveOptions {
        directive: "doc".to_string(),
        field: "category".to_string(),
        fallback: "misc".to_string(),
    });

    Ok(())
}

#[test]
fn fallback_defaults_to_miscellaneous() -> Result<()> {
    let options = parse_group_by_option("@group(name)")?;
    assert_eq!(options.directive, "group");
    assert_eq!(options.field, "name");
    assert_eq!(options.fallback, DEFAULT_GROUP);
    assert_eq!(options.fallback, "Miscellaneous");

    Ok(())
}

#[test]
fn malformed_options_are_rejected() {
    for option in ["doc(category)", "@doc", "@doc()", "@doc(category|misc)", " @doc(category)", ""] {
        assert_eq!(
            parse_group_by_option(option),
            Err(ConfigError::InvalidGroupByDirective(option.to_string())),
            "{option:?} should not parse",
        );
    }
}

#[test]
fn deserializes_from_compact_string_or_table() {
    #[derive(serde::Deserialize)]
    struct Config {
        group_by_directive: GroupByDirectiveOptions,
    }

    let compact: Config = toml::from_str("group_by_directive = \"@doc(category|=Common)\"").unwrap();
    assert_eq!(compact.group_by_directive.fallback, "Common");

    let table: Config = toml::from_str(concat!(
        "[group_by_directive]\n",
        "directive = \"@doc\"\n",
        "field = \"category\"\n",
    )).unwrap();
    assert_eq!(table.group_by_directive, GroupByDirectiveOptions {
        directive: "doc".to_string(),
        field: "category".to_string(),
        fallback: DEFAULT_GROUP.to_string(),
    });

    let invalid = toml::from_str::<Config>("group_by_directive = \"doc(category)\"");
    assert!(invalid.is_err());
}

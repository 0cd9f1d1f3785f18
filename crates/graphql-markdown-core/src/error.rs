use thiserror::Error;

/// Problems with the generator configuration. These are reported before any
/// document is rendered and abort the run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "Invalid `group_by_directive` option {0:?}: expected \
        `@directive(field)` or `@directive(field|=fallback)`"
    )]
    InvalidGroupByDirective(String),

    #[error(
        "The template configured for `@{directive_name}` references \
        `{{{argument}}}`, but the directive declares no such argument"
    )]
    UnknownTemplateArgument {
        directive_name: String,
        argument: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveError {
    #[error("`@{directive_name}` has no value for argument `{argument}`")]
    ArgumentNotFound {
        directive_name: String,
        argument: String,
    },

    #[error("`@{directive_name}` is not applied to `{entity_name}`")]
    DirectiveNotApplied {
        directive_name: String,
        entity_name: String,
    },
}

/// Failure to render a single entity. The render loop logs these and moves on
/// to the next entity.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrintError {
    #[error("Failed to print `{entity_name}`: {source}")]
    CustomDirective {
        entity_name: String,
        source: DirectiveError,
    },
}

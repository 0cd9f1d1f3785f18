use crate::DirectiveError;
use crate::directives::Annotated;
use crate::directives::get_type_directive_arg_value;
use graphql_markdown_schema::Value;
use graphql_markdown_schema::types::DirectiveDefinition;
use regex::Regex;
use serde::Deserialize;
use serde::Deserializer;
use std::sync::Arc;
use std::sync::OnceLock;

type HandlerFn = dyn Fn(&DirectiveDefinition, &dyn Annotated) -> Result<String, DirectiveError>
    + Send
    + Sync;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid")
    })
}

/// Produces text for an entity a custom directive is applied to.
///
/// Configuration files can only express [`DirectiveHandler::Template`]s:
/// strings whose `{argName}` placeholders are replaced with the value of that
/// directive argument.
#[derive(Clone)]
pub enum DirectiveHandler {
    Custom(Arc<HandlerFn>),
    Template(String),
}
impl DirectiveHandler {
    pub fn custom<F>(handler: F) -> Self
    where
        F: Fn(&DirectiveDefinition, &dyn Annotated) -> Result<String, DirectiveError>
            + Send
            + Sync
            + 'static,
    {
        Self::Custom(Arc::new(handler))
    }

    pub fn apply(
        &self,
        definition: &DirectiveDefinition,
        entity: &dyn Annotated,
    ) -> Result<String, DirectiveError> {
        match self {
            Self::Custom(handler) => handler(definition, entity),
            Self::Template(template) => {
                let mut output = String::with_capacity(template.len());
                let mut last_end = 0;
                for captures in placeholder_pattern().captures_iter(template) {
                    let (Some(placeholder), Some(argument)) =
                        (captures.get(0), captures.get(1)) else {
                        continue;
                    };
                    let value = get_type_directive_arg_value(
                        definition,
                        entity,
                        argument.as_str(),
                    )?;
                    output.push_str(&template[last_end..placeholder.start()]);
                    match value {
                        Value::String(value) => output.push_str(&value),
                        value => output.push_str(&value.to_string()),
                    }
                    last_end = placeholder.end();
                }
                output.push_str(&template[last_end..]);
                Ok(output)
            },
        }
    }

    /// Argument names referenced by a template. Custom handlers reference
    /// none that can be checked up front.
    pub(crate) fn placeholders(&self) -> impl Iterator<Item = &str> {
        let template = match self {
            Self::Custom(_) => "",
            Self::Template(template) => template.as_str(),
        };
        placeholder_pattern()
            .captures_iter(template)
            .filter_map(|captures| captures.get(1))
            .map(|argument| argument.as_str())
    }
}
impl std::fmt::Debug for DirectiveHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
        }
    }
}
impl<'de> Deserialize<'de> for DirectiveHandler {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Template)
    }
}

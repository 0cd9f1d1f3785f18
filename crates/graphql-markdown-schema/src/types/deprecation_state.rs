use crate::DirectiveAnnotation;

/// Reason reported for a `@deprecated` annotation that does not pass an
/// explicit `reason` argument. Matches the default value declared by the
/// built-in `@deprecated` directive.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => Some(reason),
            Self::NotDeprecated => None,
        }
    }
}
impl<'a> std::convert::From<&'a [DirectiveAnnotation]> for DeprecationState<'a> {
    fn from(value: &'a [DirectiveAnnotation]) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.directive_name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => DeprecationState::Deprecated(
                directive_annot.argument("reason")
                    .and_then(|reason| reason.as_str())
                    .unwrap_or(DEFAULT_DEPRECATION_REASON),
            ),
            None => DeprecationState::NotDeprecated,
        }
    }
}
impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(value: &'a Vec<DirectiveAnnotation>) -> DeprecationState<'a> {
        value.as_slice().into()
    }
}

use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;

/// A [scalar type](https://spec.graphql.org/October2021/#sec-Scalars),
/// custom or built in.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// `Boolean`, `Float`, `ID`, `Int` and `String` are predefined and have no
    /// location in any schema file.
    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `url` argument of `@specifiedBy`, if the scalar carries one.
    pub fn specified_by_url(&self) -> Option<&str> {
        let annot = self.directives
            .iter()
            .find(|annot| annot.directive_name() == "specifiedBy")?;
        annot.argument("url")?.as_str()
    }
}

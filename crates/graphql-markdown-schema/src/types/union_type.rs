use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;

/// A [union type](https://spec.graphql.org/October2021/#sec-Unions).
///
/// Members are kept by name in declaration order, followed by members added
/// through `extend union` in load order. A member name is not guaranteed to
/// resolve to an object type of the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
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

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|member| member == type_name)
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

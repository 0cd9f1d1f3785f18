use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum in declaration order. Values added by type
    /// extensions follow the values of the original definition.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) enum_type_name: String,
    pub(crate) name: String,
}
impl EnumValue {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        enum_type_name: &str,
        value: &ast::schema::EnumValue,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                value.position,
            ),
            description: value.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(&value.directives),
            enum_type_name: enum_type_name.to_string(),
            name: value.name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`EnumValue`],
    /// ordered the same as they were written on the value definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The name of the [`EnumType`] this value belongs to.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

use crate::ast;
use crate::loc;
use crate::types::InputValue;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives),
/// either declared in a loaded schema document or built into GraphQL
/// (`@include`, `@skip`, `@deprecated`, `@specifiedBy`).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) arguments: IndexMap<String, InputValue>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::DirectiveDefinition,
    ) -> Self {
        Self {
            arguments: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                InputValue::from_ast(file_path, input_val),
            )).collect(),
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                def.position,
            ),
            description: def.description.to_owned(),
            locations: def.locations.iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name.to_string(),
            repeatable: def.repeatable,
        }
    }

    /// The arguments declared by this directive, in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates whether this directive is one of GraphQL's built-in
    /// directives rather than one declared in a loaded document.
    pub fn is_builtin(&self) -> bool {
        !self.def_location.is_declared()
    }

    /// The locations this directive may be applied to (e.g. `FIELD_DEFINITION`),
    /// in declaration order.
    pub fn locations(&self) -> Vec<&str> {
        self.locations.iter().map(|location| location.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }
}

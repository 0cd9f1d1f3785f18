use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::Value;
use std::path::Path;

/// Represents an argument (of a field or directive) or an input field (of an
/// input object type). GraphQL models both with the same `InputValue`
/// definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputValue {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        InputValue {
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                input_val.position,
            ),
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            description: input_val.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(&input_val.directives),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The [`DeprecationState`] of this [`InputValue`] as indicated by the
    /// presence of a `@deprecated` annotation.
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

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
///
/// Fields of the root operation types are the schema's queries, mutations
/// and subscriptions.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) arguments: IndexMap<String, InputValue>,
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) parent_type_name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        parent_type_name: &str,
        field: &ast::schema::Field,
    ) -> Self {
        Field {
            arguments: field.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                InputValue::from_ast(file_path, input_val),
            )).collect(),
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                field.position,
            ),
            description: field.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(&field.directives),
            name: field.name.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    /// The arguments accepted by this field, in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`Field`] as indicated by the
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

    /// The name of the object or interface type declaring this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Whether this field's type or one of its arguments' types unwraps to
    /// `type_name`.
    pub fn references_type(&self, type_name: &str) -> bool {
        self.type_annotation.innermost_type_name() == type_name
            || self.arguments.values().any(|arg| {
                arg.type_annotation().innermost_type_name() == type_name
            })
    }
}

mod composite_type;
mod deprecation_state;
mod directive_definition;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_value;
mod interface_type;
mod object_or_interface_type_data;
mod object_type;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use composite_type::CompositeType;
pub use deprecation_state::DeprecationState;
pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;

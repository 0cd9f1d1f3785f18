use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named GraphQL type defined within some
/// [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self { Some(type_) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self { Some(type_) } else { None }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            GraphQLType::Enum(t) => t.def_location(),
            GraphQLType::InputObject(t) => t.def_location(),
            GraphQLType::Interface(t) => t.def_location(),
            GraphQLType::Object(t) => t.def_location(),
            GraphQLType::Scalar(t) => t.def_location(),
            GraphQLType::Union(t) => t.def_location(),
        }
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives().into()
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        match self {
            GraphQLType::Enum(t) => t.directives(),
            GraphQLType::InputObject(t) => t.directives(),
            GraphQLType::Interface(t) => t.directives(),
            GraphQLType::Object(t) => t.directives(),
            GraphQLType::Scalar(t) => t.directives(),
            GraphQLType::Union(t) => t.directives(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }
}

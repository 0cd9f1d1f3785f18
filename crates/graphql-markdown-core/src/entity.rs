use graphql_markdown_schema::DirectiveAnnotation;
use graphql_markdown_schema::loc;
use graphql_markdown_schema::schema::OperationKind;
use graphql_markdown_schema::types::DeprecationState;
use graphql_markdown_schema::types::DirectiveDefinition;
use graphql_markdown_schema::types::EnumType;
use graphql_markdown_schema::types::Field;
use graphql_markdown_schema::types::GraphQLType;
use graphql_markdown_schema::types::InputObjectType;
use graphql_markdown_schema::types::InterfaceType;
use graphql_markdown_schema::types::ObjectType;
use graphql_markdown_schema::types::ScalarType;
use graphql_markdown_schema::types::UnionType;

/// Any schema construct that gets its own document: a named type, a directive
/// definition, or a field of one of the root operation types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SchemaEntity<'a> {
    Directive(&'a DirectiveDefinition),
    Enum(&'a EnumType),
    InputObject(&'a InputObjectType),
    Interface(&'a InterfaceType),
    Object(&'a ObjectType),
    Operation {
        kind: OperationKind,
        field: &'a Field,
    },
    Scalar(&'a ScalarType),
    Union(&'a UnionType),
}
impl<'a> SchemaEntity<'a> {
    pub fn def_location(&self) -> &'a loc::SchemaDefLocation {
        match *self {
            Self::Directive(def) => def.def_location(),
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Operation { field, .. } => field.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// Directive definitions cannot carry `@deprecated`, so they always report
    /// [`DeprecationState::NotDeprecated`].
    pub fn deprecation_state(&self) -> DeprecationState<'a> {
        match *self {
            Self::Directive(_) => DeprecationState::NotDeprecated,
            _ => self.directives().into(),
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match *self {
            Self::Directive(def) => def.description(),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Operation { field, .. } => field.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Directive annotations applied to this entity, in the order they were
    /// written. Always empty for directive definitions.
    pub fn directives(&self) -> &'a [DirectiveAnnotation] {
        match *self {
            Self::Directive(_) => &[],
            Self::Enum(t) => t.directives().as_slice(),
            Self::InputObject(t) => t.directives().as_slice(),
            Self::Interface(t) => t.directives().as_slice(),
            Self::Object(t) => t.directives().as_slice(),
            Self::Operation { field, .. } => field.directives().as_slice(),
            Self::Scalar(t) => t.directives().as_slice(),
            Self::Union(t) => t.directives().as_slice(),
        }
    }

    pub fn from_graphql_type(type_: &'a GraphQLType) -> Self {
        match type_ {
            GraphQLType::Enum(t) => Self::Enum(t),
            GraphQLType::InputObject(t) => Self::InputObject(t),
            GraphQLType::Interface(t) => Self::Interface(t),
            GraphQLType::Object(t) => Self::Object(t),
            GraphQLType::Scalar(t) => Self::Scalar(t),
            GraphQLType::Union(t) => Self::Union(t),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Directive(def) => def.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Operation { field, .. } => field.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// The [`SchemaMap`](crate::SchemaMap) slot this entity is filed under.
    pub fn slot(&self) -> SchemaMapSlot {
        match self {
            Self::Directive(_) => SchemaMapSlot::Directives,
            Self::Enum(_) => SchemaMapSlot::Enums,
            Self::InputObject(_) => SchemaMapSlot::Inputs,
            Self::Interface(_) => SchemaMapSlot::Interfaces,
            Self::Object(_) => SchemaMapSlot::Objects,
            Self::Operation { kind, .. } => SchemaMapSlot::from(*kind),
            Self::Scalar(_) => SchemaMapSlot::Scalars,
            Self::Union(_) => SchemaMapSlot::Unions,
        }
    }
}

/// The ten categories partitioning a [`SchemaMap`](crate::SchemaMap).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SchemaMapSlot {
    Queries,
    Mutations,
    Subscriptions,
    Directives,
    Objects,
    Unions,
    Interfaces,
    Enums,
    Inputs,
    Scalars,
}
impl SchemaMapSlot {
    pub const ALL: [SchemaMapSlot; 10] = [
        SchemaMapSlot::Queries,
        SchemaMapSlot::Mutations,
        SchemaMapSlot::Subscriptions,
        SchemaMapSlot::Directives,
        SchemaMapSlot::Objects,
        SchemaMapSlot::Unions,
        SchemaMapSlot::Interfaces,
        SchemaMapSlot::Enums,
        SchemaMapSlot::Inputs,
        SchemaMapSlot::Scalars,
    ];

    /// Slots a type reference can resolve to, in lookup order.
    pub const TYPES: [SchemaMapSlot; 7] = [
        SchemaMapSlot::Enums,
        SchemaMapSlot::Unions,
        SchemaMapSlot::Interfaces,
        SchemaMapSlot::Objects,
        SchemaMapSlot::Inputs,
        SchemaMapSlot::Scalars,
        SchemaMapSlot::Directives,
    ];

    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Queries | Self::Mutations | Self::Subscriptions)
    }

    /// The stable slot name, also used as the document category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Queries => "queries",
            Self::Mutations => "mutations",
            Self::Subscriptions => "subscriptions",
            Self::Directives => "directives",
            Self::Objects => "objects",
            Self::Unions => "unions",
            Self::Interfaces => "interfaces",
            Self::Enums => "enums",
            Self::Inputs => "inputs",
            Self::Scalars => "scalars",
        }
    }

    /// Singular form of [`Self::name`], as shown on category badges.
    pub fn singular_name(&self) -> &'static str {
        match self {
            Self::Queries => "query",
            Self::Mutations => "mutation",
            Self::Subscriptions => "subscription",
            Self::Directives => "directive",
            Self::Objects => "object",
            Self::Unions => "union",
            Self::Interfaces => "interface",
            Self::Enums => "enum",
            Self::Inputs => "input",
            Self::Scalars => "scalar",
        }
    }
}
impl std::convert::From<OperationKind> for SchemaMapSlot {
    fn from(value: OperationKind) -> Self {
        match value {
            OperationKind::Query => Self::Queries,
            OperationKind::Mutation => Self::Mutations,
            OperationKind::Subscription => Self::Subscriptions,
        }
    }
}
impl std::fmt::Display for SchemaMapSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

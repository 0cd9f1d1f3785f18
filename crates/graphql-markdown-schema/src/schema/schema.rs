use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The three kinds of root operation a schema may define.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// The default root type name GraphQL assumes when a schema has no
    /// `schema { ... }` block.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }

    /// The lower-case operation keyword (`query`, `mutation`, `subscription`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

/// Represents a fully built and immutable GraphQL schema.
///
/// Both the type map and the directive map preserve insertion order: types
/// and directives declared in loaded documents come first, in the order they
/// were declared, followed by whatever GraphQL defines implicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns every directive definition known to this [`Schema`].
    ///
    /// [^note] This map includes both directives declared in loaded documents
    /// and the built-in directives (`@include`, `@skip`, `@deprecated`,
    /// `@specifiedBy`), the latter appended after the declared ones.
    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    /// Returns this [`Schema`]'s Mutation[^note] root operation type (if one
    /// was defined).
    ///
    /// [^note] Prefer this over looking for an [`ObjectType`] named
    /// `"Mutation"`: a `schema { mutation: ... }` block may name a different
    /// type.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    /// Returns this [`Schema`]'s Query root operation type (if one was
    /// defined).
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
    }

    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        self.root_operation_type_name(kind)
            .and_then(|type_name| self.types.get(type_name))
            .and_then(|type_| type_.as_object())
    }

    /// The name of the root type for the given operation kind, as resolved
    /// from the schema definition (or from GraphQL's default names).
    pub fn root_operation_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }

    pub fn type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns every named type of this [`Schema`], keyed by name.
    ///
    /// [^note] Besides the declared types this includes the built-in scalars
    /// referenced by the schema and GraphQL's `__`-prefixed introspection
    /// types.
    pub fn type_map(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}

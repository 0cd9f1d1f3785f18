use crate::types::GraphQLType;

/// The kind of a [`GraphQLType`], without its definition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// The SDL keyword introducing a definition of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(type_: &GraphQLType) -> Self {
        match type_ {
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

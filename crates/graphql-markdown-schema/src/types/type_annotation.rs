use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// The declared type of a field, argument or input field, e.g. `[Pet!]!`.
///
/// Non-null is a flag on each level rather than a wrapper of its own, so
/// `Pet!` is a non-nullable [`TypeAnnotation::Named`].
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

/// `[Inner]` or `[Inner]!`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

/// `Name` or `Name!`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_with_nullability(ast_type, true)
    }

    fn from_ast_type_with_nullability(ast_type: &ast::operation::Type, nullable: bool) -> Self {
        match ast_type {
            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_with_nullability(inner, false),

            ast::operation::Type::ListType(inner) => Self::List(ListTypeAnnotation {
                inner: Box::new(Self::from_ast_type(inner)),
                nullable,
            }),

            ast::operation::Type::NamedType(type_name) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_name: type_name.to_string(),
            }),
        }
    }

    /// The named type at the bottom of every list wrapper.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        let mut annot = self;
        loop {
            match annot {
                Self::List(list_annot) => annot = list_annot.inner_type_annotation(),
                Self::Named(named_annot) => return named_annot,
            }
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Looks the innermost named type up in `schema`. `None` only for a
    /// dangling reference.
    pub fn innermost_type<'schema>(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        schema.type_by_name(self.innermost_type_name())
    }

    /// Indicates whether the outermost level is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Nullability of the outermost level.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable(),
            Self::Named(named_annot) => named_annot.nullable(),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(f, "[{}]", list_annot.inner_type_annotation())?,
            Self::Named(named_annot) => f.write_str(named_annot.graphql_type_name())?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

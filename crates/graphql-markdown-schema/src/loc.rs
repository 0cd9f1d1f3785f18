use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// A 1-based line and column within a loaded schema file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(file: P, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}

/// Where a schema item came from.
///
/// Items defined implicitly by GraphQL itself (built-in scalars, built-in
/// directives and the introspection types) have no declaration in any loaded
/// document and are reported as [`SchemaDefLocation::GraphQLBuiltIn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SchemaDefLocation {
    /// Builds the location of an item parsed from `file`. Items parsed from
    /// the built-in documents have no file and resolve to
    /// [`SchemaDefLocation::GraphQLBuiltIn`].
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::Pos) -> Self {
        match file {
            Some(file) => Self::Schema(FilePosition::from_pos(file, pos)),
            None => Self::GraphQLBuiltIn,
        }
    }

    /// Indicates whether the item was declared in a loaded schema document
    /// (i.e. whether it has a declaration node).
    pub fn is_declared(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}

use std::path::Path;
use std::path::PathBuf;

/// Reads a schema file as UTF-8 text.
///
/// Directories and other non-regular paths are rejected up front so the
/// error names the path rather than an opaque OS error.
pub(crate) fn read_schema_file(path: &Path) -> Result<String, ReadContentError> {
    if !path.is_file() {
        return Err(ReadContentError::NotAFile(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| ReadContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ReadContentError {
    /// Also covers content that is not valid UTF-8
    /// ([`std::io::ErrorKind::InvalidData`]).
    #[error("could not read schema file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema path {0:?} is not a file")]
    NotAFile(PathBuf),
}
impl ReadContentError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::NotAFile(path) => path,
        }
    }
}
impl std::cmp::PartialEq for ReadContentError {
    /// I/O errors compare by [`std::io::ErrorKind`].
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io { path: a, source: a_err }, Self::Io { path: b, source: b_err }) =>
                a == b && a_err.kind() == b_err.kind(),
            (Self::NotAFile(a), Self::NotAFile(b)) => a == b,
            _ => false,
        }
    }
}

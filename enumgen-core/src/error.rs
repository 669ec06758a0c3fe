//! Typed error handling for enumgen.
//!
//! Every failure is fatal: the tool reports a single diagnostic line and
//! exits non-zero, leaving no output a caller may rely on. The variants are
//! still typed so library consumers can match on them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumgen operations.
#[derive(Error, Debug)]
pub enum EnumgenError {
    /// I/O error when reading the input header or writing the generated file
    #[error("I/O error at {}: {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// End of input reached before an enum header was found
    #[error("unable to locate an enum in {}", path.display())]
    HeaderNotFound { path: PathBuf },

    /// The enum is not wrapped in any namespace
    #[error("enum in {} found outside of a namespace", path.display())]
    NoEnclosingNamespace { path: PathBuf },

    /// The enum-name line filtered down to an empty string
    #[error("empty enum name found in {}", path.display())]
    EmptyEnumName { path: PathBuf },

    /// End of input reached inside the enum body, before its closing brace
    #[error("unable to read enum values from {}: truncated enum body", path.display())]
    TruncatedBody { path: PathBuf },
}

impl EnumgenError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Get the path associated with this error.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } => path,
            Self::HeaderNotFound { path } => path,
            Self::NoEnclosingNamespace { path } => path,
            Self::EmptyEnumName { path } => path,
            Self::TruncatedBody { path } => path,
        }
    }
}

/// Convenience type alias for enumgen results.
pub type EnumgenResult<T> = Result<T, EnumgenError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> EnumgenResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> EnumgenResult<T> {
        self.map_err(|e| EnumgenError::io(path, e))
    }
}

//! Error types for the decoder and extractor layers.

use crate::tag::TagKind;

/// A tag did not have the variant a typed accessor asked for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct TagTypeError {
    pub expected: TagKind,
    pub actual: TagKind,
}

impl TagTypeError {
    pub fn new(expected: TagKind, actual: TagKind) -> Self {
        Self { expected, actual }
    }
}

/// Error returned by [`TagDecoder`](crate::TagDecoder) implementations.
#[derive(Debug, thiserror::Error)]
pub enum TreeDecodeError {
    /// The byte stream is not a valid tag tree in the decoder's format.
    #[error("failed to parse {format} tag tree: {source}")]
    Parse {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The tree decoded, but its root is not a compound.
    #[error("root tag must be a Compound, got {actual}")]
    RootNotCompound { actual: TagKind },
}

/// Errors produced while loading or extracting schematic metadata.
///
/// Every variant carries the source path so the failure can be diagnosed
/// without re-reading the file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The source could not be opened, read, or decompressed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The decompressed bytes are not a tag tree with a compound root.
    #[error("malformed tag tree in {path}: {source}")]
    MalformedTree {
        path: String,
        #[source]
        source: TreeDecodeError,
    },

    /// A required field is absent.
    #[error("missing required tag '{field}' in file: {path}")]
    MissingField { path: String, field: &'static str },

    /// A required field is present with the wrong tag type.
    #[error("expected {expected} for '{field}' but got {actual} in file: {path}")]
    TypeMismatch {
        path: String,
        field: &'static str,
        expected: TagKind,
        actual: TagKind,
    },
}

impl DecodeError {
    /// Path of the source the error refers to.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::Io { path, .. }
            | DecodeError::MalformedTree { path, .. }
            | DecodeError::MissingField { path, .. }
            | DecodeError::TypeMismatch { path, .. } => path,
        }
    }
}

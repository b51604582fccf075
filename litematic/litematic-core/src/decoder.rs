//! Decoder trait used to plug a tag tree format into the reader.

use crate::{error::TreeDecodeError, tag::Tag};

/// Turns a decompressed byte stream into a tag tree.
///
/// Implementations are registered with `litematic::LitematicReader` and are
/// shared across calls, so they must not hold per-call state.
pub trait TagDecoder: Send + Sync {
    /// Short format name used in logs and error messages.
    fn format(&self) -> &'static str;

    /// Decode the whole byte stream and return its root tag.
    ///
    /// The root is returned as-is; callers check that it is a compound.
    fn decode(&self, data: &[u8]) -> Result<Tag, TreeDecodeError>;
}

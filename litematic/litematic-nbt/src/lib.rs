//! NBT [`TagDecoder`] implementation for the litematic pipeline.
//!
//! This crate provides [`NbtDecoder`], which parses uncompressed Java-edition
//! NBT with `fastnbt` and converts the result into the [`Tag`] tree used by
//! litematic-core. The conversion helpers [`decode_nbt_to_tag`] and
//! [`nbt_value_to_tag`] are exported for direct use.

mod convert;

pub use convert::{decode_nbt_to_tag, nbt_value_to_tag};
use litematic_core::{Tag, TagDecoder, TreeDecodeError};

/// Stateless decoder for big-endian Java-edition NBT.
#[derive(Debug, Clone, Copy, Default)]
pub struct NbtDecoder;

impl NbtDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TagDecoder for NbtDecoder {
    fn format(&self) -> &'static str {
        convert::FORMAT
    }

    fn decode(&self, data: &[u8]) -> Result<Tag, TreeDecodeError> {
        decode_nbt_to_tag(data)
    }
}

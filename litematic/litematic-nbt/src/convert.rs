//! Convert `fastnbt` values into the [`Tag`] representation used by litematic-core.

use fastnbt::Value;
use litematic_core::{Compound, Tag, TreeDecodeError};

pub(crate) const FORMAT: &str = "nbt";

/// Parse an uncompressed NBT byte stream into a [`Tag`].
///
/// The root name is discarded. The root is returned whatever its type; the
/// reader decides whether a non-compound root is acceptable.
pub fn decode_nbt_to_tag(data: &[u8]) -> Result<Tag, TreeDecodeError> {
    let value: Value = fastnbt::from_bytes(data).map_err(|e| TreeDecodeError::Parse {
        format: FORMAT,
        source: Box::new(e),
    })?;
    Ok(nbt_value_to_tag(value))
}

/// Convert an owned `fastnbt::Value` into a [`Tag`], moving array payloads
/// instead of copying them.
pub fn nbt_value_to_tag(value: Value) -> Tag {
    match value {
        Value::Byte(v) => Tag::Byte(v),
        Value::Short(v) => Tag::Short(v),
        Value::Int(v) => Tag::Int(v),
        Value::Long(v) => Tag::Long(v),
        Value::Float(v) => Tag::Float(v),
        Value::Double(v) => Tag::Double(v),
        Value::String(v) => Tag::String(v),
        Value::ByteArray(v) => Tag::ByteArray(v.into_inner()),
        Value::IntArray(v) => Tag::IntArray(v.into_inner()),
        Value::LongArray(v) => Tag::LongArray(v.into_inner()),
        Value::List(items) => Tag::List(items.into_iter().map(nbt_value_to_tag).collect()),
        Value::Compound(entries) => Tag::Compound(
            entries
                .into_iter()
                .map(|(name, v)| (name, nbt_value_to_tag(v)))
                .collect::<Compound>(),
        ),
    }
}

//! Schema-driven extraction of [`SchematicMetadata`] from a decoded root compound.
//!
//! `Version` and `Metadata` are structural and must be present with the right
//! tag type. Every other field is descriptive: a missing or mistyped value
//! falls back to a default (counts and versions) or is left absent, so
//! legacy and partially written files still yield usable metadata.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{DecodeError, TagTypeError},
    metadata::{EnclosingSize, SchematicMetadata},
    tag::{Compound, Tag},
};

const TAG_VERSION: &str = "Version";
const TAG_SUB_VERSION: &str = "SubVersion";
const TAG_DATA_VERSION: &str = "MinecraftDataVersion";
const TAG_REGIONS: &str = "Regions";
const TAG_METADATA: &str = "Metadata";

const TAG_NAME: &str = "Name";
const TAG_AUTHOR: &str = "Author";
const TAG_DESCRIPTION: &str = "Description";
const TAG_TIME_CREATED: &str = "TimeCreated";
const TAG_TIME_MODIFIED: &str = "TimeModified";
const TAG_TOTAL_BLOCKS: &str = "TotalBlocks";
const TAG_TOTAL_VOLUME: &str = "TotalVolume";
const TAG_ENCLOSING_SIZE: &str = "EnclosingSize";
const TAG_PREVIEW_IMAGE: &str = "PreviewImageData";

const TAG_SIZE_X: &str = "x";
const TAG_SIZE_Y: &str = "y";
const TAG_SIZE_Z: &str = "z";

/// Extract schematic metadata from the root compound of a decoded file.
///
/// `source` is only carried into the result and into error messages.
///
/// # Errors
/// - [`DecodeError::MissingField`] if `Version` or `Metadata` is absent.
/// - [`DecodeError::TypeMismatch`] if `Version` is not an Int or `Metadata`
///   is not a Compound.
pub fn extract(
    root: &Compound,
    source: impl Into<PathBuf>,
) -> Result<SchematicMetadata, DecodeError> {
    let source = source.into();

    let version = required(root, TAG_VERSION, &source, Tag::try_int)?;
    let metadata = required(root, TAG_METADATA, &source, Tag::try_compound)?;

    // A mistyped `Regions` counts as no regions rather than an error.
    let region_count = optional(root, TAG_REGIONS, Tag::as_compound).map_or(0, |r| r.len());

    Ok(SchematicMetadata {
        version,
        sub_version: int_or(root, TAG_SUB_VERSION, 0),
        data_version: int_or(root, TAG_DATA_VERSION, 0),
        region_count,
        preview_image: optional(metadata, TAG_PREVIEW_IMAGE, Tag::as_int_array).map(Arc::from),
        name: string(metadata, TAG_NAME),
        author: string(metadata, TAG_AUTHOR),
        description: string(metadata, TAG_DESCRIPTION),
        time_created: optional(metadata, TAG_TIME_CREATED, Tag::as_long),
        time_modified: optional(metadata, TAG_TIME_MODIFIED, Tag::as_long),
        total_blocks: int_or(metadata, TAG_TOTAL_BLOCKS, 0),
        total_volume: int_or(metadata, TAG_TOTAL_VOLUME, 0),
        enclosing_size: enclosing_size(metadata),
        source,
    })
}

fn required<'a, T>(
    parent: &'a Compound,
    field: &'static str,
    source: &Path,
    cast: impl FnOnce(&'a Tag) -> Result<T, TagTypeError>,
) -> Result<T, DecodeError> {
    let tag = parent.get(field).ok_or_else(|| DecodeError::MissingField {
        path: source.display().to_string(),
        field,
    })?;
    cast(tag).map_err(|e| DecodeError::TypeMismatch {
        path: source.display().to_string(),
        field,
        expected: e.expected,
        actual: e.actual,
    })
}

/// Look up `field` and cast it, treating a mistyped tag the same as a missing one.
fn optional<'a, T>(
    parent: &'a Compound,
    field: &str,
    cast: impl FnOnce(&'a Tag) -> Option<T>,
) -> Option<T> {
    let tag = parent.get(field)?;
    let value = cast(tag);
    if value.is_none() {
        tracing::trace!(field, actual = %tag.kind(), "ignoring tag with unexpected type");
    }
    value
}

fn int_or(parent: &Compound, field: &str, default: i32) -> i32 {
    optional(parent, field, Tag::as_int).unwrap_or(default)
}

fn string(parent: &Compound, field: &str) -> Option<String> {
    optional(parent, field, Tag::as_str).map(str::to_owned)
}

fn enclosing_size(metadata: &Compound) -> Option<EnclosingSize> {
    let size = optional(metadata, TAG_ENCLOSING_SIZE, Tag::as_compound)?;
    let axis = |name: &str| {
        size.get(name)
            .and_then(Tag::as_int)
            .and_then(|v| u32::try_from(v).ok())
    };
    Some(EnclosingSize::new(
        axis(TAG_SIZE_X)?,
        axis(TAG_SIZE_Y)?,
        axis(TAG_SIZE_Z)?,
    ))
}

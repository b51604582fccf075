//! Validated schematic metadata record.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};

/// Bounding box dimensions of all regions, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnclosingSize {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl EnclosingSize {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    pub fn volume(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y) * u64::from(self.z)
    }
}

/// Metadata decoded from a schematic file.
///
/// Built once by [`extract`](crate::extract) and never mutated afterwards.
/// The preview image is copied out of the tag tree on construction, so the
/// record shares no storage with the tree it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SchematicMetadata {
    pub(crate) source: PathBuf,
    pub(crate) version: i32,
    pub(crate) sub_version: i32,
    pub(crate) data_version: i32,
    pub(crate) region_count: usize,
    pub(crate) preview_image: Option<Arc<[i32]>>,
    pub(crate) name: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) time_created: Option<i64>,
    pub(crate) time_modified: Option<i64>,
    pub(crate) total_blocks: i32,
    pub(crate) total_volume: i32,
    pub(crate) enclosing_size: Option<EnclosingSize>,
}

impl SchematicMetadata {
    /// Path or label of the source this record was decoded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn sub_version(&self) -> i32 {
        self.sub_version
    }

    /// Data version of the game the schematic was saved with (`MinecraftDataVersion`).
    pub fn data_version(&self) -> i32 {
        self.data_version
    }

    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Packed ARGB pixels of the embedded preview image.
    pub fn preview_image(&self) -> Option<&[i32]> {
        self.preview_image.as_deref()
    }

    /// Owned copy of the preview image; each call returns an independent buffer.
    pub fn preview_image_vec(&self) -> Option<Vec<i32>> {
        self.preview_image().map(<[i32]>::to_vec)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creation time in milliseconds since the Unix epoch, as stored in the file.
    pub fn time_created_millis(&self) -> Option<i64> {
        self.time_created
    }

    /// Modification time in milliseconds since the Unix epoch, as stored in the file.
    pub fn time_modified_millis(&self) -> Option<i64> {
        self.time_modified
    }

    /// Creation time as a calendar instant.
    ///
    /// `None` when the field is absent or lies outside the range `chrono` can
    /// represent; [`time_created_millis`](Self::time_created_millis) still
    /// holds the raw value in the latter case.
    pub fn time_created(&self) -> Option<DateTime<Utc>> {
        self.time_created.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Modification time as a calendar instant; see [`time_created`](Self::time_created).
    pub fn time_modified(&self) -> Option<DateTime<Utc>> {
        self.time_modified.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn total_blocks(&self) -> i32 {
        self.total_blocks
    }

    pub fn total_volume(&self) -> i32 {
        self.total_volume
    }

    pub fn enclosing_size(&self) -> Option<EnclosingSize> {
        self.enclosing_size
    }
}

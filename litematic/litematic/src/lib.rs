//! Read metadata from Litematica (`.litematic`) schematic files.
//!
//! ```no_run
//! let meta = litematic::load("castle.litematic")?;
//! println!("{} regions, {} blocks", meta.region_count(), meta.total_blocks());
//! # Ok::<(), litematic::DecodeError>(())
//! ```

mod reader;

pub use litematic_core as core;
pub use litematic_core::{DecodeError, EnclosingSize, SchematicMetadata};
#[cfg(feature = "nbt")]
pub use litematic_nbt as nbt;
#[cfg(feature = "nbt")]
pub use reader::load;
pub use reader::LitematicReader;

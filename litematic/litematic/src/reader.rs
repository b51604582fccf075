//! Schematic file reader with a pluggable tag tree decoder.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use flate2::read::GzDecoder;
use litematic_core::{
    DecodeError, SchematicMetadata, Tag, TagDecoder, TreeDecodeError, extract,
};
#[cfg(feature = "nbt")]
use litematic_nbt::NbtDecoder;

/// Reads gzip-compressed schematic files and extracts their metadata.
///
/// The reader holds no per-file state and can be shared between threads.
#[derive(Clone)]
pub struct LitematicReader {
    decoder: Arc<dyn TagDecoder>,
}

impl LitematicReader {
    /// Create a reader that parses decompressed bytes with `decoder`.
    pub fn new(decoder: Box<dyn TagDecoder>) -> Self {
        Self::with_shared_decoder(Arc::from(decoder))
    }

    pub fn with_shared_decoder(decoder: Arc<dyn TagDecoder>) -> Self {
        Self { decoder }
    }

    /// Format name of the configured decoder.
    pub fn format(&self) -> &'static str {
        self.decoder.format()
    }

    /// Open `path` and extract its metadata.
    ///
    /// The file is closed before the tag tree is decoded, on every path.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SchematicMetadata, DecodeError> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load", path = %path.display()).entered();

        let file = File::open(path).map_err(|e| io_error(path, e))?;
        self.read_from(BufReader::new(file), path)
    }

    /// Extract metadata from a gzip-compressed byte stream.
    ///
    /// `source` labels the stream in the result and in error messages.
    pub fn read_from(
        &self,
        reader: impl Read,
        source: impl Into<PathBuf>,
    ) -> Result<SchematicMetadata, DecodeError> {
        let source = source.into();

        let data = decompress(reader).map_err(|e| io_error(&source, e))?;
        tracing::debug!(bytes = data.len(), format = self.format(), "decompressed schematic");

        let root = match self.decoder.decode(&data) {
            Ok(Tag::Compound(root)) => root,
            Ok(other) => {
                return Err(malformed_tree(
                    &source,
                    TreeDecodeError::RootNotCompound {
                        actual: other.kind(),
                    },
                ));
            }
            Err(e) => return Err(malformed_tree(&source, e)),
        };

        let metadata = extract(&root, source)?;
        tracing::debug!(
            version = metadata.version(),
            regions = metadata.region_count(),
            "extracted schematic metadata"
        );
        Ok(metadata)
    }
}

#[cfg(feature = "nbt")]
impl Default for LitematicReader {
    fn default() -> Self {
        Self::new(Box::new(NbtDecoder::new()))
    }
}

/// Load metadata from `path` with the default NBT decoder.
#[cfg(feature = "nbt")]
pub fn load(path: impl AsRef<Path>) -> Result<SchematicMetadata, DecodeError> {
    LitematicReader::default().load(path)
}

/// Inflate the whole stream; the reader is dropped before returning.
fn decompress(reader: impl Read) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    GzDecoder::new(reader).read_to_end(&mut data)?;
    Ok(data)
}

fn io_error(path: &Path, source: io::Error) -> DecodeError {
    DecodeError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn malformed_tree(path: &Path, source: TreeDecodeError) -> DecodeError {
    DecodeError::MalformedTree {
        path: path.display().to_string(),
        source,
    }
}

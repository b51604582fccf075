//! Format-agnostic core types and the metadata extractor for `litematic`.
//!
//! This crate provides the decoded tag tree representation ([`Tag`] /
//! [`Compound`]), the [`TagDecoder`] trait implemented by tree decoders, and
//! [`extract`], which turns a decoded root compound into a validated
//! [`SchematicMetadata`].

mod decoder;
mod error;
mod extract;
mod metadata;
mod tag;

pub use decoder::TagDecoder;
pub use error::{DecodeError, TagTypeError, TreeDecodeError};
pub use extract::extract;
pub use metadata::{EnclosingSize, SchematicMetadata};
pub use tag::{Compound, Tag, TagKind};

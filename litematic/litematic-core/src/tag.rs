//! Decoded tag tree produced by [`TagDecoder`](crate::TagDecoder) implementations.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::error::TagTypeError;

/// A node of the decoded tag tree.
/// Variants mirror the NBT tag types one to one; no lossy conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Tag>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// Variant discriminant of a [`Tag`], used in type mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Byte => "Byte",
            TagKind::Short => "Short",
            TagKind::Int => "Int",
            TagKind::Long => "Long",
            TagKind::Float => "Float",
            TagKind::Double => "Double",
            TagKind::ByteArray => "ByteArray",
            TagKind::String => "String",
            TagKind::List => "List",
            TagKind::Compound => "Compound",
            TagKind::IntArray => "IntArray",
            TagKind::LongArray => "LongArray",
        }
    }
}

impl Display for TagKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl Tag {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn try_int(&self) -> std::result::Result<i32, TagTypeError> {
        self.as_int().ok_or_else(|| self.type_mismatch(TagKind::Int))
    }

    pub fn try_long(&self) -> std::result::Result<i64, TagTypeError> {
        self.as_long().ok_or_else(|| self.type_mismatch(TagKind::Long))
    }

    pub fn try_str(&self) -> std::result::Result<&str, TagTypeError> {
        self.as_str().ok_or_else(|| self.type_mismatch(TagKind::String))
    }

    pub fn try_compound(&self) -> std::result::Result<&Compound, TagTypeError> {
        self.as_compound()
            .ok_or_else(|| self.type_mismatch(TagKind::Compound))
    }

    pub fn type_mismatch(&self, expected: TagKind) -> TagTypeError {
        TagTypeError::new(expected, self.kind())
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Self::Compound(value)
    }
}

/// Named children of a compound tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound(pub HashMap<String, Tag>);

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child, returning the previous tag stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.0.insert(name.into(), tag.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Self {
        self.insert(name, tag);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        self.0.remove(name)
    }
}

impl Deref for Compound {
    type Target = HashMap<String, Tag>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<HashMap<String, Tag>> for Compound {
    fn from(value: HashMap<String, Tag>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, Tag)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

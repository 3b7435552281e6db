use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Typed leaf or container node of a block-state property tree.
///
/// Serialized as `{"type": "<kind>", "value": <payload>}` so that byte and int
/// leaves survive a round trip through JSON fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Tag {
	/// Signed 8-bit integer, also used for boolean-like flags.
	Byte(i8),
	/// Signed 16-bit integer.
	Short(i16),
	/// Signed 32-bit integer.
	Int(i32),
	/// Signed 64-bit integer.
	Long(i64),
	/// 32-bit float.
	Float(f32),
	/// 64-bit float.
	Double(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Ordered sequence of tags.
	List(Vec<Tag>),
	/// Nested named compound.
	Compound(CompoundTag),
}

/// Fieldless discriminant of [`Tag`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
	/// [`Tag::Byte`].
	Byte,
	/// [`Tag::Short`].
	Short,
	/// [`Tag::Int`].
	Int,
	/// [`Tag::Long`].
	Long,
	/// [`Tag::Float`].
	Float,
	/// [`Tag::Double`].
	Double,
	/// [`Tag::String`].
	String,
	/// [`Tag::List`].
	List,
	/// [`Tag::Compound`].
	Compound,
}

impl TagKind {
	/// Stable lowercase kind name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::String => "string",
			Self::List => "list",
			Self::Compound => "compound",
		}
	}
}

impl Tag {
	/// Kind of this tag.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::String(_) => TagKind::String,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
		}
	}
}

/// Compound node: tags keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundTag {
	entries: BTreeMap<String, Tag>,
}

impl CompoundTag {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Look up a tag by name. `None` means the name is absent.
	pub fn get(&self, name: &str) -> Option<&Tag> {
		self.entries.get(name)
	}

	/// Insert or replace a named tag, returning the previous one.
	pub fn insert(&mut self, name: impl Into<String>, tag: Tag) -> Option<Tag> {
		self.entries.insert(name.into(), tag)
	}

	/// Number of named entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the compound has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
		self.entries.iter().map(|(name, tag)| (name.as_str(), tag))
	}

	/// Builder form of [`CompoundTag::insert`].
	pub fn with_tag(mut self, name: impl Into<String>, tag: Tag) -> Self {
		self.insert(name, tag);
		self
	}

	/// Add a byte leaf.
	pub fn with_byte(self, name: impl Into<String>, value: i8) -> Self {
		self.with_tag(name, Tag::Byte(value))
	}

	/// Add an int leaf.
	pub fn with_int(self, name: impl Into<String>, value: i32) -> Self {
		self.with_tag(name, Tag::Int(value))
	}

	/// Add a string leaf.
	pub fn with_string(self, name: impl Into<String>, value: &str) -> Self {
		self.with_tag(name, Tag::String(value.into()))
	}

	/// Add a nested compound.
	pub fn with_compound(self, name: impl Into<String>, value: CompoundTag) -> Self {
		self.with_tag(name, Tag::Compound(value))
	}
}

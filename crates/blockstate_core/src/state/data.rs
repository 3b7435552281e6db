use crate::state::{BlockStateReader, CompoundTag, Result, StateError, Tag};

const TAG_NAME: &str = "name";
const TAG_STATES: &str = "states";
const TAG_VERSION: &str = "version";

/// Persisted or transmitted block-state record: block name, states, and format version.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStateData {
	/// Namespaced block identifier, e.g. `minecraft:wool`.
	pub name: String,
	/// Property compound decoded through [`BlockStateReader`].
	pub states: CompoundTag,
	/// Packed `major.minor.patch.revision` format version, `0` when unversioned.
	pub version: i32,
}

impl BlockStateData {
	/// Format version of 1.18.10 block states.
	pub const CURRENT_VERSION: i32 = (1 << 24) | (18 << 16) | (10 << 8);

	/// Build a record at [`BlockStateData::CURRENT_VERSION`].
	pub fn current(name: impl Into<String>, states: CompoundTag) -> Self {
		Self {
			name: name.into(),
			states,
			version: Self::CURRENT_VERSION,
		}
	}

	/// Parse the envelope compound. `version` may be absent in old data.
	pub fn from_nbt(nbt: &CompoundTag) -> Result<Self> {
		let name = match nbt.get(TAG_NAME) {
			Some(Tag::String(value)) => value.to_string(),
			tag => return Err(StateError::missing_or_wrong_type(TAG_NAME, tag)),
		};
		let states = match nbt.get(TAG_STATES) {
			Some(Tag::Compound(value)) => value.clone(),
			tag => return Err(StateError::missing_or_wrong_type(TAG_STATES, tag)),
		};
		let version = match nbt.get(TAG_VERSION) {
			Some(Tag::Int(value)) => *value,
			None => 0,
			tag => return Err(StateError::missing_or_wrong_type(TAG_VERSION, tag)),
		};

		Ok(Self { name, states, version })
	}

	/// Rebuild the envelope compound.
	pub fn to_nbt(&self) -> CompoundTag {
		CompoundTag::new()
			.with_string(TAG_NAME, &self.name)
			.with_compound(TAG_STATES, self.states.clone())
			.with_int(TAG_VERSION, self.version)
	}

	/// Reader over [`BlockStateData::states`].
	pub fn reader(&self) -> BlockStateReader<'_> {
		BlockStateReader::new(&self.states)
	}

	/// Unpack [`BlockStateData::version`] into `(major, minor, patch, revision)`.
	pub fn version_parts(&self) -> (u8, u8, u8, u8) {
		let [major, minor, patch, revision] = self.version.to_be_bytes();
		(major, minor, patch, revision)
	}
}

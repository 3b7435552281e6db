mod direction;
mod material;

use crate::state::{CompoundTag, Result, StateError, Tag};

/// Typed, validating accessors over one block's `states` compound.
///
/// The reader borrows the compound for the duration of a single decode and holds
/// nothing else, so reads never affect one another and the reader can be copied
/// or shared across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct BlockStateReader<'a> {
	nbt: &'a CompoundTag,
}

impl<'a> BlockStateReader<'a> {
	/// Wrap a states compound.
	pub fn new(nbt: &'a CompoundTag) -> Self {
		Self { nbt }
	}

	/// Wrapped compound.
	pub fn nbt(&self) -> &'a CompoundTag {
		self.nbt
	}

	/// Read a boolean stored as a byte holding exactly `0` or `1`.
	pub fn read_bool(&self, name: &str) -> Result<bool> {
		match self.nbt.get(name) {
			Some(Tag::Byte(value)) => match *value {
				0 => Ok(false),
				1 => Ok(true),
				other => Err(StateError::bad_value(name, other.to_string(), None)),
			},
			tag => Err(StateError::missing_or_wrong_type(name, tag)),
		}
	}

	/// Read an int leaf verbatim.
	pub fn read_int(&self, name: &str) -> Result<i32> {
		match self.nbt.get(name) {
			Some(Tag::Int(value)) => Ok(*value),
			tag => Err(StateError::missing_or_wrong_type(name, tag)),
		}
	}

	/// Read an int leaf and require `min <= value <= max`.
	pub fn read_bounded_int(&self, name: &str, min: i32, max: i32) -> Result<i32> {
		let result = self.read_int(name)?;
		if result < min || result > max {
			return Err(StateError::bad_value(
				name,
				result.to_string(),
				Some(format!("must be inside the range {min} ... {max}")),
			));
		}
		Ok(result)
	}

	/// Read a string leaf verbatim.
	///
	/// Accepted-value checks belong to the semantic decoders, which know the
	/// literal set for each property.
	pub fn read_string(&self, name: &str) -> Result<&'a str> {
		match self.nbt.get(name) {
			Some(Tag::String(value)) => Ok(value),
			tag => Err(StateError::missing_or_wrong_type(name, tag)),
		}
	}
}

#[cfg(test)]
mod tests;

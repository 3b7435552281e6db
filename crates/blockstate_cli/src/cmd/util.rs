use std::path::Path;

use blockstate::state::{BlockStateData, CompoundTag, DecodedValue};

use crate::error::Result;

/// Load a JSON-encoded block-state envelope.
pub(crate) fn load_envelope(path: &Path) -> Result<BlockStateData> {
	let bytes = std::fs::read(path)?;
	let nbt: CompoundTag = serde_json::from_slice(&bytes)?;
	Ok(BlockStateData::from_nbt(&nbt)?)
}

/// Render a packed format version as `major.minor.patch.revision`.
pub(crate) fn render_version(data: &BlockStateData) -> String {
	let (major, minor, patch, revision) = data.version_parts();
	format!("{major}.{minor}.{patch}.{revision}")
}

/// Render a decoded value as its canonical lowercase name.
pub(crate) fn render_decoded(value: &DecodedValue) -> String {
	match value {
		DecodedValue::Facing(item) => item.as_str().to_owned(),
		DecodedValue::Axis(item) => item.as_str().to_owned(),
		DecodedValue::Color(item) => item.as_str().to_owned(),
		DecodedValue::Slab(item) => item.as_str().to_owned(),
		DecodedValue::Coral(item) => item.as_str().to_owned(),
		DecodedValue::Bell(item) => item.as_str().to_owned(),
		DecodedValue::Raw(kind) => format!("<{}>", kind.as_str()),
	}
}

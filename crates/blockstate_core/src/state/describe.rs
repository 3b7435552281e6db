use serde::Serialize;
use tracing::{debug, trace};

use crate::state::{Axis, BellAttachmentType, BlockStateReader, CoralType, DyeColor, Facing, Result, SlabType, StateError, TagKind, names};

/// Runtime switches for [`describe_states`].
#[derive(Debug, Clone)]
pub struct DescribeOptions {
	/// Abort on the first property that fails to decode.
	pub strict: bool,
	/// Report properties without a known decoder as [`DecodedValue::Raw`].
	pub include_unknown: bool,
}

impl Default for DescribeOptions {
	fn default() -> Self {
		Self {
			strict: true,
			include_unknown: true,
		}
	}
}

impl DescribeOptions {
	/// Preset that records failures per property and keeps going.
	pub fn lenient() -> Self {
		Self {
			strict: false,
			include_unknown: true,
		}
	}
}

/// Semantic value produced for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodedValue {
	/// Facing from any of the direction conventions.
	Facing(Facing),
	/// Pillar axis.
	Axis(Axis),
	/// Dye color.
	Color(DyeColor),
	/// Slab half.
	Slab(SlabType),
	/// Coral species.
	Coral(CoralType),
	/// Bell mounting.
	Bell(BellAttachmentType),
	/// No decoder is known for this property; only its kind is reported.
	Raw(TagKind),
}

/// Decode result for one property in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyOutcome {
	/// Property decoded.
	Decoded(DecodedValue),
	/// Property failed to decode.
	Failed(StateError),
}

/// One named entry of a describe pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedProperty {
	/// Property name.
	pub name: String,
	/// Decode result.
	pub outcome: PropertyOutcome,
}

type Decoder = fn(&BlockStateReader<'_>) -> Result<DecodedValue>;

fn decoder_for(name: &str) -> Option<Decoder> {
	let decoder: Decoder = match name {
		names::FACING_DIRECTION => |reader| reader.read_facing_direction().map(DecodedValue::Facing),
		names::DIRECTION => |reader| reader.read_legacy_horizontal_facing().map(DecodedValue::Facing),
		names::WEIRDO_DIRECTION => |reader| reader.read_weirdo_horizontal_facing().map(DecodedValue::Facing),
		names::CORAL_DIRECTION => |reader| reader.read_coral_facing().map(DecodedValue::Facing),
		names::TORCH_FACING_DIRECTION => |reader| reader.read_torch_facing().map(DecodedValue::Facing),
		names::PILLAR_AXIS => |reader| reader.read_pillar_axis().map(DecodedValue::Axis),
		names::COLOR => |reader| reader.read_color().map(DecodedValue::Color),
		names::TOP_SLOT_BIT => |reader| reader.read_slab_position().map(DecodedValue::Slab),
		names::CORAL_COLOR => |reader| reader.read_coral_type().map(DecodedValue::Coral),
		names::ATTACHMENT => |reader| reader.read_bell_attachment_type().map(DecodedValue::Bell),
		_ => return None,
	};
	Some(decoder)
}

/// Decode every property of the wrapped compound, in name order.
///
/// In strict mode the first failure is returned and nothing else is reported.
pub fn describe_states(reader: &BlockStateReader<'_>, opt: &DescribeOptions) -> Result<Vec<DescribedProperty>> {
	let mut out = Vec::with_capacity(reader.nbt().len());

	for (name, tag) in reader.nbt().iter() {
		let outcome = match decoder_for(name) {
			Some(decode) => match decode(reader) {
				Ok(value) => PropertyOutcome::Decoded(value),
				Err(err) if opt.strict => {
					debug!(property = name, error = %err, "block state decode aborted");
					return Err(err);
				}
				Err(err) => {
					debug!(property = name, error = %err, "block state property failed to decode");
					PropertyOutcome::Failed(err)
				}
			},
			None if opt.include_unknown => PropertyOutcome::Decoded(DecodedValue::Raw(tag.kind())),
			None => {
				trace!(property = name, "skipping property without decoder");
				continue;
			}
		};

		out.push(DescribedProperty {
			name: name.to_owned(),
			outcome,
		});
	}

	Ok(out)
}

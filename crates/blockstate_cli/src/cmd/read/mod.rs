use std::path::PathBuf;

use blockstate::state::{BlockStateReader, DecodedValue, names};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::json;

use crate::cmd::util::{load_envelope, render_decoded};
use crate::error::{CliError, Result};

/// Reader accessor selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Accessor {
	/// Byte flag under `--name`.
	Bool,
	/// Int under `--name`.
	Int,
	/// Int under `--name` within `--min`..=`--max`.
	BoundedInt,
	/// String under `--name`.
	String,
	/// Six-way `facing_direction`.
	Facing,
	/// Horizontal `facing_direction`.
	HorizontalFacing,
	/// `weirdo_direction`.
	WeirdoFacing,
	/// Legacy `direction`.
	LegacyFacing,
	/// `coral_direction`.
	CoralFacing,
	/// `facing_direction` with down read as up.
	FacingWithoutDown,
	/// `facing_direction` with up read as down.
	FacingWithoutUp,
	/// `pillar_axis`.
	PillarAxis,
	/// `color`.
	Color,
	/// `top_slot_bit` as a slab half.
	Slab,
	/// `torch_facing_direction`.
	Torch,
	/// `coral_color`.
	CoralType,
	/// Bell `attachment`.
	BellAttachment,
}

impl Accessor {
	/// Command-line spelling.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::BoundedInt => "bounded-int",
			Self::String => "string",
			Self::Facing => "facing",
			Self::HorizontalFacing => "horizontal-facing",
			Self::WeirdoFacing => "weirdo-facing",
			Self::LegacyFacing => "legacy-facing",
			Self::CoralFacing => "coral-facing",
			Self::FacingWithoutDown => "facing-without-down",
			Self::FacingWithoutUp => "facing-without-up",
			Self::PillarAxis => "pillar-axis",
			Self::Color => "color",
			Self::Slab => "slab",
			Self::Torch => "torch",
			Self::CoralType => "coral-type",
			Self::BellAttachment => "bell-attachment",
		}
	}
}

/// Arguments only primitive accessors consume.
#[derive(Debug, Clone, Default)]
pub struct ReadArgs {
	/// Property name for primitive accessors.
	pub name: Option<String>,
	/// Inclusive lower bound for `bounded-int`.
	pub min: Option<i32>,
	/// Inclusive upper bound for `bounded-int`.
	pub max: Option<i32>,
}

/// Value produced by one accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReadValue {
	/// Result of `bool`.
	Bool(bool),
	/// Result of `int` and `bounded-int`.
	Int(i32),
	/// Result of `string`.
	String(String),
	/// Result of a semantic accessor.
	Decoded(DecodedValue),
}

impl ReadValue {
	fn render(&self) -> String {
		match self {
			Self::Bool(value) => value.to_string(),
			Self::Int(value) => value.to_string(),
			Self::String(value) => format!("\"{value}\""),
			Self::Decoded(value) => render_decoded(value),
		}
	}
}

fn decode_semantic(reader: &BlockStateReader<'_>, accessor: Accessor) -> Result<Option<(&'static str, DecodedValue)>> {
	let decoded = match accessor {
		Accessor::Bool | Accessor::Int | Accessor::BoundedInt | Accessor::String => return Ok(None),
		Accessor::Facing => (names::FACING_DIRECTION, DecodedValue::Facing(reader.read_facing_direction()?)),
		Accessor::HorizontalFacing => (names::FACING_DIRECTION, DecodedValue::Facing(reader.read_horizontal_facing()?)),
		Accessor::WeirdoFacing => (names::WEIRDO_DIRECTION, DecodedValue::Facing(reader.read_weirdo_horizontal_facing()?)),
		Accessor::LegacyFacing => (names::DIRECTION, DecodedValue::Facing(reader.read_legacy_horizontal_facing()?)),
		Accessor::CoralFacing => (names::CORAL_DIRECTION, DecodedValue::Facing(reader.read_coral_facing()?)),
		Accessor::FacingWithoutDown => (names::FACING_DIRECTION, DecodedValue::Facing(reader.read_facing_without_down()?)),
		Accessor::FacingWithoutUp => (names::FACING_DIRECTION, DecodedValue::Facing(reader.read_facing_without_up()?)),
		Accessor::PillarAxis => (names::PILLAR_AXIS, DecodedValue::Axis(reader.read_pillar_axis()?)),
		Accessor::Color => (names::COLOR, DecodedValue::Color(reader.read_color()?)),
		Accessor::Slab => (names::TOP_SLOT_BIT, DecodedValue::Slab(reader.read_slab_position()?)),
		Accessor::Torch => (names::TORCH_FACING_DIRECTION, DecodedValue::Facing(reader.read_torch_facing()?)),
		Accessor::CoralType => (names::CORAL_COLOR, DecodedValue::Coral(reader.read_coral_type()?)),
		Accessor::BellAttachment => (names::ATTACHMENT, DecodedValue::Bell(reader.read_bell_attachment_type()?)),
	};
	Ok(Some(decoded))
}

/// Run `accessor` against `reader`, returning the property name read and its value.
///
/// Semantic accessors read their fixed property; primitive ones need `args.name`.
pub fn read_value(reader: &BlockStateReader<'_>, accessor: Accessor, args: &ReadArgs) -> Result<(String, ReadValue)> {
	if let Some((property, value)) = decode_semantic(reader, accessor)? {
		return Ok((property.to_owned(), ReadValue::Decoded(value)));
	}

	let missing = |argument| CliError::MissingArgument {
		accessor: accessor.as_str(),
		argument,
	};
	let name = args.name.as_deref().ok_or_else(|| missing("name"))?;
	let value = match accessor {
		Accessor::Bool => ReadValue::Bool(reader.read_bool(name)?),
		Accessor::Int => ReadValue::Int(reader.read_int(name)?),
		Accessor::BoundedInt => {
			let min = args.min.ok_or_else(|| missing("min"))?;
			let max = args.max.ok_or_else(|| missing("max"))?;
			ReadValue::Int(reader.read_bounded_int(name, min, max)?)
		}
		_ => ReadValue::String(reader.read_string(name)?.to_owned()),
	};
	Ok((name.to_owned(), value))
}

/// Load the block state at `path` and print the result of one accessor.
pub fn run(path: PathBuf, accessor: Accessor, args: ReadArgs, json: bool) -> Result<()> {
	let data = load_envelope(&path)?;
	let (property, value) = read_value(&data.reader(), accessor, &args)?;

	if json {
		let out = json!({
			"accessor": accessor.as_str(),
			"property": property,
			"value": value,
		});
		println!("{}", serde_json::to_string_pretty(&out)?);
	} else {
		println!("{property} = {}", value.render());
	}

	Ok(())
}

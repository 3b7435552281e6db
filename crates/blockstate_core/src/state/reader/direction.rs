use super::BlockStateReader;
use crate::state::values as v;
use crate::state::{Axis, Facing, Result, StateError, names};

/// Raw integer to facing table for one property convention.
type FacingMapping = fn(i32) -> Option<Facing>;

fn six_way(raw: i32) -> Option<Facing> {
	match raw {
		0 => Some(Facing::Down),
		1 => Some(Facing::Up),
		2 => Some(Facing::North),
		3 => Some(Facing::South),
		4 => Some(Facing::West),
		5 => Some(Facing::East),
		_ => None,
	}
}

fn horizontal(raw: i32) -> Option<Facing> {
	match raw {
		// Vertical values should be illegal here, but 1.13 data carries them.
		0 | 1 => Some(Facing::North),
		2 => Some(Facing::North),
		3 => Some(Facing::South),
		4 => Some(Facing::West),
		5 => Some(Facing::East),
		_ => None,
	}
}

fn weirdo(raw: i32) -> Option<Facing> {
	match raw {
		0 => Some(Facing::East),
		1 => Some(Facing::West),
		2 => Some(Facing::South),
		3 => Some(Facing::North),
		_ => None,
	}
}

fn legacy_horizontal(raw: i32) -> Option<Facing> {
	match raw {
		0 => Some(Facing::South),
		1 => Some(Facing::West),
		2 => Some(Facing::North),
		3 => Some(Facing::East),
		_ => None,
	}
}

fn coral(raw: i32) -> Option<Facing> {
	match raw {
		0 => Some(Facing::West),
		1 => Some(Facing::East),
		2 => Some(Facing::North),
		3 => Some(Facing::South),
		_ => None,
	}
}

fn parse_facing_value(name: &str, raw: i32, mapping: FacingMapping) -> Result<Facing> {
	mapping(raw).ok_or_else(|| StateError::bad_value(name, raw.to_string(), Some(format!("unmapped facing value {raw}"))))
}

impl BlockStateReader<'_> {
	fn read_mapped_facing(&self, name: &str, mapping: FacingMapping) -> Result<Facing> {
		parse_facing_value(name, self.read_int(name)?, mapping)
	}

	/// Six-way facing from `facing_direction`.
	pub fn read_facing_direction(&self) -> Result<Facing> {
		self.read_mapped_facing(names::FACING_DIRECTION, six_way)
	}

	/// Horizontal facing from `facing_direction`; raw down/up collapse to north.
	pub fn read_horizontal_facing(&self) -> Result<Facing> {
		self.read_mapped_facing(names::FACING_DIRECTION, horizontal)
	}

	/// Horizontal facing from `weirdo_direction` (`0` = east).
	pub fn read_weirdo_horizontal_facing(&self) -> Result<Facing> {
		self.read_mapped_facing(names::WEIRDO_DIRECTION, weirdo)
	}

	/// Horizontal facing from `direction` (`0` = south).
	pub fn read_legacy_horizontal_facing(&self) -> Result<Facing> {
		self.read_mapped_facing(names::DIRECTION, legacy_horizontal)
	}

	/// Wall coral facing from `coral_direction` (`0` = west).
	pub fn read_coral_facing(&self) -> Result<Facing> {
		self.read_mapped_facing(names::CORAL_DIRECTION, coral)
	}

	/// Six-way facing for blocks that cannot point down; down reads as up.
	pub fn read_facing_without_down(&self) -> Result<Facing> {
		match self.read_facing_direction()? {
			// Shouldn't be legal, but 1.13 allows it.
			Facing::Down => Ok(Facing::Up),
			facing => Ok(facing),
		}
	}

	/// Six-way facing for blocks that cannot point up; up reads as down.
	pub fn read_facing_without_up(&self) -> Result<Facing> {
		match self.read_facing_direction()? {
			// Shouldn't be legal, but 1.13 allows it.
			Facing::Up => Ok(Facing::Down),
			facing => Ok(facing),
		}
	}

	/// Axis from the `pillar_axis` string.
	pub fn read_pillar_axis(&self) -> Result<Axis> {
		match self.read_string(names::PILLAR_AXIS)? {
			v::PILLAR_AXIS_X => Ok(Axis::X),
			v::PILLAR_AXIS_Y => Ok(Axis::Y),
			v::PILLAR_AXIS_Z => Ok(Axis::Z),
			other => Err(StateError::bad_value(names::PILLAR_AXIS, other, Some("invalid axis value".to_owned()))),
		}
	}
}

use super::BlockStateReader;
use crate::state::values as v;
use crate::state::{BellAttachmentType, CoralType, DyeColor, Facing, Result, SlabType, StateError, names};

impl BlockStateReader<'_> {
	/// Dye color from `color`.
	pub fn read_color(&self) -> Result<DyeColor> {
		match self.read_string(names::COLOR)? {
			v::COLOR_BLACK => Ok(DyeColor::Black),
			v::COLOR_BLUE => Ok(DyeColor::Blue),
			v::COLOR_BROWN => Ok(DyeColor::Brown),
			v::COLOR_CYAN => Ok(DyeColor::Cyan),
			v::COLOR_GRAY => Ok(DyeColor::Gray),
			v::COLOR_GREEN => Ok(DyeColor::Green),
			v::COLOR_LIGHT_BLUE => Ok(DyeColor::LightBlue),
			v::COLOR_LIME => Ok(DyeColor::Lime),
			v::COLOR_MAGENTA => Ok(DyeColor::Magenta),
			v::COLOR_ORANGE => Ok(DyeColor::Orange),
			v::COLOR_PINK => Ok(DyeColor::Pink),
			v::COLOR_PURPLE => Ok(DyeColor::Purple),
			v::COLOR_RED => Ok(DyeColor::Red),
			// Bedrock still spells light gray the old way.
			v::COLOR_SILVER => Ok(DyeColor::LightGray),
			v::COLOR_WHITE => Ok(DyeColor::White),
			v::COLOR_YELLOW => Ok(DyeColor::Yellow),
			other => Err(StateError::bad_value(names::COLOR, other, None)),
		}
	}

	/// Slab half from the `top_slot_bit` flag.
	pub fn read_slab_position(&self) -> Result<SlabType> {
		Ok(if self.read_bool(names::TOP_SLOT_BIT)? { SlabType::Top } else { SlabType::Bottom })
	}

	/// Torch attachment side from `torch_facing_direction`.
	pub fn read_torch_facing(&self) -> Result<Facing> {
		match self.read_string(names::TORCH_FACING_DIRECTION)? {
			v::TORCH_FACING_DIRECTION_EAST => Ok(Facing::East),
			v::TORCH_FACING_DIRECTION_NORTH => Ok(Facing::North),
			v::TORCH_FACING_DIRECTION_SOUTH => Ok(Facing::South),
			v::TORCH_FACING_DIRECTION_TOP => Ok(Facing::Up),
			// Should be illegal, but 1.13 allows it.
			v::TORCH_FACING_DIRECTION_UNKNOWN => Ok(Facing::Up),
			v::TORCH_FACING_DIRECTION_WEST => Ok(Facing::West),
			other => Err(StateError::bad_value(names::TORCH_FACING_DIRECTION, other, Some("invalid torch facing".to_owned()))),
		}
	}

	/// Coral species from `coral_color`.
	pub fn read_coral_type(&self) -> Result<CoralType> {
		match self.read_string(names::CORAL_COLOR)? {
			v::CORAL_COLOR_BLUE => Ok(CoralType::Tube),
			v::CORAL_COLOR_PINK => Ok(CoralType::Brain),
			v::CORAL_COLOR_PURPLE => Ok(CoralType::Bubble),
			v::CORAL_COLOR_RED => Ok(CoralType::Fire),
			v::CORAL_COLOR_YELLOW => Ok(CoralType::Horn),
			other => Err(StateError::bad_value(names::CORAL_COLOR, other, None)),
		}
	}

	/// Bell mounting from `attachment`.
	pub fn read_bell_attachment_type(&self) -> Result<BellAttachmentType> {
		match self.read_string(names::ATTACHMENT)? {
			v::ATTACHMENT_HANGING => Ok(BellAttachmentType::Ceiling),
			v::ATTACHMENT_STANDING => Ok(BellAttachmentType::Floor),
			v::ATTACHMENT_SIDE => Ok(BellAttachmentType::OneWall),
			v::ATTACHMENT_MULTIPLE => Ok(BellAttachmentType::TwoWalls),
			other => Err(StateError::bad_value(names::ATTACHMENT, other, None)),
		}
	}
}

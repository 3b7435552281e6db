use serde::Serialize;

/// The sixteen dye colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DyeColor {
	/// White.
	White,
	/// Orange.
	Orange,
	/// Magenta.
	Magenta,
	/// Light blue.
	LightBlue,
	/// Yellow.
	Yellow,
	/// Lime.
	Lime,
	/// Pink.
	Pink,
	/// Gray.
	Gray,
	/// Light gray, stored as `silver` in block states.
	LightGray,
	/// Cyan.
	Cyan,
	/// Purple.
	Purple,
	/// Blue.
	Blue,
	/// Brown.
	Brown,
	/// Green.
	Green,
	/// Red.
	Red,
	/// Black.
	Black,
}

impl DyeColor {
	/// All colors in dye metadata order.
	pub const ALL: [DyeColor; 16] = [
		DyeColor::White,
		DyeColor::Orange,
		DyeColor::Magenta,
		DyeColor::LightBlue,
		DyeColor::Yellow,
		DyeColor::Lime,
		DyeColor::Pink,
		DyeColor::Gray,
		DyeColor::LightGray,
		DyeColor::Cyan,
		DyeColor::Purple,
		DyeColor::Blue,
		DyeColor::Brown,
		DyeColor::Green,
		DyeColor::Red,
		DyeColor::Black,
	];

	/// Canonical snake_case name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::White => "white",
			Self::Orange => "orange",
			Self::Magenta => "magenta",
			Self::LightBlue => "light_blue",
			Self::Yellow => "yellow",
			Self::Lime => "lime",
			Self::Pink => "pink",
			Self::Gray => "gray",
			Self::LightGray => "light_gray",
			Self::Cyan => "cyan",
			Self::Purple => "purple",
			Self::Blue => "blue",
			Self::Brown => "brown",
			Self::Green => "green",
			Self::Red => "red",
			Self::Black => "black",
		}
	}

	/// Human-readable name.
	pub fn display_name(self) -> &'static str {
		match self {
			Self::White => "White",
			Self::Orange => "Orange",
			Self::Magenta => "Magenta",
			Self::LightBlue => "Light Blue",
			Self::Yellow => "Yellow",
			Self::Lime => "Lime",
			Self::Pink => "Pink",
			Self::Gray => "Gray",
			Self::LightGray => "Light Gray",
			Self::Cyan => "Cyan",
			Self::Purple => "Purple",
			Self::Blue => "Blue",
			Self::Brown => "Brown",
			Self::Green => "Green",
			Self::Red => "Red",
			Self::Black => "Black",
		}
	}
}

/// Which half of the block space a slab occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabType {
	/// Lower half.
	Bottom,
	/// Upper half.
	Top,
}

impl SlabType {
	/// Canonical snake_case name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bottom => "bottom",
			Self::Top => "top",
		}
	}
}

/// Coral species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoralType {
	/// Stored as `blue`.
	Tube,
	/// Stored as `pink`.
	Brain,
	/// Stored as `purple`.
	Bubble,
	/// Stored as `red`.
	Fire,
	/// Stored as `yellow`.
	Horn,
}

impl CoralType {
	/// Canonical snake_case name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Tube => "tube",
			Self::Brain => "brain",
			Self::Bubble => "bubble",
			Self::Fire => "fire",
			Self::Horn => "horn",
		}
	}
}

/// How a bell is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BellAttachmentType {
	/// Hanging from the block above.
	Ceiling,
	/// Standing on the block below.
	Floor,
	/// Mounted on one wall.
	OneWall,
	/// Spanning two opposite walls.
	TwoWalls,
}

impl BellAttachmentType {
	/// Canonical snake_case name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ceiling => "ceiling",
			Self::Floor => "floor",
			Self::OneWall => "one_wall",
			Self::TwoWalls => "two_walls",
		}
	}
}

use serde::Serialize;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
	/// East-west.
	X,
	/// Up-down.
	Y,
	/// North-south.
	Z,
}

impl Axis {
	/// All axes in `x, y, z` order.
	pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

	/// Canonical lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::X => "x",
			Self::Y => "y",
			Self::Z => "z",
		}
	}
}

/// One of the six axis-aligned block faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
	/// Negative Y.
	Down,
	/// Positive Y.
	Up,
	/// Negative Z.
	North,
	/// Positive Z.
	South,
	/// Negative X.
	West,
	/// Positive X.
	East,
}

impl Facing {
	/// All faces.
	pub const ALL: [Facing; 6] = [Facing::Down, Facing::Up, Facing::North, Facing::South, Facing::West, Facing::East];

	/// Faces perpendicular to the Y axis.
	pub const HORIZONTAL: [Facing; 4] = [Facing::North, Facing::South, Facing::West, Facing::East];

	/// Axis this face lies on.
	pub fn axis(self) -> Axis {
		match self {
			Self::Down | Self::Up => Axis::Y,
			Self::North | Self::South => Axis::Z,
			Self::West | Self::East => Axis::X,
		}
	}

	/// True for faces pointing along the positive direction of their axis.
	pub fn is_positive(self) -> bool {
		matches!(self, Self::Up | Self::South | Self::East)
	}

	/// True for faces perpendicular to the Y axis.
	pub fn is_horizontal(self) -> bool {
		self.axis() != Axis::Y
	}

	/// Face pointing the other way along the same axis.
	pub fn opposite(self) -> Facing {
		match self {
			Self::Down => Self::Up,
			Self::Up => Self::Down,
			Self::North => Self::South,
			Self::South => Self::North,
			Self::West => Self::East,
			Self::East => Self::West,
		}
	}

	/// Canonical lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Down => "down",
			Self::Up => "up",
			Self::North => "north",
			Self::South => "south",
			Self::West => "west",
			Self::East => "east",
		}
	}
}

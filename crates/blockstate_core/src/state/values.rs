//! Literal tokens accepted by string-valued block-state properties.
//!
//! These mirror the external schema verbatim, including legacy names such as
//! `silver`.

/// `attachment`: hangs from the block above.
pub const ATTACHMENT_HANGING: &str = "hanging";
/// `attachment`: spans two opposite walls.
pub const ATTACHMENT_MULTIPLE: &str = "multiple";
/// `attachment`: mounted on a single wall.
pub const ATTACHMENT_SIDE: &str = "side";
/// `attachment`: stands on the block below.
pub const ATTACHMENT_STANDING: &str = "standing";

pub const COLOR_BLACK: &str = "black";
pub const COLOR_BLUE: &str = "blue";
pub const COLOR_BROWN: &str = "brown";
pub const COLOR_CYAN: &str = "cyan";
pub const COLOR_GRAY: &str = "gray";
pub const COLOR_GREEN: &str = "green";
pub const COLOR_LIGHT_BLUE: &str = "light_blue";
pub const COLOR_LIME: &str = "lime";
pub const COLOR_MAGENTA: &str = "magenta";
pub const COLOR_ORANGE: &str = "orange";
pub const COLOR_PINK: &str = "pink";
pub const COLOR_PURPLE: &str = "purple";
pub const COLOR_RED: &str = "red";
/// Legacy name for light gray.
pub const COLOR_SILVER: &str = "silver";
pub const COLOR_WHITE: &str = "white";
pub const COLOR_YELLOW: &str = "yellow";

pub const CORAL_COLOR_BLUE: &str = "blue";
pub const CORAL_COLOR_PINK: &str = "pink";
pub const CORAL_COLOR_PURPLE: &str = "purple";
pub const CORAL_COLOR_RED: &str = "red";
pub const CORAL_COLOR_YELLOW: &str = "yellow";

pub const PILLAR_AXIS_X: &str = "x";
pub const PILLAR_AXIS_Y: &str = "y";
pub const PILLAR_AXIS_Z: &str = "z";

pub const TORCH_FACING_DIRECTION_EAST: &str = "east";
pub const TORCH_FACING_DIRECTION_NORTH: &str = "north";
pub const TORCH_FACING_DIRECTION_SOUTH: &str = "south";
/// Standing on the block below.
pub const TORCH_FACING_DIRECTION_TOP: &str = "top";
/// Written by older versions; decoded as [`TORCH_FACING_DIRECTION_TOP`].
pub const TORCH_FACING_DIRECTION_UNKNOWN: &str = "unknown";
pub const TORCH_FACING_DIRECTION_WEST: &str = "west";

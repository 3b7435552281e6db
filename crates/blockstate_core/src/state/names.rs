//! Property names as they appear in the Bedrock `states` compound.

/// Bell mounting (`hanging`, `standing`, `side`, `multiple`).
pub const ATTACHMENT: &str = "attachment";
/// Coral fan and coral block variant color.
pub const CORAL_COLOR: &str = "coral_color";
/// Wall coral fan facing, in its own integer convention.
pub const CORAL_DIRECTION: &str = "coral_direction";
/// Dye color of wool, carpet, concrete and friends.
pub const COLOR: &str = "color";
/// Legacy horizontal facing (`0` = south).
pub const DIRECTION: &str = "direction";
/// Six-way facing (`0` = down).
pub const FACING_DIRECTION: &str = "facing_direction";
/// Log and pillar orientation.
pub const PILLAR_AXIS: &str = "pillar_axis";
/// Upper-half flag of slabs.
pub const TOP_SLOT_BIT: &str = "top_slot_bit";
/// Torch attachment side.
pub const TORCH_FACING_DIRECTION: &str = "torch_facing_direction";
/// Horizontal facing used by a handful of blocks (`0` = east).
pub const WEIRDO_DIRECTION: &str = "weirdo_direction";

mod data;
mod describe;
mod error;
mod facing;
mod reader;
mod tag;
mod variant;

/// Bedrock block-state property name constants.
pub mod names;
/// Accepted literal tokens for string-valued block-state properties.
#[allow(missing_docs)]
pub mod values;

/// Block-state envelope (name, states, version).
pub use data::BlockStateData;
/// Whole-compound decode pass and its options.
pub use describe::{DecodedValue, DescribeOptions, DescribedProperty, PropertyOutcome, describe_states};
/// Error and result aliases.
pub use error::{Result, StateError};
/// Direction and axis domain types.
pub use facing::{Axis, Facing};
/// Typed accessor wrapper over one states compound.
pub use reader::BlockStateReader;
/// Property tree types.
pub use tag::{CompoundTag, Tag, TagKind};
/// Enumerated material and attachment variants.
pub use variant::{BellAttachmentType, CoralType, DyeColor, SlabType};

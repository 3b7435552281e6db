/// Whole-compound describe command.
pub mod describe;
/// Single-accessor read command.
pub mod read;
/// Shared loading and rendering helpers.
pub(crate) mod util;

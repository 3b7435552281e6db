//! Typed decoding of Bedrock block-state property trees.

/// Property tree model, block-state reader, semantic decoders, and error taxonomy.
pub mod state;

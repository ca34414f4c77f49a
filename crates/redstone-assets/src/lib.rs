//! Redstone Assets -- Read-only access to an unpacked Minecraft asset pack.
//!
//! This crate knows how to find and parse the two JSON file families the
//! designer needs from the game client:
//!
//! - **Blockstates** (`assets/<ns>/blockstates/<block>.json`): map a block's
//!   property values to one or more models, either as keyed `variants` or as
//!   conditional `multipart` cases.
//! - **Block models** (`assets/<ns>/models/block/<model>.json`): cuboid
//!   elements, face textures and a `parent` link used for inheritance.
//!
//! Model inheritance is flattened by [`ModelResolver`](resolve::ModelResolver).
//!
//! # Quick Start
//!
//! ```no_run
//! use redstone_assets::prelude::*;
//!
//! let pack = AssetPack::at_path("assets/minecraft/");
//! let states = pack.load_blockstates("repeater")?;
//! assert!(states.is_variants());
//!
//! let chain = pack.load_model_recursive(&"block/repeater_1tick".parse()?)?;
//! let model = ModelResolver::resolve(chain.iter());
//! assert!(model.elements.is_some());
//! # Ok::<(), redstone_assets::AssetError>(())
//! ```

#![deny(unsafe_code)]

pub mod location;
pub mod pack;
pub mod resolve;
pub mod schemas;

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while locating, reading, or interpreting pack files.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The requested file does not exist in the pack.
    #[error("{kind} '{name}' not found at {}", path.display())]
    NotFound {
        kind: &'static str,
        name: String,
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected schema.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A resource location string could not be parsed.
    #[error("invalid resource location '{input}': {reason}")]
    InvalidLocation { input: String, reason: &'static str },

    /// A blockstate variant key is not a `prop=value` list.
    #[error("invalid variant key '{key}': {reason}")]
    InvalidVariantKey { key: String, reason: &'static str },

    /// A model's parent chain loops back on itself or is unreasonably deep.
    #[error("model parent chain starting at '{model}' is cyclic or too deep: [{chain}]")]
    ParentCycle { model: String, chain: String },

    /// A `#variable` texture reference never reached a concrete texture.
    #[error("texture reference '{reference}' could not be resolved: {reason}")]
    UnresolvedTexture {
        reference: String,
        reason: &'static str,
    },
}

/// Result alias for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::location::ResourceLocation;
    pub use crate::pack::AssetPack;
    pub use crate::resolve::ModelResolver;
    pub use crate::schemas::blockstates::{
        BlockStates, Case, Condition, ModelProperties, StateValue, Variant, VariantKey,
    };
    pub use crate::schemas::models::{BlockFace, Element, ElementFace, ElementRotation, Model};
    pub use crate::AssetError;
}

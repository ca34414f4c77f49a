//! Redstone Blocks -- Block states, model selection, and block geometry.
//!
//! Built on [`redstone_assets`], this crate answers the questions the
//! designer asks about a block before it can be shown or placed:
//!
//! - Which properties does the block have, and what is its initial state?
//!   ([`state::BlockState`])
//! - Which model(s) does a given state use? ([`state::BlockState::active_variants`],
//!   [`variant::choose_model`])
//! - What box does it occupy, and how is its outline drawn?
//!   ([`bounding_box`], [`geometry`])
//! - May it be placed here? ([`behavior`])
//!
//! The [`palette`] lists the blocks offered to the user and the [`catalog`]
//! precomputes all of the above for every palette entry.
//!
//! # Quick Start
//!
//! ```no_run
//! use redstone_assets::prelude::*;
//! use redstone_blocks::prelude::*;
//!
//! let pack = AssetPack::at_path("assets/minecraft/");
//! let mut state = BlockState::initial_state_for(&pack, "repeater")?;
//! let states = pack.load_blockstates("repeater")?;
//! state.set_facing(&states, BlockFace::West)?;
//!
//! let entry = describe(&pack, &state, 0)?;
//! assert_eq!(entry.bounding_box.max.y, 2.0);
//! # Ok::<(), redstone_blocks::BlockError>(())
//! ```

#![deny(unsafe_code)]

pub mod behavior;
pub mod bounding_box;
pub mod catalog;
pub mod geometry;
pub mod palette;
pub mod state;
pub mod variant;

use redstone_assets::AssetError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by block state and model operations.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// Reading or parsing a pack file failed.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A state string could not be parsed.
    #[error("invalid block state '{input}' for {block_type}: {reason}")]
    InvalidState {
        block_type: String,
        input: String,
        reason: String,
    },

    /// The block has no property with this name.
    #[error("no values for property '{prop}' on block type '{block_type}'")]
    UnknownProperty { block_type: String, prop: String },

    /// The property exists but does not accept this value.
    #[error("setting {prop}={value} is not allowed for block type '{block_type}'")]
    DisallowedValue {
        block_type: String,
        prop: String,
        value: String,
    },

    /// No variant key or multipart case matched the state.
    #[error("no variant found for block state {state}")]
    NoMatchingVariant { state: String },

    /// A weighted variant list is empty or all weights are zero.
    #[error("variant for {block_type} has no selectable model (total weight 0)")]
    EmptyVariant { block_type: String },

    /// A resolved model has no elements to measure.
    #[error("block model '{model}' has no elements")]
    NoElements { model: String },
}

/// Result alias for block operations.
pub type Result<T> = std::result::Result<T, BlockError>;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::behavior::{
        is_flat_surface, requires_flat_surface, validate_placement, InvalidPlacement,
    };
    pub use crate::bounding_box::{bounding_box_for_elements, bounding_box_for_model};
    pub use crate::catalog::{describe, BlockCatalog, CatalogEntry, CatalogSnapshot};
    pub use crate::geometry::{
        aligned_to_axis, nearest_face, Aabb, Bounds, IntVec3, Vec3, BLOCKS, PIXELS, WORLD_SIZE,
    };
    pub use crate::palette::{Palette, PaletteEntry, BLOCK_PALETTE};
    pub use crate::state::BlockState;
    pub use crate::variant::choose_model;
    pub use crate::BlockError;
}

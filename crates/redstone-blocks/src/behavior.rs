//! Placement rules.
//!
//! Dust, torches and diodes need a flat, solid top surface beneath them.
//! These checks take the neighbouring blocks through a lookup so that any
//! caller-side block store can answer them.

use redstone_assets::schemas::blockstates::StateValue;

use crate::geometry::{Bounds, IntVec3};
use crate::state::BlockState;

/// Why a block cannot be placed at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPlacement {
    #[error("position is outside the design area")]
    OutOfBounds,
    #[error("position is already occupied")]
    PositionOccupied,
    #[error("block needs a flat surface beneath it")]
    NotAFlatSurface,
}

/// True for blocks that may only sit on top of a flat surface.
pub fn requires_flat_surface(state: &BlockState) -> bool {
    matches!(
        state.block_type(),
        "redstone_torch" | "redstone_wire" | "repeater" | "comparator"
    )
}

/// True if the block's top face is a full, flat surface that dust and
/// diodes may be placed on: a full block, or a top or double slab.
pub fn is_flat_surface(state: &BlockState) -> bool {
    match state.block_type() {
        "iron_block" | "sandstone" | "stone" | "smooth_stone" | "redstone_block"
        | "redstone_lamp" | "gold_block" | "glass" => true,
        "stone_slab" | "smooth_stone_slab" | "sandstone_slab" => {
            matches!(state.get("type"), Some(StateValue::String(s)) if s == "top" || s == "double")
        }
        _ => false,
    }
}

/// Check whether `state` may be placed at `pos`.
///
/// `block_at` reports what currently occupies a position, if anything.
pub fn validate_placement<'a, F>(
    bounds: &Bounds,
    pos: IntVec3,
    state: &BlockState,
    block_at: F,
) -> Result<(), InvalidPlacement>
where
    F: Fn(IntVec3) -> Option<&'a BlockState>,
{
    if !bounds.contains(pos) {
        return Err(InvalidPlacement::OutOfBounds);
    }
    if block_at(pos).is_some() {
        return Err(InvalidPlacement::PositionOccupied);
    }
    if requires_flat_surface(state) && !block_at(pos + IntVec3::NEG_Y).is_some_and(is_flat_surface)
    {
        return Err(InvalidPlacement::NotAFlatSurface);
    }
    Ok(())
}

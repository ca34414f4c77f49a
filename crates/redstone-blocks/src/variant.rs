//! Deterministic choice among weighted model alternatives.
//!
//! Some blocks list several models for one state (stone, for example, mixes
//! mirrored textures). The game picks one at random per position; the designer
//! picks one from a seeded [`Pcg32`] so the same seed always shows the same
//! model.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use redstone_assets::schemas::blockstates::{ModelProperties, Variant};

use crate::BlockError;

/// Pick one model from `variant`. A single model is returned as-is;
/// a list is sampled proportionally to each entry's `weight`.
pub fn choose_model<'v>(
    block_type: &str,
    variant: &'v Variant,
    seed: u64,
) -> crate::Result<&'v ModelProperties> {
    let candidates = variant.models();
    if let [only] = candidates {
        return Ok(only);
    }
    let total: u64 = candidates.iter().map(|m| u64::from(m.weight)).sum();
    if total == 0 {
        return Err(BlockError::EmptyVariant {
            block_type: block_type.to_owned(),
        });
    }
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut roll = rng.gen_range(0..total);
    for candidate in candidates {
        let weight = u64::from(candidate.weight);
        if roll < weight {
            return Ok(candidate);
        }
        roll -= weight;
    }
    // `roll < total` guarantees a hit above.
    Err(BlockError::EmptyVariant {
        block_type: block_type.to_owned(),
    })
}

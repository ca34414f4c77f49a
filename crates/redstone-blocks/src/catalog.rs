//! Precomputed block descriptions with a BLAKE3 content hash.
//!
//! A [`CatalogEntry`] gathers everything the designer needs to show and place
//! one block state: its chosen models and their rotations, the resolved
//! bounding box, and every texture file the models reference.
//!
//! [`BlockCatalog::snapshot`] serializes the catalog with a BLAKE3 digest so
//! two packs (or two versions of one pack) can be compared by hash alone.
//!
//! # What Is NOT Included
//!
//! - **Model elements** -- only their combined box is kept.
//! - **Texture pixels** -- entries hold texture locations, not image data.

use std::collections::BTreeSet;

use redstone_assets::location::ResourceLocation;
use redstone_assets::pack::AssetPack;
use redstone_assets::resolve::ModelResolver;
use redstone_assets::schemas::blockstates::ModelProperties;
use redstone_assets::schemas::Model;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::behavior::{is_flat_surface, requires_flat_surface};
use crate::bounding_box::bounding_box_for_model;
use crate::geometry::Aabb;
use crate::palette::Palette;
use crate::state::BlockState;
use crate::variant::choose_model;
use crate::BlockError;

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// Everything known about one block state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub block_type: String,
    pub state: BlockState,
    /// One model per active variant, already chosen among weighted lists.
    pub models: Vec<ModelProperties>,
    /// Union of every model's box after its blockstate rotation.
    pub bounding_box: Aabb,
    /// Concrete texture locations, sorted.
    pub textures: BTreeSet<String>,
    pub requires_flat_surface: bool,
    pub is_flat_surface: bool,
}

/// Load a model and its parents, then flatten them.
pub fn load_resolved_model(pack: &AssetPack, model: &str) -> crate::Result<Model> {
    let location: ResourceLocation = model.parse()?;
    let chain = pack.load_model_recursive(&location)?;
    Ok(ModelResolver::resolve(chain.iter()))
}

/// Describe `state`: pick its models with `seed`, resolve them, and measure
/// them.
pub fn describe(pack: &AssetPack, state: &BlockState, seed: u64) -> crate::Result<CatalogEntry> {
    let block_type = state.block_type();
    let states = pack.load_blockstates(block_type)?;
    let variants = state.active_variants(&states)?;

    let mut models = Vec::with_capacity(variants.len());
    let mut bounding_box: Option<Aabb> = None;
    let mut textures = BTreeSet::new();

    for (i, variant) in variants.iter().enumerate() {
        let chosen = choose_model(block_type, variant, seed.wrapping_add(i as u64))?;
        let model = load_resolved_model(pack, &chosen.model)?;
        let elements = model
            .elements
            .as_deref()
            .ok_or_else(|| BlockError::NoElements {
                model: chosen.model.clone(),
            })?;
        let part = bounding_box_for_model(block_type, elements)?.rotated(chosen.x, chosen.y);
        bounding_box = Some(match bounding_box {
            Some(acc) => acc.union(&part),
            None => part,
        });
        textures.extend(model.face_textures()?);
        models.push(chosen.clone());
    }

    let bounding_box = bounding_box.ok_or_else(|| BlockError::NoMatchingVariant {
        state: state.to_string(),
    })?;
    debug!(state = %state, models = models.len(), "described block state");

    Ok(CatalogEntry {
        block_type: block_type.to_owned(),
        state: state.clone(),
        models,
        bounding_box,
        textures,
        requires_flat_surface: requires_flat_surface(state),
        is_flat_surface: is_flat_surface(state),
    })
}

// ---------------------------------------------------------------------------
// BlockCatalog
// ---------------------------------------------------------------------------

/// Descriptions of every palette entry's initial state.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockCatalog {
    seed: u64,
    entries: Vec<CatalogEntry>,
}

impl BlockCatalog {
    /// Describe each palette entry in order. Fails on the first entry that
    /// cannot be resolved.
    pub fn build(pack: &AssetPack, palette: &Palette, seed: u64) -> crate::Result<Self> {
        let entries = palette
            .entries()
            .iter()
            .map(|entry| describe(pack, &entry.initial_state, seed))
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(Self { seed, entries })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All texture locations referenced by any entry.
    pub fn textures(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.textures.iter().map(String::as_str))
            .collect()
    }

    /// Capture a hashed, serializable snapshot.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            seed: self.seed,
            hash: compute_hash(self.seed, &self.entries),
            entries: self.entries.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogSnapshot
// ---------------------------------------------------------------------------

/// A serializable catalog with a BLAKE3 hex digest of its contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub seed: u64,
    pub entries: Vec<CatalogEntry>,
    /// BLAKE3 hex digest (64 lowercase hex chars) of the seed and entries.
    pub hash: String,
}

impl CatalogSnapshot {
    /// Recompute the digest and compare it with the stored one.
    pub fn verify(&self) -> bool {
        compute_hash(self.seed, &self.entries) == self.hash
    }
}

/// BLAKE3 hex digest of the canonical JSON encoding of the seed and entries.
/// The hash field itself is not included.
fn compute_hash(seed: u64, entries: &[CatalogEntry]) -> String {
    #[derive(Serialize)]
    struct HashableCatalog<'a> {
        seed: u64,
        entries: &'a [CatalogEntry],
    }

    let json_bytes = serde_json::to_vec(&HashableCatalog { seed, entries })
        .expect("catalog entries should always be JSON-serializable");

    blake3::hash(&json_bytes).to_hex().to_string()
}

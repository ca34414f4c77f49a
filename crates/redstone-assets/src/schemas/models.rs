//! Block model files: cuboid elements, face textures, and inheritance.
//!
//! Coordinates are in model pixels; a full block spans `0.0..=16.0` on every
//! axis. Textures on faces are either a concrete location
//! (`minecraft:block/repeater`) or a `#variable` looked up in the model's
//! `textures` map, possibly through several hops.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::location::ResourceLocation;
use crate::AssetError;

// ---------------------------------------------------------------------------
// BlockFace / Axis
// ---------------------------------------------------------------------------

/// One of the six faces of a cuboid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockFace {
    #[serde(alias = "bottom")]
    Down,
    #[serde(alias = "top")]
    Up,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    /// All faces in the order the game iterates them.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Down,
        BlockFace::Up,
        BlockFace::North,
        BlockFace::South,
        BlockFace::West,
        BlockFace::East,
    ];

    /// The lowercase name used in blockstate properties (`facing=west`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockFace::Down => "down",
            BlockFace::Up => "up",
            BlockFace::North => "north",
            BlockFace::South => "south",
            BlockFace::West => "west",
            BlockFace::East => "east",
        }
    }

    /// Unit normal in model space. North is -z, east is +x.
    pub fn normal(&self) -> [f32; 3] {
        match self {
            BlockFace::Down => [0.0, -1.0, 0.0],
            BlockFace::Up => [0.0, 1.0, 0.0],
            BlockFace::North => [0.0, 0.0, -1.0],
            BlockFace::South => [0.0, 0.0, 1.0],
            BlockFace::West => [-1.0, 0.0, 0.0],
            BlockFace::East => [1.0, 0.0, 0.0],
        }
    }
}

/// Rotation axis for a tilted element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// A rotation applied to a single element (torches on a repeater, for
/// instance, are upright but some models tilt elements by 22.5 degrees).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRotation {
    pub origin: [f32; 3],
    pub axis: Axis,
    pub angle: f32,
    #[serde(default)]
    pub rescale: bool,
}

/// Texture and UV mapping for one face of an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementFace {
    /// `[u1, v1, u2, v2]` in texture pixels. Derived from the element bounds
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv: Option<[f32; 4]>,
    /// Texture location or `#variable`.
    pub texture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cullface: Option<BlockFace>,
    #[serde(default)]
    pub rotation: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tintindex: Option<i32>,
}

/// An axis-aligned cuboid in model pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub from: [f32; 3],
    pub to: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<ElementRotation>,
    #[serde(default = "default_true")]
    pub shade: bool,
    #[serde(default)]
    pub faces: BTreeMap<BlockFace, ElementFace>,
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A block model as stored on disk, or the flattened result of resolving a
/// parent chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(
        default,
        rename = "ambientocclusion",
        skip_serializing_if = "Option::is_none"
    )]
    pub ambient_occlusion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textures: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
}

impl Model {
    /// Follow `#variable` references until a concrete texture location.
    ///
    /// A reference that is already concrete is returned unchanged.
    pub fn resolve_texture(&self, reference: &str) -> crate::Result<String> {
        let empty = BTreeMap::new();
        let textures = self.textures.as_ref().unwrap_or(&empty);
        let mut current = reference;
        // Each hop must visit a distinct variable, so more hops than
        // variables means a cycle.
        for _ in 0..=textures.len() {
            let Some(var) = current.strip_prefix('#') else {
                return Ok(current.to_owned());
            };
            current = textures
                .get(var)
                .map(String::as_str)
                .ok_or_else(|| AssetError::UnresolvedTexture {
                    reference: reference.to_owned(),
                    reason: "undefined texture variable",
                })?;
        }
        Err(AssetError::UnresolvedTexture {
            reference: reference.to_owned(),
            reason: "texture variables form a cycle",
        })
    }

    /// Every concrete texture referenced by the model's element faces, in
    /// canonical `namespace:path` form.
    pub fn face_textures(&self) -> crate::Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();
        for element in self.elements.iter().flatten() {
            for face in element.faces.values() {
                let location: ResourceLocation = self.resolve_texture(&face.texture)?.parse()?;
                out.insert(location.to_string());
            }
        }
        Ok(out)
    }
}

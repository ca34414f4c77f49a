//! Integer block positions and floating-point model-space boxes.
//!
//! Two coordinate systems meet here:
//!
//! - **Block grid** ([`IntVec3`], [`Bounds`]): one unit per block.
//! - **Model space** ([`Vec3`], [`Aabb`]): one unit per model pixel, so a
//!   full block spans `0.0..=16.0`. [`BLOCKS`] converts between the two.

use std::ops::{Add, Mul, Neg, Sub};

use redstone_assets::schemas::models::BlockFace;
use serde::{Deserialize, Serialize};

/// One model pixel in model-space units.
pub const PIXELS: f32 = 1.0;

/// One block edge in model-space units. A block is 16 pixels.
pub const BLOCKS: f32 = 16.0 * PIXELS;

/// Edge length of the default design area, in blocks.
pub const WORLD_SIZE: i32 = 16;

/// Distance the outline is pushed outside the box it highlights.
pub const OUTLINE_OFFSET: f32 = 0.05;

// ---------------------------------------------------------------------------
// IntVec3
// ---------------------------------------------------------------------------

/// A block position on the integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IntVec3 {
    pub const ZERO: Self = IntVec3 { x: 0, y: 0, z: 0 };
    pub const ONE: Self = IntVec3 { x: 1, y: 1, z: 1 };
    pub const NEG_Y: Self = IntVec3 { x: 0, y: -1, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Add for IntVec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        IntVec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<i32> for IntVec3 {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        IntVec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An inclusive box of block positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: IntVec3,
    pub high: IntVec3,
}

impl Bounds {
    pub fn new(low: IntVec3, high: IntVec3) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, pos: IntVec3) -> bool {
        (self.low.x..=self.high.x).contains(&pos.x)
            && (self.low.y..=self.high.y).contains(&pos.y)
            && (self.low.z..=self.high.z).contains(&pos.z)
    }
}

impl Default for Bounds {
    /// `(0, 0, 0)..=(16, 16, 16)`.
    fn default() -> Self {
        Self::new(IntVec3::ZERO, IntVec3::ONE * WORLD_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Vec3
// ---------------------------------------------------------------------------

/// A point or direction in model space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Self = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Self = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Self = Vec3::new(0.0, 0.0, 1.0);
    pub const AXES: [Self; 3] = [Self::X, Self::Y, Self::Z];

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn min(self, rhs: Self) -> Self {
        Vec3::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    pub fn max(self, rhs: Self) -> Self {
        Vec3::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

/// Snap `v` to the closest of the six signed axis unit vectors.
///
/// Ties go to the earlier axis in `+X, +Y, +Z, -X, -Y, -Z` order.
pub fn aligned_to_axis(v: Vec3) -> Vec3 {
    let positive = Vec3::AXES.into_iter();
    let negative = Vec3::AXES.into_iter().map(|axis| -axis);
    positive
        .chain(negative)
        .map(|axis| (axis, axis.dot(v)))
        .fold((Vec3::X, f32::NEG_INFINITY), |best, pair| {
            if pair.1 > best.1 {
                pair
            } else {
                best
            }
        })
        .0
}

/// The block face whose outward normal is closest to `v`.
pub fn nearest_face(v: Vec3) -> BlockFace {
    let axis = aligned_to_axis(v);
    BlockFace::ALL
        .into_iter()
        .find(|face| Vec3::from(face.normal()) == axis)
        .unwrap_or(BlockFace::North)
}

// ---------------------------------------------------------------------------
// Aabb
// ---------------------------------------------------------------------------

/// An axis-aligned box in model space. `min` is componentwise <= `max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two opposite corners in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The full-block box `0..16` on every axis.
    pub fn full_block() -> Self {
        Self::from_corners(Vec3::ZERO, Vec3::ONE * BLOCKS)
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Apply a blockstate rotation: `x_deg` about the x-axis, then `y_deg`
    /// about the y-axis, both around the block centre.
    ///
    /// Angles are snapped to quarter turns. Positive `y` turns north toward
    /// east; positive `x` turns north toward down.
    pub fn rotated(&self, x_deg: i32, y_deg: i32) -> Aabb {
        let centre = Vec3::ONE * (BLOCKS / 2.0);
        let rotate = |p: Vec3| {
            let mut q = p - centre;
            for _ in 0..quarter_turns(x_deg) {
                q = Vec3::new(q.x, q.z, -q.y);
            }
            for _ in 0..quarter_turns(y_deg) {
                q = Vec3::new(-q.z, q.y, q.x);
            }
            q + centre
        };
        Aabb::from_corners(rotate(self.min), rotate(self.max))
    }

    /// The twelve edges of the box, pushed outward by `delta` so that lines
    /// drawn along them sit just outside the faces.
    pub fn outline(&self, delta: f32) -> [(Vec3, Vec3); 12] {
        let lo = self.min - Vec3::ONE * delta;
        let hi = self.max + Vec3::ONE * delta;
        let c = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
        [
            // lower square
            (c(lo.x, lo.y, lo.z), c(lo.x, lo.y, hi.z)),
            (c(lo.x, lo.y, hi.z), c(hi.x, lo.y, hi.z)),
            (c(hi.x, lo.y, hi.z), c(hi.x, lo.y, lo.z)),
            (c(hi.x, lo.y, lo.z), c(lo.x, lo.y, lo.z)),
            // upper square
            (c(lo.x, hi.y, lo.z), c(lo.x, hi.y, hi.z)),
            (c(lo.x, hi.y, hi.z), c(hi.x, hi.y, hi.z)),
            (c(hi.x, hi.y, hi.z), c(hi.x, hi.y, lo.z)),
            (c(hi.x, hi.y, lo.z), c(lo.x, hi.y, lo.z)),
            // verticals
            (c(lo.x, lo.y, lo.z), c(lo.x, hi.y, lo.z)),
            (c(lo.x, lo.y, hi.z), c(lo.x, hi.y, hi.z)),
            (c(hi.x, lo.y, lo.z), c(hi.x, hi.y, lo.z)),
            (c(hi.x, lo.y, hi.z), c(hi.x, hi.y, hi.z)),
        ]
    }
}

fn quarter_turns(deg: i32) -> u32 {
    ((deg / 90).rem_euclid(4)) as u32
}

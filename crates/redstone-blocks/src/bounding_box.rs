//! The box used for cursor interaction with a block.
//!
//! The box is what the cursor hits and what the hover outline traces. In most
//! cases it is inferred from the model's elements, but some blocks use an
//! ad-hoc box: a repeater's torches stick up above the slab, yet only the slab
//! is meant to be clickable.

use redstone_assets::schemas::models::Element;

use crate::geometry::{Aabb, Vec3};
use crate::BlockError;

/// Blocks whose box is their first element (the base slab) only.
const SLAB_ONLY: &[&str] = &["repeater", "comparator"];

/// Bounding box for a block's resolved model elements, in model pixels.
pub fn bounding_box_for_model(block_type: &str, elements: &[Element]) -> crate::Result<Aabb> {
    let elements = match elements {
        [first, ..] if SLAB_ONLY.contains(&block_type) => std::slice::from_ref(first),
        all => all,
    };
    bounding_box_for_elements(elements).ok_or_else(|| BlockError::NoElements {
        model: block_type.to_owned(),
    })
}

/// A box that encloses every element, or `None` if there are none.
pub fn bounding_box_for_elements(elements: &[Element]) -> Option<Aabb> {
    elements
        .iter()
        .map(|e| Aabb::from_corners(Vec3::from(e.from), Vec3::from(e.to)))
        .reduce(|acc, b| acc.union(&b))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn element(from: [f32; 3], to: [f32; 3]) -> Element {
        Element {
            from,
            to,
            rotation: None,
            shade: true,
            faces: BTreeMap::new(),
        }
    }

    fn repeater_elements() -> Vec<Element> {
        vec![
            element([0.0, 0.0, 0.0], [16.0, 2.0, 16.0]),
            element([7.0, 2.0, 2.0], [9.0, 7.0, 4.0]),
            element([7.0, 2.0, 6.0], [9.0, 7.0, 8.0]),
        ]
    }

    #[test]
    fn repeater_uses_its_slab() {
        let actual = bounding_box_for_model("repeater", &repeater_elements()).unwrap();
        let expected = Aabb::from_corners(Vec3::ZERO, Vec3::new(16.0, 2.0, 16.0));
        assert_eq!(actual, expected);
    }

    #[test]
    fn other_blocks_enclose_every_element() {
        let actual = bounding_box_for_model("something", &repeater_elements()).unwrap();
        assert_eq!(actual.max.y, 7.0);
    }

    #[test]
    fn torch_box_is_thin() {
        let torch = [element([7.0, 0.0, 7.0], [9.0, 10.0, 9.0])];
        let b = bounding_box_for_model("redstone_torch", &torch).unwrap();
        assert_eq!(b.size(), Vec3::new(2.0, 10.0, 2.0));
    }

    #[test]
    fn no_elements_is_an_error() {
        assert!(bounding_box_for_elements(&[]).is_none());
        assert!(matches!(
            bounding_box_for_model("air", &[]),
            Err(BlockError::NoElements { .. })
        ));
    }
}

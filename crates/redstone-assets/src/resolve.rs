//! Flattening of model parent chains.
//!
//! A model inherits from its parent as follows:
//!
//! - `textures`: merged, entries in the child override the parent's.
//! - `elements`: taken whole from the nearest model that defines any.
//! - `ambientocclusion`: taken from the nearest model that sets it.
//!
//! The resolved model has no `parent`.

use std::collections::BTreeMap;

use crate::schemas::Model;

/// Stateless resolver for model inheritance.
pub struct ModelResolver;

impl ModelResolver {
    /// Merge a child-first chain (as returned by
    /// [`AssetPack::load_model_recursive`](crate::pack::AssetPack::load_model_recursive))
    /// into a single model.
    pub fn resolve<'a>(chain: impl IntoIterator<Item = &'a Model>) -> Model {
        let mut textures: BTreeMap<String, String> = BTreeMap::new();
        let mut elements = None;
        let mut ambient_occlusion = None;

        for model in chain {
            if let Some(own) = &model.textures {
                for (var, value) in own {
                    textures.entry(var.clone()).or_insert_with(|| value.clone());
                }
            }
            if elements.is_none() {
                elements = model.elements.clone();
            }
            if ambient_occlusion.is_none() {
                ambient_occlusion = model.ambient_occlusion;
            }
        }

        Model {
            parent: None,
            ambient_occlusion,
            textures: (!textures.is_empty()).then_some(textures),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::models::Element;

    fn element(to_y: f32) -> Element {
        Element {
            from: [0.0, 0.0, 0.0],
            to: [16.0, to_y, 16.0],
            rotation: None,
            shade: true,
            faces: BTreeMap::new(),
        }
    }

    fn textures(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn child_textures_override_parent() {
        let child = Model {
            parent: Some("block/template".into()),
            textures: textures(&[("top", "block/repeater_on")]),
            ..Default::default()
        };
        let parent = Model {
            textures: textures(&[("top", "block/repeater"), ("particle", "#top")]),
            elements: Some(vec![element(2.0)]),
            ..Default::default()
        };
        let resolved = ModelResolver::resolve([&child, &parent]);
        let tex = resolved.textures.as_ref().unwrap();
        assert_eq!(tex["top"], "block/repeater_on");
        assert_eq!(tex["particle"], "#top");
        assert_eq!(resolved.resolve_texture("#particle").unwrap(), "block/repeater_on");
        assert_eq!(resolved.elements.unwrap().len(), 1);
        assert!(resolved.parent.is_none());
    }

    #[test]
    fn nearest_elements_win() {
        let child = Model {
            elements: Some(vec![element(7.0)]),
            ..Default::default()
        };
        let parent = Model {
            elements: Some(vec![element(2.0), element(4.0)]),
            ambient_occlusion: Some(false),
            ..Default::default()
        };
        let resolved = ModelResolver::resolve([&child, &parent]);
        let elements = resolved.elements.unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].to[1], 7.0);
        assert_eq!(resolved.ambient_occlusion, Some(false));
    }

    #[test]
    fn empty_chain_resolves_to_empty_model() {
        let resolved = ModelResolver::resolve(std::iter::empty());
        assert_eq!(resolved, Model::default());
    }
}

//! Filesystem access to an unpacked asset pack.
//!
//! The pack root is the directory a client jar was extracted into. Files are
//! found under `<root>/assets/<namespace>/`:
//!
//! ```text
//! <root>/assets/minecraft/blockstates/repeater.json
//! <root>/assets/minecraft/models/block/repeater_2tick.json
//! <root>/assets/minecraft/textures/block/repeater.png
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::location::{ResourceLocation, DEFAULT_NAMESPACE};
use crate::schemas::{BlockStates, Model};
use crate::AssetError;

/// Upper bound on parent hops while loading a model chain. Vanilla chains are
/// at most four or five deep.
pub const MAX_PARENT_DEPTH: usize = 32;

/// Handle to an unpacked asset pack on disk.
///
/// Cheap to clone; holds only the root path and the namespace used for
/// unqualified block names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPack {
    root: PathBuf,
    namespace: String,
}

impl AssetPack {
    /// Open the pack rooted at `root`. Nothing is read until a load call.
    pub fn at_path(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }

    /// Use `namespace` for block types passed without one.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_owned();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn namespace_dir(&self, namespace: &str) -> PathBuf {
        self.root.join("assets").join(namespace)
    }

    /// Directory holding blockstate files for the default namespace.
    pub fn blockstates_dir(&self) -> PathBuf {
        self.namespace_dir(&self.namespace).join("blockstates")
    }

    /// True if the pack has a blockstates directory.
    pub fn exists(&self) -> bool {
        self.blockstates_dir().is_dir()
    }

    // -- paths ---------------------------------------------------------------

    pub fn blockstates_path(&self, block_type: &str) -> PathBuf {
        self.blockstates_dir().join(format!("{block_type}.json"))
    }

    pub fn model_path(&self, location: &ResourceLocation) -> PathBuf {
        self.namespace_dir(location.namespace())
            .join("models")
            .join(format!("{}.json", location.model_path()))
    }

    pub fn texture_path(&self, location: &ResourceLocation) -> PathBuf {
        self.namespace_dir(location.namespace())
            .join("textures")
            .join(format!("{}.png", location.path()))
    }

    // -- loading -------------------------------------------------------------

    /// Load `blockstates/<block_type>.json`.
    pub fn load_blockstates(&self, block_type: &str) -> crate::Result<BlockStates> {
        let path = self.blockstates_path(block_type);
        debug!(block = %block_type, path = %path.display(), "loading blockstates");
        read_json("blockstates", block_type, &path)
    }

    /// Load a single model file without following its parent.
    pub fn load_model(&self, location: &ResourceLocation) -> crate::Result<Model> {
        let path = self.model_path(location);
        debug!(model = %location, path = %path.display(), "loading model");
        read_json("model", &location.to_string(), &path)
    }

    /// Load a model and all of its ancestors, child first.
    ///
    /// Built-in parents (`builtin/generated`, `builtin/entity`) have no file
    /// and terminate the chain.
    pub fn load_model_recursive(&self, location: &ResourceLocation) -> crate::Result<Vec<Model>> {
        let mut chain = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut names: Vec<String> = Vec::new();
        let mut next = Some(location.clone());

        while let Some(current) = next.take() {
            let key = (current.namespace().to_owned(), current.model_path());
            names.push(current.to_string());
            if !seen.insert(key) || chain.len() >= MAX_PARENT_DEPTH {
                return Err(AssetError::ParentCycle {
                    model: location.to_string(),
                    chain: names.join(" -> "),
                });
            }
            let model = self.load_model(&current)?;
            next = match model.parent.as_deref() {
                Some(parent) => {
                    let parent: ResourceLocation = parent.parse()?;
                    (!parent.path().starts_with("builtin/")).then_some(parent)
                }
                None => None,
            };
            chain.push(model);
        }
        Ok(chain)
    }

    /// Sorted names of every block with a blockstate file.
    pub fn list_block_types(&self) -> crate::Result<Vec<String>> {
        let dir = self.blockstates_dir();
        let entries = std::fs::read_dir(&dir).map_err(|source| io_error(&dir, source))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|source| io_error(&dir, source))?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> AssetError {
    AssetError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_json<T: DeserializeOwned>(kind: &'static str, name: &str, path: &Path) -> crate::Result<T> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AssetError::NotFound {
                kind,
                name: name.to_owned(),
                path: path.to_path_buf(),
            })
        }
        Err(source) => return Err(io_error(path, source)),
    };
    serde_json::from_slice(&bytes).map_err(|source| AssetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_jar_layout() {
        let pack = AssetPack::at_path("/packs/vanilla");
        assert_eq!(
            pack.blockstates_path("repeater"),
            PathBuf::from("/packs/vanilla/assets/minecraft/blockstates/repeater.json")
        );
        let loc: ResourceLocation = "minecraft:block/repeater_2tick".parse().unwrap();
        assert_eq!(
            pack.model_path(&loc),
            PathBuf::from("/packs/vanilla/assets/minecraft/models/block/repeater_2tick.json")
        );
        assert_eq!(
            pack.texture_path(&"block/repeater".parse().unwrap()),
            PathBuf::from("/packs/vanilla/assets/minecraft/textures/block/repeater.png")
        );
    }

    #[test]
    fn missing_pack_does_not_exist() {
        let pack = AssetPack::at_path("/definitely/not/a/pack");
        assert!(!pack.exists());
        assert!(matches!(
            pack.load_blockstates("stone"),
            Err(AssetError::NotFound { .. })
        ));
    }

    #[test]
    fn custom_namespace_changes_blockstate_dir() {
        let pack = AssetPack::at_path("root").with_namespace("mymod");
        assert_eq!(
            pack.blockstates_dir(),
            PathBuf::from("root/assets/mymod/blockstates")
        );
    }
}

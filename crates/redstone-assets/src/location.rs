//! Namespaced resource locations (`minecraft:block/repeater`).

use std::fmt;
use std::str::FromStr;

use crate::AssetError;

/// Namespace assumed when a location string omits one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A `namespace:path` pair identifying a model, texture, or blockstate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Build a location from its parts. `path` must be non-empty.
    pub fn new(namespace: &str, path: &str) -> crate::Result<Self> {
        if path.is_empty() {
            return Err(AssetError::InvalidLocation {
                input: format!("{namespace}:{path}"),
                reason: "empty path",
            });
        }
        if namespace.is_empty() {
            return Err(AssetError::InvalidLocation {
                input: format!(":{path}"),
                reason: "empty namespace",
            });
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path relative to `models/`. Block models are conventionally named
    /// `block/<name>`; bare names like `"repeater"` are assumed to be block
    /// models.
    pub fn model_path(&self) -> String {
        if self.path.contains('/') {
            self.path.clone()
        } else {
            format!("block/{}", self.path)
        }
    }

    /// The last path segment, e.g. `repeater_2tick` for `block/repeater_2tick`.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

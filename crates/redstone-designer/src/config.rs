//! Designer configuration.
//!
//! Values are layered, later layers winning:
//!
//! 1. Built-in defaults ([`DesignerConfig::default`]).
//! 2. Environment: `REDSTONE_ASSETS`, `REDSTONE_NAMESPACE`, `REDSTONE_SEED`.
//! 3. Command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use redstone_assets::pack::AssetPack;

/// Where the game assets are expected when nothing else is configured.
pub const DEFAULT_ASSET_ROOT: &str = "assets/minecraft/";

pub const ENV_ASSETS: &str = "REDSTONE_ASSETS";
pub const ENV_NAMESPACE: &str = "REDSTONE_NAMESPACE";
pub const ENV_SEED: &str = "REDSTONE_SEED";

/// Resolved settings for one designer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerConfig {
    /// Directory the client jar was unpacked into.
    pub asset_root: PathBuf,
    /// Namespace for unqualified block names.
    pub namespace: String,
    /// Seed for choosing among weighted model variants.
    pub seed: u64,
}

impl Default for DesignerConfig {
    /// `assets/minecraft/`, namespace `minecraft`, seed 0.
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            namespace: "minecraft".to_owned(),
            seed: 0,
        }
    }
}

impl DesignerConfig {
    /// Apply environment overrides read through `var`.
    pub fn with_env<F>(mut self, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = var(ENV_ASSETS) {
            self.asset_root = PathBuf::from(root);
        }
        if let Some(namespace) = var(ENV_NAMESPACE) {
            self.namespace = namespace;
        }
        if let Some(seed) = var(ENV_SEED) {
            self.seed = seed
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SEED} must be an unsigned integer, got '{seed}'"))?;
        }
        Ok(self)
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(mut self, asset_root: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(root) = asset_root {
            self.asset_root = root;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }

    pub fn asset_pack(&self) -> AssetPack {
        AssetPack::at_path(&self.asset_root).with_namespace(&self.namespace)
    }
}

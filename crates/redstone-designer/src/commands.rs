//! Designer commands.
//!
//! Every command writes its human-readable output to the supplied writer and
//! logs diagnostics through `tracing`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use redstone_assets::location::ResourceLocation;
use redstone_assets::pack::AssetPack;
use redstone_blocks::catalog::{describe, BlockCatalog, CatalogEntry, CatalogSnapshot};
use redstone_blocks::geometry::{nearest_face, Vec3};
use redstone_blocks::palette::{Palette, BLOCK_PALETTE};
use redstone_blocks::state::BlockState;
use tracing::{debug, info, warn};

use crate::config::{DesignerConfig, DEFAULT_ASSET_ROOT};

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

/// Outcome of [`run_check`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub blocks_checked: usize,
    /// `(block type, error)` for every palette block that failed to resolve.
    pub failures: Vec<(String, String)>,
    /// Texture locations whose image file is absent.
    pub missing_textures: Vec<String>,
}

impl CheckReport {
    /// True when every block resolved. Missing textures are only warnings.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fail with a pointer to the expected layout if the asset root is missing.
pub fn ensure_assets(pack: &AssetPack) -> Result<()> {
    if !pack.exists() {
        bail!(
            "no blockstates found under {}; unpack the game's client jar so that \
             {DEFAULT_ASSET_ROOT} contains assets/{}/blockstates, or pass --assets",
            pack.root().display(),
            pack.namespace(),
        );
    }
    Ok(())
}

/// Resolve every palette block and look for its textures on disk.
pub fn run_check(config: &DesignerConfig, out: &mut impl Write) -> Result<CheckReport> {
    let pack = config.asset_pack();
    ensure_assets(&pack)?;

    let mut report = CheckReport::default();
    for block_type in BLOCK_PALETTE {
        report.blocks_checked += 1;
        let entry = BlockState::initial_state_for(&pack, block_type)
            .and_then(|state| describe(&pack, &state, config.seed));
        match entry {
            Ok(entry) => {
                let missing = missing_textures(&pack, &entry);
                for texture in &missing {
                    warn!(block = %block_type, texture = %texture, "texture file missing");
                }
                writeln!(
                    out,
                    "ok    {block_type} ({} models, {} textures)",
                    entry.models.len(),
                    entry.textures.len()
                )?;
                report.missing_textures.extend(missing);
            }
            Err(err) => {
                warn!(block = %block_type, error = %err, "block failed to resolve");
                writeln!(out, "FAIL  {block_type}: {err}")?;
                report.failures.push((block_type.to_owned(), err.to_string()));
            }
        }
    }

    report.missing_textures.sort();
    report.missing_textures.dedup();
    writeln!(
        out,
        "{} blocks checked, {} failed, {} textures missing",
        report.blocks_checked,
        report.failures.len(),
        report.missing_textures.len()
    )?;
    info!(
        checked = report.blocks_checked,
        failed = report.failures.len(),
        "asset check finished"
    );
    Ok(report)
}

fn missing_textures(pack: &AssetPack, entry: &CatalogEntry) -> Vec<String> {
    entry
        .textures
        .iter()
        .filter(|texture| match texture.parse::<ResourceLocation>() {
            Ok(location) => !pack.texture_path(&location).is_file(),
            Err(_) => true,
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// palette / list
// ---------------------------------------------------------------------------

/// Print each palette entry with its initial state; the default is starred.
pub fn run_palette(config: &DesignerConfig, out: &mut impl Write) -> Result<()> {
    let pack = config.asset_pack();
    ensure_assets(&pack)?;
    let palette = Palette::load(&pack)?;
    let default = palette.default_selection().map(|e| e.block_type.clone());
    for (i, entry) in palette.entries().iter().enumerate() {
        let marker = if Some(&entry.block_type) == default.as_ref() {
            '*'
        } else {
            ' '
        };
        writeln!(out, "{marker} {}. {}", i + 1, entry.initial_state)?;
    }
    Ok(())
}

/// Print every block type that has a blockstate file.
pub fn run_list(config: &DesignerConfig, out: &mut impl Write) -> Result<()> {
    let pack = config.asset_pack();
    ensure_assets(&pack)?;
    let block_types = pack.list_block_types()?;
    debug!(count = block_types.len(), "listed block types");
    for block_type in block_types {
        writeln!(out, "{block_type}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

/// Options for [`run_inspect`].
#[derive(Debug, Default, Clone)]
pub struct InspectOptions {
    /// `prop=value,...` applied on top of the initial state.
    pub state: Option<String>,
    /// Direction the user is looking; sets `facing` to the nearest face.
    pub look: Option<Vec3>,
}

/// Parse `"x,y,z"` into a direction.
pub fn parse_direction(input: &str) -> Result<Vec3> {
    let parts = input
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("direction '{input}' must be three numbers"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => bail!("direction '{input}' must have exactly three components"),
    }
}

/// Describe one block state: models, rotations, bounding box and textures.
pub fn run_inspect(
    config: &DesignerConfig,
    block_type: &str,
    options: &InspectOptions,
    out: &mut impl Write,
) -> Result<()> {
    let pack = config.asset_pack();
    ensure_assets(&pack)?;
    let states = pack
        .load_blockstates(block_type)
        .with_context(|| format!("unknown block '{block_type}'"))?;

    let mut state = BlockState::initial_state_from(block_type, &states);
    if let Some(overrides) = options.state.as_deref() {
        let parsed = BlockState::new(block_type, overrides)?;
        for (prop, value) in parsed.values() {
            state.update(&states, prop, value.clone())?;
        }
    }
    if let Some(look) = options.look {
        state.set_facing(&states, nearest_face(look))?;
    }

    let entry = describe(&pack, &state, config.seed)?;
    writeln!(out, "state:    {}", entry.state)?;
    for model in &entry.models {
        writeln!(out, "model:    {} (x={}, y={})", model.model, model.x, model.y)?;
    }
    let (min, max) = (entry.bounding_box.min, entry.bounding_box.max);
    writeln!(
        out,
        "bounds:   [{}, {}, {}] .. [{}, {}, {}]",
        min.x, min.y, min.z, max.x, max.y, max.z
    )?;
    writeln!(
        out,
        "surface:  requires flat = {}, is flat = {}",
        entry.requires_flat_surface, entry.is_flat_surface
    )?;
    for texture in &entry.textures {
        writeln!(out, "texture:  {texture}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

/// Build the hashed catalog snapshot for the palette.
pub fn build_snapshot(config: &DesignerConfig) -> Result<CatalogSnapshot> {
    let pack = config.asset_pack();
    ensure_assets(&pack)?;
    let palette = Palette::load(&pack)?;
    let snapshot = BlockCatalog::build(&pack, &palette, config.seed)?.snapshot();
    info!(hash = %snapshot.hash, entries = snapshot.entries.len(), "built catalog");
    Ok(snapshot)
}

/// Write the hashed catalog snapshot as pretty JSON.
pub fn run_export(config: &DesignerConfig, out: &mut impl Write) -> Result<()> {
    let snapshot = build_snapshot(config)?;
    write_snapshot(&snapshot, out)
}

/// Write the snapshot to `path`. The file is only created once the catalog
/// has been built, so a failed export leaves nothing behind.
pub fn run_export_to_file(config: &DesignerConfig, path: &Path) -> Result<()> {
    let snapshot = build_snapshot(config)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_snapshot(&snapshot, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_snapshot(snapshot: &CatalogSnapshot, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, snapshot).context("writing catalog JSON")?;
    writeln!(out)?;
    Ok(())
}

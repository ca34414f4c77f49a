//! The blocks offered to the user, in picker order.

use redstone_assets::pack::AssetPack;

use crate::state::BlockState;

/// Block types in the picker, first entry selected by default.
pub const BLOCK_PALETTE: [&str; 5] = [
    "sandstone",
    "iron_block",
    "redstone_wire",
    "redstone_torch",
    "repeater",
];

/// A palette slot: a block type and the state it is placed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub block_type: String,
    pub initial_state: BlockState,
}

/// Palette entries with their initial states loaded from a pack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Load the standard [`BLOCK_PALETTE`].
    pub fn load(pack: &AssetPack) -> crate::Result<Self> {
        Self::load_types(pack, BLOCK_PALETTE)
    }

    /// Load a custom list of block types, keeping their order.
    pub fn load_types<I, S>(pack: &AssetPack, block_types: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = block_types
            .into_iter()
            .map(|block_type| {
                let block_type = block_type.as_ref();
                Ok(PaletteEntry {
                    block_type: block_type.to_owned(),
                    initial_state: BlockState::initial_state_for(pack, block_type)?,
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The entry selected when the designer starts.
    pub fn default_selection(&self) -> Option<&PaletteEntry> {
        self.entries.first()
    }

    pub fn get(&self, block_type: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.block_type == block_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

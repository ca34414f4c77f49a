//! Block states: a block type plus its property values.
//!
//! The set of properties a block has, and the values each accepts, is not
//! hard-coded. It is read from the block's blockstate file: every property
//! named in a variant key or multipart condition is a property of the block,
//! and every value it is compared against is an allowed value.

use std::collections::BTreeMap;
use std::fmt;

use redstone_assets::pack::AssetPack;
use redstone_assets::schemas::blockstates::{BlockStates, StateValue, Variant, VariantKey};
use redstone_assets::schemas::models::BlockFace;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::BlockError;

/// Allowed values per property, in first-seen order.
pub type AllowedValues = BTreeMap<String, Vec<StateValue>>;

/// The current state of a specific block.
///
/// Matches against the block's blockstate file to determine which model(s)
/// to show and how to rotate them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    block_type: String,
    values: BTreeMap<String, StateValue>,
}

impl BlockState {
    /// Parse `"prop=value,prop=value"` for the given block type. The empty
    /// string gives a state with no properties.
    pub fn new(block_type: &str, state_values: &str) -> crate::Result<Self> {
        let key = VariantKey::parse(state_values).map_err(|e| BlockError::InvalidState {
            block_type: block_type.to_owned(),
            input: state_values.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            block_type: block_type.to_owned(),
            values: key.pairs().iter().cloned().collect(),
        })
    }

    /// The initial state for a block type: every property the block has,
    /// each set to its conventional default.
    ///
    /// Defaults come from a small table (`facing=south`, `delay=1`,
    /// `powered=false`, ...). A property missing from the table, or whose
    /// table value the block does not accept, takes its first listed value.
    pub fn initial_state_for(pack: &AssetPack, block_type: &str) -> crate::Result<Self> {
        let states = pack.load_blockstates(block_type)?;
        Ok(Self::initial_state_from(block_type, &states))
    }

    /// As [`initial_state_for`](Self::initial_state_for) with the blockstate
    /// file already loaded.
    pub fn initial_state_from(block_type: &str, states: &BlockStates) -> Self {
        let mut values = BTreeMap::new();
        for (prop, allowed) in allowed_values(states) {
            let value = match default_state_value(&prop) {
                Some(default) if allowed.contains(&default) => default,
                preferred => {
                    if preferred.is_some() {
                        warn!(
                            block = %block_type,
                            prop = %prop,
                            "default value not accepted by this block; using first allowed value"
                        );
                    }
                    match allowed.into_iter().next() {
                        Some(first) => first,
                        None => continue,
                    }
                }
            };
            values.insert(prop, value);
        }
        let state = Self {
            block_type: block_type.to_owned(),
            values,
        };
        debug!(state = %state, "initial block state");
        state
    }

    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    pub fn values(&self) -> &BTreeMap<String, StateValue> {
        &self.values
    }

    pub fn get(&self, prop: &str) -> Option<&StateValue> {
        self.values.get(prop)
    }

    /// Set a property if the block has it and accepts the value. On error the
    /// state is unchanged.
    pub fn update(
        &mut self,
        states: &BlockStates,
        prop: &str,
        value: StateValue,
    ) -> crate::Result<()> {
        let allowed = allowed_values(states);
        let allowed_for_prop = allowed
            .get(prop)
            .ok_or_else(|| BlockError::UnknownProperty {
                block_type: self.block_type.clone(),
                prop: prop.to_owned(),
            })?;
        if !allowed_for_prop.contains(&value) {
            return Err(BlockError::DisallowedValue {
                block_type: self.block_type.clone(),
                prop: prop.to_owned(),
                value: value.to_string(),
            });
        }
        self.values.insert(prop.to_owned(), value);
        Ok(())
    }

    /// Point the block toward `face`, for blocks with a `facing` property.
    pub fn set_facing(&mut self, states: &BlockStates, face: BlockFace) -> crate::Result<()> {
        self.update(states, "facing", StateValue::from(face.as_str()))
    }

    /// The variant(s) that apply to this state.
    ///
    /// - Variants form: the single matching key that constrains the most
    ///   properties; among equally specific keys the lexicographically first.
    /// - Multipart form: every applying case, in file order.
    pub fn active_variants(&self, states: &BlockStates) -> crate::Result<Vec<Variant>> {
        let lookup = |prop: &str| self.values.get(prop);
        let found: Vec<Variant> = match states {
            BlockStates::Variants { variants } => {
                let mut best: Option<(usize, &Variant)> = None;
                for (key_str, variant) in variants {
                    let key = match VariantKey::parse(key_str) {
                        Ok(key) => key,
                        Err(e) => {
                            warn!(block = %self.block_type, error = %e, "skipping variant key");
                            continue;
                        }
                    };
                    if key.matches(lookup) && best.map_or(true, |(len, _)| key.len() > len) {
                        best = Some((key.len(), variant));
                    }
                }
                best.map(|(_, v)| v.clone()).into_iter().collect()
            }
            BlockStates::Multipart { cases } => cases
                .iter()
                .filter(|case| case.applies(&lookup))
                .map(|case| case.apply.clone())
                .collect(),
        };
        if found.is_empty() {
            return Err(BlockError::NoMatchingVariant {
                state: self.to_string(),
            });
        }
        Ok(found)
    }
}

impl fmt::Display for BlockState {
    /// `repeater[delay=1,facing=south]`, or just `sandstone` with no properties.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.block_type)?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (prop, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{prop}={value}")?;
        }
        f.write_str("]")
    }
}

/// Every property the blockstate file mentions with the values it is tested
/// against.
pub fn allowed_values(states: &BlockStates) -> AllowedValues {
    let mut out: AllowedValues = BTreeMap::new();
    let mut push = |prop: &str, value: StateValue| {
        let list = out.entry(prop.to_owned()).or_default();
        if !list.contains(&value) {
            list.push(value);
        }
    };
    match states {
        BlockStates::Variants { variants } => {
            for key in variants.keys().filter_map(|k| VariantKey::parse(k).ok()) {
                for (prop, value) in key.pairs() {
                    push(prop.as_str(), value.clone());
                }
            }
        }
        BlockStates::Multipart { cases } => {
            for condition in cases.iter().filter_map(|c| c.when.as_ref()) {
                condition.for_each_value(&mut push);
            }
        }
    }
    out
}

fn default_state_value(prop: &str) -> Option<StateValue> {
    let value = match prop {
        "delay" => "1",
        "facing" => "south",
        "locked" | "powered" => "false",
        "lit" => "true",
        "north" | "east" | "south" | "west" => "none",
        "power" => "0",
        "mode" => "compare",
        _ => return None,
    };
    Some(StateValue::from(value))
}

//! Blockstate files: how a block's property values pick its models.
//!
//! A blockstate file takes one of two forms:
//!
//! - `variants`: a map from a *variant key* such as
//!   `"delay=2,facing=north,locked=false,powered=true"` to the model(s) used
//!   when the block's properties match that key.
//! - `multipart`: an ordered list of [`Case`]s. Every case whose `when`
//!   condition holds contributes its model; redstone wire uses this to stack
//!   a dot and up to four side segments.
//!
//! Property values are compared as [`StateValue`]s. `"true"` and `"false"`
//! always normalize to [`StateValue::Bool`], so a JSON boolean and its string
//! spelling compare equal.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::AssetError;

// ---------------------------------------------------------------------------
// StateValue
// ---------------------------------------------------------------------------

/// The value of a single block state property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum StateValue {
    /// Boolean properties (`powered`, `locked`, `lit`).
    Bool(bool),
    /// Everything else (`facing=north`, `delay=2`, `north=side`).
    String(String),
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        match value {
            "true" => StateValue::Bool(true),
            "false" => StateValue::Bool(false),
            other => StateValue::String(other.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for StateValue {
    /// Accepts a JSON boolean or a string; `"true"` and `"false"` strings
    /// become [`StateValue::Bool`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawStateValue {
            Bool(bool),
            String(String),
        }

        Ok(match RawStateValue::deserialize(deserializer)? {
            RawStateValue::Bool(b) => StateValue::Bool(b),
            RawStateValue::String(s) => StateValue::from(s.as_str()),
        })
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{b}"),
            StateValue::String(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// VariantKey
// ---------------------------------------------------------------------------

/// A parsed variant key: the property assignments a block must match.
///
/// The empty key `""` has no assignments and matches every state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantKey(Vec<(String, StateValue)>);

impl VariantKey {
    /// Parse a comma-separated `prop=value` list.
    pub fn parse(input: &str) -> crate::Result<Self> {
        let mut pairs = Vec::new();
        for pair in input.split(',').filter(|p| !p.is_empty()) {
            let (prop, value) = pair
                .split_once('=')
                .ok_or_else(|| AssetError::InvalidVariantKey {
                    key: input.to_owned(),
                    reason: "expected prop=value",
                })?;
            if prop.is_empty() || value.is_empty() {
                return Err(AssetError::InvalidVariantKey {
                    key: input.to_owned(),
                    reason: "empty property name or value",
                });
            }
            pairs.push((prop.to_owned(), StateValue::from(value)));
        }
        Ok(Self(pairs))
    }

    /// The property assignments in key order.
    pub fn pairs(&self) -> &[(String, StateValue)] {
        &self.0
    }

    /// Number of properties this key constrains.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every assignment in the key agrees with `lookup`.
    pub fn matches<'a, F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<&'a StateValue>,
    {
        self.0
            .iter()
            .all(|(prop, value)| lookup(prop) == Some(value))
    }
}

// ---------------------------------------------------------------------------
// Model references
// ---------------------------------------------------------------------------

fn default_weight() -> u32 {
    1
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

fn is_default_weight(v: &u32) -> bool {
    *v == 1
}

/// One model reference with its rotation and selection weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProperties {
    /// Model location, e.g. `minecraft:block/repeater_2tick_on`.
    pub model: String,
    /// Rotation about the x-axis in degrees (multiples of 90).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: i32,
    /// Rotation about the y-axis in degrees (multiples of 90).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: i32,
    /// Keep textures aligned to the world when rotating.
    #[serde(default, rename = "uvlock", skip_serializing_if = "std::ops::Not::not")]
    pub uv_lock: bool,
    /// Relative weight when the variant lists several models.
    #[serde(default = "default_weight", skip_serializing_if = "is_default_weight")]
    pub weight: u32,
}

/// A single model or a weighted list of alternatives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    Single(ModelProperties),
    Multiple(Vec<ModelProperties>),
}

impl Variant {
    /// The candidate models as a slice.
    pub fn models(&self) -> &[ModelProperties] {
        match self {
            Variant::Single(props) => std::slice::from_ref(props),
            Variant::Multiple(list) => list,
        }
    }
}

// ---------------------------------------------------------------------------
// Multipart conditions
// ---------------------------------------------------------------------------

/// The raw right-hand side of a multipart property test.
///
/// Strings may list alternatives (`"side|up"`) and may be negated with a
/// leading `!`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl ConditionValue {
    /// Returns `(negated, alternatives)`.
    pub fn alternatives(&self) -> (bool, Vec<StateValue>) {
        match self {
            ConditionValue::Bool(b) => (false, vec![StateValue::Bool(*b)]),
            ConditionValue::Int(n) => (false, vec![StateValue::String(n.to_string())]),
            ConditionValue::String(s) => {
                let (negated, body) = match s.strip_prefix('!') {
                    Some(rest) => (true, rest),
                    None => (false, s.as_str()),
                };
                (negated, body.split('|').map(StateValue::from).collect())
            }
        }
    }

    fn accepts(&self, actual: Option<&StateValue>) -> bool {
        let (negated, alternatives) = self.alternatives();
        let hit = actual.is_some_and(|v| alternatives.contains(v));
        hit != negated
    }
}

/// A multipart `when` clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// Holds if any nested condition holds.
    Or {
        #[serde(rename = "OR")]
        any: Vec<Condition>,
    },
    /// Holds if every nested condition holds.
    And {
        #[serde(rename = "AND")]
        all: Vec<Condition>,
    },
    /// Holds if every listed property has one of the listed values.
    Properties(BTreeMap<String, ConditionValue>),
}

impl Condition {
    /// Evaluate against a property lookup.
    pub fn applies<'a, F>(&self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<&'a StateValue>,
    {
        match self {
            Condition::Or { any } => any.iter().any(|c| c.applies(lookup)),
            Condition::And { all } => all.iter().all(|c| c.applies(lookup)),
            Condition::Properties(props) => props
                .iter()
                .all(|(prop, expected)| expected.accepts(lookup(prop))),
        }
    }

    /// Visit every `(property, value)` pair mentioned anywhere in the clause.
    pub fn for_each_value(&self, visit: &mut impl FnMut(&str, StateValue)) {
        match self {
            Condition::Or { any: list } | Condition::And { all: list } => {
                for c in list {
                    c.for_each_value(visit);
                }
            }
            Condition::Properties(props) => {
                for (prop, value) in props {
                    for alt in value.alternatives().1 {
                        visit(prop, alt);
                    }
                }
            }
        }
    }
}

/// One multipart case. A case without `when` always applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Condition>,
    pub apply: Variant,
}

impl Case {
    pub fn applies<'a, F>(&self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<&'a StateValue>,
    {
        self.when.as_ref().map_or(true, |c| c.applies(lookup))
    }
}

// ---------------------------------------------------------------------------
// BlockStates
// ---------------------------------------------------------------------------

/// The contents of one blockstate file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockStates {
    Variants {
        variants: BTreeMap<String, Variant>,
    },
    Multipart {
        #[serde(rename = "multipart")]
        cases: Vec<Case>,
    },
}

impl BlockStates {
    pub fn is_variants(&self) -> bool {
        matches!(self, BlockStates::Variants { .. })
    }
}

//! Default placement table
//!
//! Generic adjustments for one grid mode, keyed by placement key and turns.
//! Values are authored for the canonical north-east quadrant; the
//! directional tuple processor reflects them into the quadrant in use.

use std::collections::HashMap;

use serde::Deserialize;

use crate::placement::types::AdjustmentVector;

/// `placement_key -> turns_key -> adjustment`, immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DefaultTable {
    entries: HashMap<String, HashMap<String, AdjustmentVector>>,
}

impl DefaultTable {
    /// Parse a table from its TOML form.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Whether a placement key exists in this table. The candidate chain
    /// stops at the first existing key even if the turns entry is absent.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The adjustment recorded for a key at a turn count, if any.
    pub fn adjustment(&self, key: &str, turns_key: &str) -> Option<AdjustmentVector> {
        self.entries.get(key).and_then(|turns| turns.get(turns_key)).copied()
    }

    /// Insert an entry. Hosts supplying tables programmatically (rather than
    /// via TOML) build them with this.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        turns_key: impl Into<String>,
        adjustment: AdjustmentVector,
    ) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(turns_key.into(), adjustment);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

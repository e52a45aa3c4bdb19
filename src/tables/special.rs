//! Special placement table
//!
//! Per-symbol, manually curated exception adjustments, keyed by orientation
//! key, turns tuple, and mover. Values are recorded in already-correct final
//! coordinates; no directional correction is ever applied to them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::placement::types::AdjustmentVector;

type MoverAdjustments = HashMap<String, AdjustmentVector>;
type TurnsBranch = HashMap<String, MoverAdjustments>;
type OrientationBranch = HashMap<String, TurnsBranch>;

/// `symbol -> orientation_key -> turns_tuple -> mover -> adjustment`,
/// immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SpecialTable {
    symbols: HashMap<String, OrientationBranch>,
}

impl SpecialTable {
    /// Parse a table from its TOML form.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The curated adjustment for a symbol at the given orientation key,
    /// turns tuple, and mover, if one was recorded.
    pub fn adjustment(
        &self,
        symbol_id: &str,
        orientation_key: &str,
        turns_tuple: &str,
        mover: &str,
    ) -> Option<AdjustmentVector> {
        self.symbols
            .get(symbol_id)?
            .get(orientation_key)?
            .get(turns_tuple)?
            .get(mover)
            .copied()
    }

    /// Insert an entry, for hosts supplying tables programmatically.
    pub fn insert(
        &mut self,
        symbol_id: impl Into<String>,
        orientation_key: impl Into<String>,
        turns_tuple: impl Into<String>,
        mover: impl Into<String>,
        adjustment: AdjustmentVector,
    ) {
        self.symbols
            .entry(symbol_id.into())
            .or_default()
            .entry(orientation_key.into())
            .or_default()
            .entry(turns_tuple.into())
            .or_default()
            .insert(mover.into(), adjustment);
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

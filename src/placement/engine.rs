//! Positioning orchestrator
//!
//! Composes location, anchor, rotation, adjustment, and mirror resolution
//! into final placements for whichever movers a pictograph carries. The
//! engine is the only component aware of both movers at once, and the only
//! place table loading is triggered.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::grid;
use crate::motion::{MotionAttributes, MoverId, PictographContext};
use crate::placement::adjustment::resolve_adjustment;
use crate::placement::location::resolve_location;
use crate::placement::mirror::should_mirror;
use crate::placement::rotation::resolve_rotation;
use crate::placement::types::PlacementResult;
use crate::tables::{ModeTables, PlacementTables, TableCache, TableError, TableSource};
use crate::PlacementError;

/// The placement engine: an injected table source plus the load-once cache.
///
/// Per-call computation is pure and may run concurrently from any number of
/// threads; the cache guarantees a single table load per process (see
/// [`TableCache`]).
pub struct PlacementEngine {
    source: Box<dyn TableSource>,
    cache: TableCache,
}

impl PlacementEngine {
    /// Create an engine over an injected table source.
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: TableCache::new(),
        }
    }

    /// Create an engine over the bundled reference tables.
    pub fn embedded() -> Self {
        Self::new(crate::tables::EmbeddedTables)
    }

    /// Load the placement tables if they are not loaded yet and return them.
    ///
    /// Concurrent first calls share one in-flight load; a load failure is
    /// reported to the triggering caller and retried on the next call.
    pub fn ensure_loaded(&self) -> Result<Arc<PlacementTables>, TableError> {
        self.cache.get_or_load(self.source.as_ref())
    }

    /// Place arrows for every mover present in the context.
    ///
    /// Movers absent from the context are omitted from the result; the map
    /// is complete for the movers present or the call fails at the table
    /// initialization stage. Lookup misses inside the pipeline degrade to
    /// documented defaults and never fail the call.
    pub fn place_all(
        &self,
        ctx: &PictographContext,
    ) -> Result<BTreeMap<MoverId, PlacementResult>, PlacementError> {
        let tables = self.ensure_loaded()?;
        let mode_tables = tables.for_mode(ctx.grid_mode);

        let mut placements = BTreeMap::new();
        for (&mover, motion) in &ctx.movers {
            placements.insert(mover, place_one(mode_tables, ctx, mover, motion));
        }
        Ok(placements)
    }

    /// Place a single mover's arrow, if that mover is present.
    pub fn place_mover(
        &self,
        ctx: &PictographContext,
        mover: MoverId,
    ) -> Result<Option<PlacementResult>, PlacementError> {
        let tables = self.ensure_loaded()?;
        let mode_tables = tables.for_mode(ctx.grid_mode);
        Ok(ctx
            .motion(mover)
            .map(|motion| place_one(mode_tables, ctx, mover, motion)))
    }
}

fn place_one(
    tables: &ModeTables,
    ctx: &PictographContext,
    mover: MoverId,
    motion: &MotionAttributes,
) -> PlacementResult {
    let location = resolve_location(motion);
    let anchor = grid::anchor_for(motion.category, location, ctx.grid_mode);
    let rotation_degrees = resolve_rotation(motion, location);
    let adjustment = resolve_adjustment(tables, ctx, motion, mover, location);
    let mirrored = should_mirror(motion.category, motion.sense);

    debug!(
        symbol = %ctx.symbol_id,
        mover = %mover,
        location = %location,
        rotation = rotation_degrees,
        mirrored,
        "arrow placed"
    );

    PlacementResult {
        location,
        anchor,
        adjustment,
        final_position: anchor.offset(adjustment),
        rotation_degrees,
        mirrored,
    }
}

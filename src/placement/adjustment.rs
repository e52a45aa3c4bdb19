//! Adjustment resolver
//!
//! Orchestrates the special-table lookup, the default-table candidate chain,
//! and directional correction. Always succeeds: a miss at any stage is a
//! designed fallback to the zero vector, logged at debug level, never an
//! error.

use tracing::debug;

use crate::motion::{
    Location, MotionAttributes, MotionCategory, MoverId, PictographContext, Turns,
};
use crate::placement::directional;
use crate::placement::keys;
use crate::placement::types::AdjustmentVector;
use crate::tables::ModeTables;

/// Resolve the pixel adjustment for one mover's arrow at its resolved
/// location.
///
/// Precedence:
/// 1. Special-table entry for the symbol, returned verbatim (special values
///    are recorded in final coordinates; no directional correction).
/// 2. Default-table entry for the first existing candidate key, reflected
///    into the location's quadrant.
/// 3. The zero vector.
pub fn resolve_adjustment(
    tables: &ModeTables,
    ctx: &PictographContext,
    motion: &MotionAttributes,
    mover: MoverId,
    location: Location,
) -> AdjustmentVector {
    let orientation_key = keys::orientation_key_for(ctx);
    let turns_tuple = keys::turns_tuple_key(ctx);
    if let Some(adjustment) = tables.special.adjustment(
        &ctx.symbol_id,
        &orientation_key,
        &turns_tuple,
        keys::mover_key(mover),
    ) {
        return adjustment;
    }

    let candidates = keys::placement_key_candidates(motion, location, &ctx.symbol_id);
    // Float motions key the default table symbolically, whatever turn
    // count they happen to carry.
    let turns_key = if motion.category == MotionCategory::Float {
        Turns::Float.key()
    } else {
        motion.effective_turns().key()
    };
    for key in &candidates {
        if tables.default.contains_key(key) {
            let base = match tables.default.adjustment(key, &turns_key) {
                Some(base) => base,
                None => {
                    debug!(
                        symbol = %ctx.symbol_id,
                        key = %key,
                        turns = %turns_key,
                        "default placement key has no entry for turns; using zero"
                    );
                    AdjustmentVector::ZERO
                }
            };
            return directional::reflect(base, location);
        }
    }

    debug!(
        symbol = %ctx.symbol_id,
        mover = %mover,
        "no placement key matched; using zero adjustment"
    );
    AdjustmentVector::ZERO
}

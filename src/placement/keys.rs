//! Placement key generators
//!
//! Four small stateless services that derive lookup keys from motion and
//! pictograph data. Keys are opaque strings: they index tables and are never
//! interpreted structurally beyond lookup.

use crate::motion::{
    Location, MotionAttributes, MotionCategory, MoverId, Orientation, PictographContext, Turns,
};

/// Ordered candidate keys for the default placement table, most specific
/// first. The lookup tries each candidate in order and takes the first that
/// exists in the table.
pub fn placement_key_candidates(
    motion: &MotionAttributes,
    resolved_location: Location,
    symbol_id: &str,
) -> Vec<String> {
    let category = motion.category.as_str();
    let lockey = derived_location_key(motion, resolved_location);
    vec![
        format!("{category}_to_{lockey}_{symbol_id}"),
        format!("{category}_to_{lockey}"),
        category.to_string(),
    ]
}

/// Location component of a placement key: the resolved location for shift
/// categories, the ordered travel pair for static and dash motions.
fn derived_location_key(motion: &MotionAttributes, resolved_location: Location) -> String {
    match motion.category {
        MotionCategory::Static | MotionCategory::Dash => {
            format!("{}_{}", motion.start_location, motion.end_location)
        }
        MotionCategory::Pro | MotionCategory::Anti | MotionCategory::Float => {
            resolved_location.to_string()
        }
    }
}

/// Orientation key selecting a slice of the special placement table.
///
/// `from_layer1` when both end orientations are radial (`In`/`Out`);
/// `from_layer2` when both belong to the layer-2 class (`Clockwise`,
/// `Counter`, `Alpha`, `Beta`); otherwise `from_layer3_<a>_<b>` with each
/// mover's fixed rank within its class.
pub fn orientation_key(end_a: Orientation, end_b: Orientation) -> String {
    match (end_a.is_layer1(), end_b.is_layer1()) {
        (true, true) => "from_layer1".to_string(),
        (false, false) => "from_layer2".to_string(),
        _ => format!("from_layer3_{}_{}", end_a.rank(), end_b.rank()),
    }
}

/// Orientation key for a whole pictograph. An absent mover contributes the
/// radial `In` orientation.
pub fn orientation_key_for(ctx: &PictographContext) -> String {
    let end_of = |mover| {
        ctx.motion(mover)
            .map(|m| m.end_orientation)
            .unwrap_or(Orientation::In)
    };
    orientation_key(end_of(MoverId::Blue), end_of(MoverId::Red))
}

/// Turns-tuple key: the ordered pair of both movers' effective turn counts.
/// Absent movers default to zero turns.
pub fn turns_tuple_key(ctx: &PictographContext) -> String {
    let turns_of = |mover| {
        ctx.motion(mover)
            .map(|m| m.effective_turns())
            .unwrap_or(Turns::ZERO)
    };
    format!("({},{})", turns_of(MoverId::Blue), turns_of(MoverId::Red))
}

/// The requesting mover's tag, the final index level of the special table.
pub fn mover_key(mover: MoverId) -> &'static str {
    mover.as_str()
}

//! Location resolver
//!
//! Determines the symbolic grid location an arrow occupies. The motion
//! category alone selects the strategy: `Static` and `Dash` use the static
//! strategy, the shift categories (`Pro`, `Anti`, `Float`) use the shift
//! strategy. No other attribute participates in strategy selection.

use crate::motion::{Location, MotionAttributes, MotionCategory, RotationalSense};

/// Resolve the grid location an arrow occupies for the given motion.
pub fn resolve_location(motion: &MotionAttributes) -> Location {
    match motion.category {
        MotionCategory::Static | MotionCategory::Dash => static_strategy(motion),
        MotionCategory::Pro | MotionCategory::Anti | MotionCategory::Float => {
            shift_strategy(motion)
        }
    }
}

/// Static strategy: a dash with no net rotation sits beside its travel
/// path, looked up from a fixed pair table; everything else sits at the
/// motion's end location.
fn static_strategy(motion: &MotionAttributes) -> Location {
    if motion.category == MotionCategory::Dash && motion.sense == RotationalSense::NoRotation {
        if let Some(loc) = dash_pair_location(motion.start_location, motion.end_location) {
            return loc;
        }
    }
    motion.end_location
}

/// Shift strategy: the arrow sits where the motion terminates.
fn shift_strategy(motion: &MotionAttributes) -> Location {
    motion.end_location
}

/// Fixed table for no-rotation dashes, keyed by the ordered travel pair.
/// Covers the four opposite-side pairs and the four corner pairs; any other
/// pair is absent and falls back to the end location.
fn dash_pair_location(start: Location, end: Location) -> Option<Location> {
    use Location::*;
    let loc = match (start, end) {
        (N, S) => E,
        (S, N) => W,
        (E, W) => N,
        (W, E) => S,
        (NE, SW) => SE,
        (SW, NE) => NW,
        (SE, NW) => NE,
        (NW, SE) => SW,
        _ => return None,
    };
    Some(loc)
}

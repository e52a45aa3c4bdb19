//! Mirror decision
//!
//! Pure rule deciding whether an arrow glyph must be horizontally mirrored.
//! `Anti` is inverted relative to every other category; that asymmetry is
//! intentional domain behavior.

use crate::motion::{MotionCategory, RotationalSense};

/// Whether the glyph for a motion must be mirrored.
///
/// `Anti` mirrors exactly when the sense is clockwise; every other category
/// mirrors exactly when the sense is counter-clockwise. `NoRotation` never
/// mirrors.
pub fn should_mirror(category: MotionCategory, sense: RotationalSense) -> bool {
    match category {
        MotionCategory::Anti => sense == RotationalSense::Clockwise,
        _ => sense == RotationalSense::CounterClockwise,
    }
}

//! Directional tuple processor
//!
//! Default-table adjustments are authored for one canonical quadrant only.
//! This module reflects an authored vector into the quadrant of the resolved
//! location by applying one of a fixed set of sign-flip/axis-swap transforms.
//!
//! The transform per location is exact configuration data mirroring the grid
//! symmetries, not computed trigonometry. Two invariants hold for the whole
//! table and are relied on by callers and tests:
//!
//! - every transform is an involution (applying it twice restores the input)
//! - diagonally opposite locations carry exact negations of each other, so
//!   reflecting into a quadrant and then into the opposite quadrant negates
//!   the original vector

use crate::motion::Location;
use crate::placement::types::AdjustmentVector;

/// Reflect a canonically authored adjustment into the quadrant of the given
/// location.
pub fn reflect(base: AdjustmentVector, location: Location) -> AdjustmentVector {
    let AdjustmentVector { dx, dy } = base;
    match location {
        // Canonical quadrant and its cardinal counterpart.
        Location::N | Location::NE | Location::Center => base,
        Location::E => AdjustmentVector::new(dy, dx),
        Location::S | Location::SW => AdjustmentVector::new(-dx, -dy),
        Location::W => AdjustmentVector::new(-dy, -dx),
        Location::SE => AdjustmentVector::new(dx, -dy),
        Location::NW => AdjustmentVector::new(-dx, dy),
    }
}

//! Pictograph arrow placement
//!
//! This library computes where motion-arrow glyphs sit on a two-mover
//! movement-notation pictograph. Given the symbolic description of each
//! mover's motion, it resolves the grid cell the arrow occupies, its pixel
//! anchor, a fine adjustment, the rotation angle, and whether the glyph
//! must be mirrored.
//!
//! # Example
//!
//! ```rust
//! use pictograph_placement::motion::{
//!     GridMode, Location, MotionAttributes, MotionCategory, MoverId,
//!     PictographContext, RotationalSense, Turns,
//! };
//!
//! let ctx = PictographContext::new("A", GridMode::Diamond).with_mover(
//!     MoverId::Blue,
//!     MotionAttributes::new(MotionCategory::Pro, Location::N, Location::S)
//!         .with_sense(RotationalSense::Clockwise)
//!         .with_turns(Turns::whole(1)),
//! );
//!
//! let placements = pictograph_placement::place_all(&ctx).unwrap();
//! let arrow = &placements[&MoverId::Blue];
//! assert_eq!(arrow.location, Location::S);
//! assert!(!arrow.mirrored);
//! ```

pub mod error;
pub mod grid;
pub mod motion;
pub mod placement;
pub mod tables;

pub use error::ParseError;
pub use motion::{
    GridMode, Location, MotionAttributes, MotionCategory, MoverId, Orientation,
    PictographContext, RotationalSense, Turns,
};
pub use placement::{AdjustmentVector, PlacementEngine, PlacementResult, Point};
pub use tables::{EmbeddedTables, FileTables, PlacementTables, TableError, TableSource};

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

/// Errors that can fail a placement call.
///
/// Only table initialization can fail; lookup misses inside the pipeline
/// degrade to documented defaults and never surface as errors.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// The placement tables could not be loaded or parsed
    #[error("placement table initialization failed: {0}")]
    Table(#[from] TableError),
}

static EMBEDDED_ENGINE: Lazy<PlacementEngine> = Lazy::new(PlacementEngine::embedded);

/// Place arrows for every mover present in the context, using the bundled
/// reference tables.
///
/// This is the main entry point for hosts that do not inject their own
/// table source; construct a [`PlacementEngine`] to supply one.
pub fn place_all(
    ctx: &PictographContext,
) -> Result<BTreeMap<MoverId, PlacementResult>, PlacementError> {
    EMBEDDED_ENGINE.place_all(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_all_convenience_entry_point() {
        let ctx = PictographContext::new("A", GridMode::Diamond)
            .with_mover(
                MoverId::Blue,
                MotionAttributes::new(MotionCategory::Pro, Location::N, Location::S)
                    .with_sense(RotationalSense::Clockwise)
                    .with_turns(Turns::whole(1)),
            )
            .with_mover(
                MoverId::Red,
                MotionAttributes::new(MotionCategory::Static, Location::W, Location::W),
            );

        let placements = place_all(&ctx).unwrap();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[&MoverId::Blue].location, Location::S);
        assert_eq!(placements[&MoverId::Red].location, Location::W);
    }

    #[test]
    fn test_global_engine_is_reused() {
        let ctx = PictographContext::new("B", GridMode::Box);
        assert!(place_all(&ctx).unwrap().is_empty());
        assert!(place_all(&ctx).unwrap().is_empty());
    }
}

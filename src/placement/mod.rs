//! Arrow placement pipeline
//!
//! This module composes the placement stages for one mover's arrow:
//! location resolution, anchor lookup, rotation resolution, adjustment
//! resolution (special table, then default table, then zero) with
//! quadrant-correct reflection, and the mirror decision. The
//! [`engine::PlacementEngine`] orchestrates the stages for whole
//! pictographs.

pub mod adjustment;
pub mod directional;
pub mod engine;
pub mod keys;
pub mod location;
pub mod mirror;
pub mod rotation;
pub mod types;

pub use adjustment::resolve_adjustment;
pub use directional::reflect;
pub use engine::PlacementEngine;
pub use location::resolve_location;
pub use mirror::should_mirror;
pub use rotation::resolve_rotation;
pub use types::{AdjustmentVector, PlacementResult, Point};

//! Grid coordinate provider
//!
//! Maps a symbolic grid location plus motion category to a canonical pixel
//! anchor point. Each grid mode carries two named point sets:
//!
//! - **hand points**, used by `Static` and `Dash` motions
//! - **layer-2 points**, used by `Pro`, `Anti`, and `Float` motions
//!
//! The point sets are two concentric rings around the grid center. In
//! `Diamond` mode the hand points sit on the inner ring and the layer-2
//! points on the outer ring; `Box` mode is the swapped arrangement. The
//! coordinates are validated reference constants on a 950x950 grid and must
//! not be re-derived.
//!
//! Every location resolves within each set (the `Location` enum is closed),
//! but lookup still falls back to the grid center rather than panic so the
//! orchestrator stays total.

use crate::motion::{GridMode, Location, MotionCategory};
use crate::placement::types::Point;

/// Side length of the square grid, in pixel units.
pub const GRID_SIZE: f64 = 950.0;

/// Geometric center of the grid.
pub const GRID_CENTER: Point = Point { x: 475.0, y: 475.0 };

// Inner ring: cardinal points 143.1 units along an axis, diagonal points
// 101.2 units along both axes. Outer ring: 202.5 and 143.2 respectively.
const INNER_CARDINAL: f64 = 143.1;
const INNER_DIAGONAL: f64 = 101.2;
const OUTER_CARDINAL: f64 = 202.5;
const OUTER_DIAGONAL: f64 = 143.2;

/// Which of the two point sets a motion category anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSet {
    Hand,
    Layer2,
}

impl PointSet {
    /// Point-set selection is a pure function of the motion category.
    pub fn for_category(category: MotionCategory) -> PointSet {
        match category {
            MotionCategory::Static | MotionCategory::Dash => PointSet::Hand,
            MotionCategory::Pro | MotionCategory::Anti | MotionCategory::Float => PointSet::Layer2,
        }
    }
}

/// Canonical pixel anchor for an arrow of the given category at the given
/// location.
pub fn anchor_for(category: MotionCategory, location: Location, grid_mode: GridMode) -> Point {
    point_in_set(PointSet::for_category(category), location, grid_mode).unwrap_or(GRID_CENTER)
}

/// Anchor lookup within an explicit point set. `None` means the set has no
/// entry for the location; callers fall back to [`GRID_CENTER`].
pub fn point_in_set(set: PointSet, location: Location, grid_mode: GridMode) -> Option<Point> {
    let inner = match (grid_mode, set) {
        (GridMode::Diamond, PointSet::Hand) | (GridMode::Box, PointSet::Layer2) => true,
        (GridMode::Diamond, PointSet::Layer2) | (GridMode::Box, PointSet::Hand) => false,
    };
    let (cardinal, diagonal) = if inner {
        (INNER_CARDINAL, INNER_DIAGONAL)
    } else {
        (OUTER_CARDINAL, OUTER_DIAGONAL)
    };
    let (dx, dy) = match location {
        Location::Center => (0.0, 0.0),
        Location::N => (0.0, -cardinal),
        Location::NE => (diagonal, -diagonal),
        Location::E => (cardinal, 0.0),
        Location::SE => (diagonal, diagonal),
        Location::S => (0.0, cardinal),
        Location::SW => (-diagonal, diagonal),
        Location::W => (-cardinal, 0.0),
        Location::NW => (-diagonal, -diagonal),
    };
    Some(Point::new(GRID_CENTER.x + dx, GRID_CENTER.y + dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_selection_by_category() {
        assert_eq!(PointSet::for_category(MotionCategory::Static), PointSet::Hand);
        assert_eq!(PointSet::for_category(MotionCategory::Dash), PointSet::Hand);
        assert_eq!(PointSet::for_category(MotionCategory::Pro), PointSet::Layer2);
        assert_eq!(PointSet::for_category(MotionCategory::Anti), PointSet::Layer2);
        assert_eq!(PointSet::for_category(MotionCategory::Float), PointSet::Layer2);
    }

    #[test]
    fn test_diamond_hand_points_on_inner_ring() {
        let n = anchor_for(MotionCategory::Static, Location::N, GridMode::Diamond);
        assert_eq!(n, Point::new(475.0, 475.0 - 143.1));

        let s = anchor_for(MotionCategory::Dash, Location::S, GridMode::Diamond);
        assert_eq!(s, Point::new(475.0, 475.0 + 143.1));

        let ne = anchor_for(MotionCategory::Static, Location::NE, GridMode::Diamond);
        assert_eq!(ne, Point::new(475.0 + 101.2, 475.0 - 101.2));
    }

    #[test]
    fn test_diamond_layer2_points_on_outer_ring() {
        let ne = anchor_for(MotionCategory::Pro, Location::NE, GridMode::Diamond);
        assert_eq!(ne, Point::new(475.0 + 143.2, 475.0 - 143.2));

        let s = anchor_for(MotionCategory::Float, Location::S, GridMode::Diamond);
        assert_eq!(s, Point::new(475.0, 475.0 + 202.5));
    }

    #[test]
    fn test_box_mode_swaps_rings() {
        // Box hand points sit on the outer ring, layer-2 on the inner.
        let ne = anchor_for(MotionCategory::Static, Location::NE, GridMode::Box);
        assert_eq!(ne, Point::new(475.0 + 143.2, 475.0 - 143.2));

        let n = anchor_for(MotionCategory::Anti, Location::N, GridMode::Box);
        assert_eq!(n, Point::new(475.0, 475.0 - 143.1));
    }

    #[test]
    fn test_center_location_always_resolves() {
        for cat in MotionCategory::ALL {
            for mode in [GridMode::Diamond, GridMode::Box] {
                assert_eq!(anchor_for(cat, Location::Center, mode), GRID_CENTER);
            }
        }
    }

    #[test]
    fn test_anchor_total_over_all_inputs() {
        for cat in MotionCategory::ALL {
            for loc in Location::COMPASS {
                for mode in [GridMode::Diamond, GridMode::Box] {
                    let p = anchor_for(cat, loc, mode);
                    assert!(p.x.is_finite() && p.y.is_finite());
                    assert!(p.x >= 0.0 && p.x <= GRID_SIZE);
                    assert!(p.y >= 0.0 && p.y <= GRID_SIZE);
                }
            }
        }
    }

    #[test]
    fn test_opposite_locations_mirror_through_center() {
        for loc in Location::COMPASS {
            let p = anchor_for(MotionCategory::Pro, loc, GridMode::Diamond);
            let q = anchor_for(MotionCategory::Pro, loc.opposite(), GridMode::Diamond);
            assert!((p.x - 475.0 + (q.x - 475.0)).abs() < 1e-9);
            assert!((p.y - 475.0 + (q.y - 475.0)).abs() < 1e-9);
        }
    }
}

//! Core value types for the placement pipeline

use serde::Deserialize;

use crate::motion::Location;

/// A 2D point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by an adjustment vector.
    pub fn offset(&self, adjustment: AdjustmentVector) -> Point {
        Point {
            x: self.x + adjustment.dx,
            y: self.y + adjustment.dy,
        }
    }
}

/// A fine pixel-space position adjustment applied on top of a grid anchor.
///
/// Zero is a valid and common value; the adjustment is always defined once
/// lookup has resolved, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct AdjustmentVector {
    pub dx: f64,
    pub dy: f64,
}

impl AdjustmentVector {
    pub const ZERO: AdjustmentVector = AdjustmentVector { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// The exact negation of this vector.
    pub fn negate(&self) -> AdjustmentVector {
        AdjustmentVector {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl From<[f64; 2]> for AdjustmentVector {
    fn from(value: [f64; 2]) -> Self {
        AdjustmentVector {
            dx: value[0],
            dy: value[1],
        }
    }
}

/// The final placement of one mover's arrow glyph.
///
/// Created fresh per orchestrator invocation and never mutated in place.
/// `final_position` is always `anchor + adjustment`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementResult {
    /// Grid cell the arrow occupies
    pub location: Location,
    /// Canonical pixel anchor for that cell
    pub anchor: Point,
    /// Fine adjustment applied on top of the anchor
    pub adjustment: AdjustmentVector,
    /// `anchor + adjustment`
    pub final_position: Point,
    /// Rotation angle in degrees, `[0, 360)`, SVG convention
    /// (0° = east, clockwise positive, y-down)
    pub rotation_degrees: f64,
    /// Whether the glyph must be horizontally mirrored
    pub mirrored: bool,
}

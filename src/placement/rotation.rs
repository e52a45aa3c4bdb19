//! Rotation resolver
//!
//! Determines an arrow's rotation angle from its motion category, rotational
//! sense, and resolved grid location.
//!
//! ## Angle convention
//!
//! SVG convention throughout: 0 degrees points east, angles grow clockwise,
//! y-axis points down. All returned values are normalized to `[0, 360)`.
//!
//! ## Angle tables
//!
//! The eight values per table are validated reference constants, not derived
//! geometry. Swapping in externally validated data happens here and nowhere
//! else. `Static` arrows always point inward toward the grid center,
//! independent of sense. `Float` reuses the `Pro` tables. A no-rotation
//! `Dash` consults a straight-through pair table first and falls back to the
//! inward table at the resolved location.

use crate::motion::{Location, MotionAttributes, MotionCategory, RotationalSense};

/// Resolve the rotation angle in degrees, `[0, 360)`, for a motion whose
/// arrow occupies `location`.
pub fn resolve_rotation(motion: &MotionAttributes, location: Location) -> f64 {
    let degrees = match motion.category {
        MotionCategory::Static => inward_angle(location),
        MotionCategory::Pro | MotionCategory::Float => match motion.sense {
            RotationalSense::CounterClockwise => pro_ccw_angle(location),
            // Float has no sense of its own; the clockwise table applies.
            RotationalSense::Clockwise | RotationalSense::NoRotation => pro_cw_angle(location),
        },
        MotionCategory::Anti => match motion.sense {
            // Anti tables are the Pro tables with the senses exchanged.
            RotationalSense::Clockwise => pro_ccw_angle(location),
            RotationalSense::CounterClockwise | RotationalSense::NoRotation => {
                pro_cw_angle(location)
            }
        },
        MotionCategory::Dash => match motion.sense {
            RotationalSense::Clockwise => dash_cw_angle(location),
            RotationalSense::CounterClockwise => dash_ccw_angle(location),
            RotationalSense::NoRotation => {
                dash_pair_angle(motion.start_location, motion.end_location)
                    .unwrap_or_else(|| inward_angle(location))
            }
        },
    };
    normalize_degrees(degrees)
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Inward-pointing angles, used by `Static` arrows regardless of sense.
fn inward_angle(location: Location) -> f64 {
    match location {
        Location::N => 90.0,
        Location::NE => 135.0,
        Location::E => 180.0,
        Location::SE => 225.0,
        Location::S => 270.0,
        Location::SW => 315.0,
        Location::W => 0.0,
        Location::NW => 45.0,
        Location::Center => 0.0,
    }
}

fn pro_cw_angle(location: Location) -> f64 {
    match location {
        Location::N => 315.0,
        Location::NE => 0.0,
        Location::E => 45.0,
        Location::SE => 90.0,
        Location::S => 135.0,
        Location::SW => 180.0,
        Location::W => 225.0,
        Location::NW => 270.0,
        Location::Center => 0.0,
    }
}

fn pro_ccw_angle(location: Location) -> f64 {
    match location {
        Location::N => 315.0,
        Location::NE => 270.0,
        Location::E => 225.0,
        Location::SE => 180.0,
        Location::S => 135.0,
        Location::SW => 90.0,
        Location::W => 45.0,
        Location::NW => 0.0,
        Location::Center => 0.0,
    }
}

fn dash_cw_angle(location: Location) -> f64 {
    match location {
        Location::N => 270.0,
        Location::NE => 315.0,
        Location::E => 0.0,
        Location::SE => 45.0,
        Location::S => 90.0,
        Location::SW => 135.0,
        Location::W => 180.0,
        Location::NW => 225.0,
        Location::Center => 0.0,
    }
}

fn dash_ccw_angle(location: Location) -> f64 {
    match location {
        Location::N => 270.0,
        Location::NE => 225.0,
        Location::E => 180.0,
        Location::SE => 135.0,
        Location::S => 90.0,
        Location::SW => 45.0,
        Location::W => 0.0,
        Location::NW => 315.0,
        Location::Center => 0.0,
    }
}

/// Angles for straight-through no-rotation dashes, keyed by the ordered
/// travel pair. Reversed pairs are exactly 180 degrees apart.
fn dash_pair_angle(start: Location, end: Location) -> Option<f64> {
    use Location::*;
    let degrees = match (start, end) {
        (N, S) => 90.0,
        (S, N) => 270.0,
        (E, W) => 180.0,
        (W, E) => 0.0,
        (NE, SW) => 135.0,
        (SW, NE) => 315.0,
        (SE, NW) => 225.0,
        (NW, SE) => 45.0,
        _ => return None,
    };
    Some(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Turns;

    fn motion(
        category: MotionCategory,
        start: Location,
        end: Location,
        sense: RotationalSense,
    ) -> MotionAttributes {
        MotionAttributes::new(category, start, end).with_sense(sense)
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
    }

    #[test]
    fn test_static_points_inward_regardless_of_sense() {
        for sense in RotationalSense::ALL {
            let m = motion(MotionCategory::Static, Location::N, Location::N, sense);
            assert_eq!(resolve_rotation(&m, Location::N), 90.0);
            let m = motion(MotionCategory::Static, Location::SW, Location::SW, sense);
            assert_eq!(resolve_rotation(&m, Location::SW), 315.0);
        }
    }

    #[test]
    fn test_pro_tables_by_sense() {
        let cw = motion(
            MotionCategory::Pro,
            Location::N,
            Location::S,
            RotationalSense::Clockwise,
        );
        assert_eq!(resolve_rotation(&cw, Location::S), 135.0);
        assert_eq!(resolve_rotation(&cw, Location::NE), 0.0);

        let ccw = motion(
            MotionCategory::Pro,
            Location::N,
            Location::S,
            RotationalSense::CounterClockwise,
        );
        assert_eq!(resolve_rotation(&ccw, Location::NE), 270.0);
        assert_eq!(resolve_rotation(&ccw, Location::W), 45.0);
    }

    #[test]
    fn test_anti_swaps_the_pro_tables() {
        for loc in Location::COMPASS {
            let pro_cw = motion(MotionCategory::Pro, Location::N, loc, RotationalSense::Clockwise);
            let anti_ccw = motion(
                MotionCategory::Anti,
                Location::N,
                loc,
                RotationalSense::CounterClockwise,
            );
            assert_eq!(
                resolve_rotation(&pro_cw, loc),
                resolve_rotation(&anti_ccw, loc)
            );
        }
    }

    #[test]
    fn test_float_reuses_pro_tables() {
        for loc in Location::COMPASS {
            for sense in [RotationalSense::Clockwise, RotationalSense::CounterClockwise] {
                let float = motion(MotionCategory::Float, Location::N, loc, sense)
                    .with_turns(Turns::Float);
                let pro = motion(MotionCategory::Pro, Location::N, loc, sense);
                assert_eq!(resolve_rotation(&float, loc), resolve_rotation(&pro, loc));
            }
        }
    }

    #[test]
    fn test_dash_no_rotation_reversed_pairs_differ_by_180() {
        let pairs = [
            (Location::N, Location::S),
            (Location::E, Location::W),
            (Location::NE, Location::SW),
            (Location::SE, Location::NW),
        ];
        for (a, b) in pairs {
            let fwd = motion(MotionCategory::Dash, a, b, RotationalSense::NoRotation);
            let rev = motion(MotionCategory::Dash, b, a, RotationalSense::NoRotation);
            let fwd_deg = resolve_rotation(&fwd, Location::Center);
            let rev_deg = resolve_rotation(&rev, Location::Center);
            assert_eq!(normalize_degrees(fwd_deg - rev_deg).abs(), 180.0);
        }
    }

    #[test]
    fn test_dash_no_rotation_absent_pair_falls_back_to_inward() {
        // N -> E has no straight-through entry; the resolved location's
        // inward angle applies.
        let m = motion(MotionCategory::Dash, Location::N, Location::E, RotationalSense::NoRotation);
        assert_eq!(resolve_rotation(&m, Location::E), 180.0);
    }

    #[test]
    fn test_dash_sense_tables() {
        let cw = motion(MotionCategory::Dash, Location::N, Location::S, RotationalSense::Clockwise);
        assert_eq!(resolve_rotation(&cw, Location::S), 90.0);
        let ccw = motion(
            MotionCategory::Dash,
            Location::N,
            Location::S,
            RotationalSense::CounterClockwise,
        );
        assert_eq!(resolve_rotation(&ccw, Location::W), 0.0);
    }

    #[test]
    fn test_rotation_always_in_range() {
        for cat in MotionCategory::ALL {
            for sense in RotationalSense::ALL {
                for start in Location::COMPASS {
                    for end in Location::COMPASS {
                        for loc in Location::COMPASS {
                            let m = motion(cat, start, end, sense);
                            let deg = resolve_rotation(&m, loc);
                            assert!((0.0..360.0).contains(&deg), "{cat:?} {sense:?} {deg}");
                        }
                    }
                }
            }
        }
    }
}

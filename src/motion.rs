//! Motion vocabulary for the placement pipeline
//!
//! All symbolic values used by the placement algorithms live here as closed
//! enumerations. String forms (as produced by the notation authoring layer,
//! e.g. `"cw"`, `"ne"`, `"in"`) are parsed once at this boundary via
//! `FromStr`; everything past this module operates on enums only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Category of a mover's motion. Determines which location, rotation, and
/// adjustment strategy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionCategory {
    Static,
    Pro,
    Anti,
    Dash,
    Float,
}

impl MotionCategory {
    /// All categories, for exhaustive table-driven tests and sweeps.
    pub const ALL: [MotionCategory; 5] = [
        MotionCategory::Static,
        MotionCategory::Pro,
        MotionCategory::Anti,
        MotionCategory::Dash,
        MotionCategory::Float,
    ];

    /// Lowercase notation form, used in placement-key derivation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionCategory::Static => "static",
            MotionCategory::Pro => "pro",
            MotionCategory::Anti => "anti",
            MotionCategory::Dash => "dash",
            MotionCategory::Float => "float",
        }
    }
}

impl fmt::Display for MotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(MotionCategory::Static),
            "pro" => Ok(MotionCategory::Pro),
            "anti" => Ok(MotionCategory::Anti),
            "dash" => Ok(MotionCategory::Dash),
            "float" | "fl" => Ok(MotionCategory::Float),
            _ => Err(ParseError::unknown_category(s)),
        }
    }
}

/// A symbolic grid location: the eight compass points plus the grid center.
///
/// Locations are never synthesized outside this set; every table in the
/// pipeline is keyed by these nine values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Center,
}

impl Location {
    /// The eight compass points (excludes `Center`).
    pub const COMPASS: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// Lowercase notation form, used in placement-key derivation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
            Location::Center => "center",
        }
    }

    /// Whether this is one of the four cardinal points (N, E, S, W).
    pub fn is_cardinal(&self) -> bool {
        matches!(self, Location::N | Location::E | Location::S | Location::W)
    }

    /// Whether this is one of the four diagonal points (NE, SE, SW, NW).
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Location::NE | Location::SE | Location::SW | Location::NW
        )
    }

    /// The diagonally opposite compass point. `Center` is its own opposite.
    pub fn opposite(&self) -> Location {
        match self {
            Location::N => Location::S,
            Location::NE => Location::SW,
            Location::E => Location::W,
            Location::SE => Location::NW,
            Location::S => Location::N,
            Location::SW => Location::NE,
            Location::W => Location::E,
            Location::NW => Location::SE,
            Location::Center => Location::Center,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Location::N),
            "ne" | "northeast" => Ok(Location::NE),
            "e" | "east" => Ok(Location::E),
            "se" | "southeast" => Ok(Location::SE),
            "s" | "south" => Ok(Location::S),
            "sw" | "southwest" => Ok(Location::SW),
            "w" | "west" => Ok(Location::W),
            "nw" | "northwest" => Ok(Location::NW),
            "center" | "c" => Ok(Location::Center),
            _ => Err(ParseError::unknown_location(s)),
        }
    }
}

/// Rotational facing of a prop at a point in time.
///
/// `In`/`Out` are the radial (layer-1) facings; `Clockwise`/`Counter` are
/// the rotational facings; `Alpha`/`Beta` are symbolic states that occur
/// only in orientation-key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    In,
    Out,
    Clockwise,
    Counter,
    Alpha,
    Beta,
}

impl Orientation {
    /// Whether this orientation belongs to the radial (layer-1) class.
    pub fn is_layer1(&self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Fixed priority index of this orientation within its class, used in
    /// mixed-class (`from_layer3`) orientation keys.
    pub fn rank(&self) -> u8 {
        match self {
            Orientation::In => 1,
            Orientation::Out => 2,
            Orientation::Clockwise => 1,
            Orientation::Counter => 2,
            Orientation::Alpha => 3,
            Orientation::Beta => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clockwise => "clock",
            Orientation::Counter => "counter",
            Orientation::Alpha => "alpha",
            Orientation::Beta => "beta",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Orientation::In),
            "out" => Ok(Orientation::Out),
            "clock" | "clockwise" | "cw" => Ok(Orientation::Clockwise),
            "counter" | "counterclockwise" | "ccw" => Ok(Orientation::Counter),
            "alpha" => Ok(Orientation::Alpha),
            "beta" => Ok(Orientation::Beta),
            _ => Err(ParseError::unknown_orientation(s)),
        }
    }
}

/// Rotational sense of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationalSense {
    Clockwise,
    CounterClockwise,
    NoRotation,
}

impl RotationalSense {
    pub const ALL: [RotationalSense; 3] = [
        RotationalSense::Clockwise,
        RotationalSense::CounterClockwise,
        RotationalSense::NoRotation,
    ];
}

impl FromStr for RotationalSense {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(RotationalSense::Clockwise),
            "ccw" | "counterclockwise" | "counter_clockwise" => {
                Ok(RotationalSense::CounterClockwise)
            }
            "no_rot" | "norot" | "none" => Ok(RotationalSense::NoRotation),
            _ => Err(ParseError::unknown_sense(s)),
        }
    }
}

/// Turn count of a motion: a non-negative rational in half-unit steps, or
/// the distinguished float marker used only with [`MotionCategory::Float`].
///
/// Stored as integral half-units so table keys can be matched exactly
/// without floating-point comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turns {
    /// A concrete turn count, in half-unit steps (`halves = 3` is 1.5 turns).
    Halves(u8),
    /// The symbolic float marker (notation form `"fl"`).
    Float,
}

impl Turns {
    /// Zero turns.
    pub const ZERO: Turns = Turns::Halves(0);

    /// Build from whole turns, saturating at the largest representable
    /// count (127 turns).
    pub fn whole(n: u8) -> Turns {
        Turns::Halves(n.min(127) * 2)
    }

    /// Build from a float value, validating half-step granularity and
    /// non-negativity.
    pub fn from_f64(value: f64) -> Result<Turns, ParseError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ParseError::invalid_turns(value.to_string()));
        }
        let halves = value * 2.0;
        if (halves - halves.round()).abs() > 1e-9 || halves > u8::MAX as f64 {
            return Err(ParseError::invalid_turns(value.to_string()));
        }
        Ok(Turns::Halves(halves.round() as u8))
    }

    /// Numeric value; the float marker counts as zero turns of rotation.
    pub fn as_f64(&self) -> f64 {
        match self {
            Turns::Halves(h) => *h as f64 / 2.0,
            Turns::Float => 0.0,
        }
    }

    /// The table-key form: `"0"`, `"0.5"`, `"1"`, ... or `"fl"`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::ZERO
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Halves(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            Turns::Halves(h) => write!(f, "{}.5", h / 2),
            Turns::Float => f.write_str("fl"),
        }
    }
}

impl FromStr for Turns {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("fl") || trimmed.eq_ignore_ascii_case("float") {
            return Ok(Turns::Float);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseError::invalid_turns(trimmed))?;
        Turns::from_f64(value)
    }
}

/// Identity of one of the two movers on a pictograph, by conventional color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoverId {
    Blue,
    Red,
}

impl MoverId {
    pub const ALL: [MoverId; 2] = [MoverId::Blue, MoverId::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoverId::Blue => "blue",
            MoverId::Red => "red",
        }
    }
}

impl fmt::Display for MoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoverId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(MoverId::Blue),
            "red" => Ok(MoverId::Red),
            _ => Err(ParseError::unknown_mover(s)),
        }
    }
}

/// Grid coordinate layout. Selects which point sets and which placement
/// tables are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridMode {
    Diamond,
    Box,
}

impl GridMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diamond" => Ok(GridMode::Diamond),
            "box" => Ok(GridMode::Box),
            _ => Err(ParseError::unknown_grid_mode(s)),
        }
    }
}

/// The symbolic description of one mover's motion on a single pictograph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionAttributes {
    pub category: MotionCategory,
    pub start_location: Location,
    pub end_location: Location,
    pub start_orientation: Orientation,
    pub end_orientation: Orientation,
    pub sense: RotationalSense,
    pub turns: Turns,
}

impl MotionAttributes {
    /// Create a motion with radial orientations, no rotation, and zero turns.
    pub fn new(category: MotionCategory, start: Location, end: Location) -> Self {
        Self {
            category,
            start_location: start,
            end_location: end,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            sense: RotationalSense::NoRotation,
            turns: Turns::ZERO,
        }
    }

    /// Set the rotational sense.
    pub fn with_sense(mut self, sense: RotationalSense) -> Self {
        self.sense = sense;
        self
    }

    /// Set the turn count.
    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    /// Set start and end orientations.
    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }

    /// Effective turn count for table lookups. Turns are irrelevant for
    /// `Static` motions and are treated as zero.
    pub fn effective_turns(&self) -> Turns {
        if self.category == MotionCategory::Static {
            Turns::ZERO
        } else {
            self.turns
        }
    }
}

/// One frame of the notation: a symbol identifier, a grid mode, and the
/// motions of whichever movers are present (0, 1, or 2).
#[derive(Debug, Clone, PartialEq)]
pub struct PictographContext {
    pub symbol_id: String,
    pub grid_mode: GridMode,
    pub movers: BTreeMap<MoverId, MotionAttributes>,
}

impl PictographContext {
    /// Create an empty context for a symbol.
    pub fn new(symbol_id: impl Into<String>, grid_mode: GridMode) -> Self {
        Self {
            symbol_id: symbol_id.into(),
            grid_mode,
            movers: BTreeMap::new(),
        }
    }

    /// Add a mover's motion.
    pub fn with_mover(mut self, mover: MoverId, motion: MotionAttributes) -> Self {
        self.movers.insert(mover, motion);
        self
    }

    /// The motion of a given mover, if present.
    pub fn motion(&self, mover: MoverId) -> Option<&MotionAttributes> {
        self.movers.get(&mover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in MotionCategory::ALL {
            let parsed: MotionCategory = cat.as_str().parse().unwrap();
            assert_eq!(parsed, cat);
        }
    }

    #[test]
    fn test_category_case_insensitive() {
        assert_eq!("PRO".parse::<MotionCategory>().unwrap(), MotionCategory::Pro);
        assert_eq!(" Dash ".parse::<MotionCategory>().unwrap(), MotionCategory::Dash);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("spin".parse::<MotionCategory>().is_err());
    }

    #[test]
    fn test_location_round_trip() {
        for loc in Location::COMPASS {
            let parsed: Location = loc.as_str().parse().unwrap();
            assert_eq!(parsed, loc);
        }
        assert_eq!("center".parse::<Location>().unwrap(), Location::Center);
    }

    #[test]
    fn test_location_opposites() {
        for loc in Location::COMPASS {
            assert_eq!(loc.opposite().opposite(), loc);
            assert_ne!(loc.opposite(), loc);
        }
        assert_eq!(Location::Center.opposite(), Location::Center);
    }

    #[test]
    fn test_location_cardinal_diagonal_partition() {
        for loc in Location::COMPASS {
            assert!(loc.is_cardinal() ^ loc.is_diagonal());
        }
        assert!(!Location::Center.is_cardinal());
        assert!(!Location::Center.is_diagonal());
    }

    #[test]
    fn test_sense_parsing() {
        assert_eq!(
            "cw".parse::<RotationalSense>().unwrap(),
            RotationalSense::Clockwise
        );
        assert_eq!(
            "CCW".parse::<RotationalSense>().unwrap(),
            RotationalSense::CounterClockwise
        );
        assert_eq!(
            "no_rot".parse::<RotationalSense>().unwrap(),
            RotationalSense::NoRotation
        );
    }

    #[test]
    fn test_turns_display_forms() {
        assert_eq!(Turns::Halves(0).to_string(), "0");
        assert_eq!(Turns::Halves(1).to_string(), "0.5");
        assert_eq!(Turns::Halves(2).to_string(), "1");
        assert_eq!(Turns::Halves(5).to_string(), "2.5");
        assert_eq!(Turns::Float.to_string(), "fl");
    }

    #[test]
    fn test_turns_from_f64_half_steps() {
        assert_eq!(Turns::from_f64(1.5).unwrap(), Turns::Halves(3));
        assert_eq!(Turns::from_f64(0.0).unwrap(), Turns::ZERO);
        assert!(Turns::from_f64(0.25).is_err());
        assert!(Turns::from_f64(-1.0).is_err());
        assert!(Turns::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_turns_whole_saturates_instead_of_overflowing() {
        assert_eq!(Turns::whole(1), Turns::Halves(2));
        assert_eq!(Turns::whole(127), Turns::Halves(254));
        assert_eq!(Turns::whole(128), Turns::Halves(254));
        assert_eq!(Turns::whole(u8::MAX), Turns::Halves(254));
    }

    #[test]
    fn test_turns_parse_float_marker() {
        assert_eq!("fl".parse::<Turns>().unwrap(), Turns::Float);
        assert_eq!("2.5".parse::<Turns>().unwrap(), Turns::Halves(5));
    }

    #[test]
    fn test_static_effective_turns_is_zero() {
        let motion = MotionAttributes::new(MotionCategory::Static, Location::N, Location::N)
            .with_turns(Turns::whole(2));
        assert_eq!(motion.effective_turns(), Turns::ZERO);

        let motion = MotionAttributes::new(MotionCategory::Pro, Location::N, Location::S)
            .with_turns(Turns::whole(2));
        assert_eq!(motion.effective_turns(), Turns::whole(2));
    }

    #[test]
    fn test_orientation_classes_and_ranks() {
        assert!(Orientation::In.is_layer1());
        assert!(Orientation::Out.is_layer1());
        assert!(!Orientation::Clockwise.is_layer1());
        assert!(!Orientation::Alpha.is_layer1());
        assert_eq!(Orientation::In.rank(), 1);
        assert_eq!(Orientation::Out.rank(), 2);
        assert_eq!(Orientation::Alpha.rank(), 3);
        assert_eq!(Orientation::Beta.rank(), 4);
    }

    #[test]
    fn test_context_builder() {
        let ctx = PictographContext::new("A", GridMode::Diamond).with_mover(
            MoverId::Blue,
            MotionAttributes::new(MotionCategory::Pro, Location::N, Location::S),
        );
        assert_eq!(ctx.movers.len(), 1);
        assert!(ctx.motion(MoverId::Blue).is_some());
        assert!(ctx.motion(MoverId::Red).is_none());
    }
}

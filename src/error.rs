//! Boundary parse errors
//!
//! The authoring layer supplies motion values as loose notation strings
//! (`"cw"`, `"ne"`, `"in"`). Parsing happens once, at the `FromStr`
//! boundary in [`crate::motion`]; unrecognized strings are rejected here
//! and never reach the placement algorithms.

use thiserror::Error;

/// Errors produced when parsing notation strings into motion values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized motion category
    #[error("unknown motion category '{0}'")]
    UnknownCategory(String),

    /// Unrecognized grid location
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// Unrecognized orientation
    #[error("unknown orientation '{0}'")]
    UnknownOrientation(String),

    /// Unrecognized rotational sense
    #[error("unknown rotational sense '{0}'")]
    UnknownSense(String),

    /// Unrecognized mover identity
    #[error("unknown mover '{0}'")]
    UnknownMover(String),

    /// Unrecognized grid mode
    #[error("unknown grid mode '{0}'")]
    UnknownGridMode(String),

    /// Turn count that is negative, non-finite, or off the half-unit grid
    #[error("invalid turn count '{0}' (expected non-negative half-unit steps or 'fl')")]
    InvalidTurns(String),
}

impl ParseError {
    pub fn unknown_category(s: impl Into<String>) -> Self {
        Self::UnknownCategory(s.into())
    }

    pub fn unknown_location(s: impl Into<String>) -> Self {
        Self::UnknownLocation(s.into())
    }

    pub fn unknown_orientation(s: impl Into<String>) -> Self {
        Self::UnknownOrientation(s.into())
    }

    pub fn unknown_sense(s: impl Into<String>) -> Self {
        Self::UnknownSense(s.into())
    }

    pub fn unknown_mover(s: impl Into<String>) -> Self {
        Self::UnknownMover(s.into())
    }

    pub fn unknown_grid_mode(s: impl Into<String>) -> Self {
        Self::UnknownGridMode(s.into())
    }

    pub fn invalid_turns(s: impl Into<String>) -> Self {
        Self::InvalidTurns(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_input() {
        let err = ParseError::unknown_category("spin");
        assert!(err.to_string().contains("spin"));

        let err = ParseError::invalid_turns("0.25");
        assert!(err.to_string().contains("0.25"));
        assert!(err.to_string().contains("half-unit"));
    }
}

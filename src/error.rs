//! Error types for maps and seek relations.
//!
//! Absence is never an error here: looking up a missing key yields the zero
//! value. Errors only arise at the interface boundary (a malformed seek
//! relation), when the arena cannot grow, or when a structural check fails.

use std::collections::TryReserveError;
use std::fmt;

/// A relation encoding that does not name a usable seek relation.
///
/// The bit encoding is `EQ = 1`, `GT = 2`, `LT = 4`. The degenerate
/// combinations `0` (none), `6` (less-or-greater) and `7` (any), as well as
/// anything above `7`, are rejected.
///
/// # Examples
///
/// ```rust
/// use seekmap::{InvalidRelationError, Relation};
///
/// let error = Relation::try_from(7_u8).unwrap_err();
/// assert_eq!(error, InvalidRelationError { bits: 7 });
/// assert_eq!(format!("{error}"), "invalid seek relation encoding: 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRelationError {
    /// The rejected encoding.
    pub bits: u8,
}

impl fmt::Display for InvalidRelationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid seek relation encoding: {}", self.bits)
    }
}

impl std::error::Error for InvalidRelationError {}

/// A relation operator string that could not be parsed.
///
/// # Examples
///
/// ```rust
/// use seekmap::Relation;
///
/// let error = "<>".parse::<Relation>().unwrap_err();
/// assert_eq!(format!("{error}"), "invalid seek relation operator: \"<>\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidRelationSyntaxError {
    /// The rejected operator text.
    pub text: String,
}

impl fmt::Display for InvalidRelationSyntaxError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid seek relation operator: {:?}", self.text)
    }
}

impl std::error::Error for InvalidRelationSyntaxError {}

/// Errors reported by [`TreeMap`](crate::TreeMap) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A seek relation encoding was rejected.
    InvalidRelation(InvalidRelationError),
    /// A seek relation operator string was rejected.
    InvalidRelationSyntax(InvalidRelationSyntaxError),
    /// The node arena could not grow to hold a new entry.
    AllocationFailed(TryReserveError),
    /// A structural check found a broken search tree.
    InvariantViolated {
        /// What was wrong.
        detail: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRelation(error) => write!(formatter, "{error}"),
            Self::InvalidRelationSyntax(error) => write!(formatter, "{error}"),
            Self::AllocationFailed(error) => {
                write!(formatter, "node allocation failed: {error}")
            }
            Self::InvariantViolated { detail } => {
                write!(formatter, "search tree invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRelation(error) => Some(error),
            Self::InvalidRelationSyntax(error) => Some(error),
            Self::AllocationFailed(error) => Some(error),
            Self::InvariantViolated { .. } => None,
        }
    }
}

impl From<InvalidRelationError> for MapError {
    fn from(error: InvalidRelationError) -> Self {
        Self::InvalidRelation(error)
    }
}

impl From<InvalidRelationSyntaxError> for MapError {
    fn from(error: InvalidRelationSyntaxError) -> Self {
        Self::InvalidRelationSyntax(error)
    }
}

impl From<TryReserveError> for MapError {
    fn from(error: TryReserveError) -> Self {
        Self::AllocationFailed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_relation_error_display() {
        let error = InvalidRelationError { bits: 0 };
        assert_eq!(format!("{error}"), "invalid seek relation encoding: 0");
    }

    #[rstest]
    fn test_map_error_wraps_relation_error() {
        let error = MapError::from(InvalidRelationError { bits: 6 });
        assert_eq!(format!("{error}"), "invalid seek relation encoding: 6");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[rstest]
    fn test_invariant_violation_display() {
        let error = MapError::InvariantViolated {
            detail: "node 3 is unreachable".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "search tree invariant violated: node 3 is unreachable"
        );
        assert!(std::error::Error::source(&error).is_none());
    }

    #[rstest]
    fn test_allocation_failure_display() {
        let reserve_error = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let error = MapError::from(reserve_error);
        assert!(format!("{error}").starts_with("node allocation failed: "));
    }
}

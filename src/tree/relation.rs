//! Seek relations.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidRelationError, InvalidRelationSyntaxError};

const EQUAL_BIT: u8 = 1;
const GREATER_BIT: u8 = 2;
const LESS_BIT: u8 = 4;

/// The relation a seek target must satisfy with respect to the sought key.
///
/// A seek lands on the satisfying node *nearest* to the key: the exact match
/// for [`Equal`](Self::Equal), the predecessor for the "less" relations and
/// the successor for the "greater" relations.
///
/// # Examples
///
/// ```rust
/// use seekmap::Relation;
/// use std::cmp::Ordering;
///
/// assert!(Relation::LessOrEqual.holds(Ordering::Equal));
/// assert!(!Relation::Less.holds(Ordering::Equal));
/// assert_eq!(">=".parse::<Relation>(), Ok(Relation::GreaterOrEqual));
/// assert_eq!(Relation::try_from(5_u8), Ok(Relation::LessOrEqual));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The key itself.
    Equal,
    /// The largest key strictly below.
    Less,
    /// The key itself, else the largest key below.
    LessOrEqual,
    /// The smallest key strictly above.
    Greater,
    /// The key itself, else the smallest key above.
    GreaterOrEqual,
}

impl Relation {
    /// All five relations.
    pub const ALL: [Self; 5] = [
        Self::Equal,
        Self::Less,
        Self::LessOrEqual,
        Self::Greater,
        Self::GreaterOrEqual,
    ];

    /// Returns `true` if an exact match satisfies the relation.
    #[inline]
    pub const fn includes_equal(self) -> bool {
        matches!(self, Self::Equal | Self::LessOrEqual | Self::GreaterOrEqual)
    }

    /// Returns `true` for the predecessor-seeking relations.
    #[inline]
    pub const fn is_less(self) -> bool {
        matches!(self, Self::Less | Self::LessOrEqual)
    }

    /// Returns `true` for the successor-seeking relations.
    #[inline]
    pub const fn is_greater(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterOrEqual)
    }

    /// Returns `true` if a candidate whose comparison against the sought key
    /// is `ordering` satisfies the relation.
    ///
    /// `ordering` is `candidate.cmp(sought)`.
    pub const fn holds(self, ordering: Ordering) -> bool {
        match ordering {
            Ordering::Less => self.is_less(),
            Ordering::Equal => self.includes_equal(),
            Ordering::Greater => self.is_greater(),
        }
    }

    /// The bit encoding of the relation (`EQ = 1`, `GT = 2`, `LT = 4`).
    pub const fn bits(self) -> u8 {
        match self {
            Self::Equal => EQUAL_BIT,
            Self::Less => LESS_BIT,
            Self::LessOrEqual => LESS_BIT | EQUAL_BIT,
            Self::Greater => GREATER_BIT,
            Self::GreaterOrEqual => GREATER_BIT | EQUAL_BIT,
        }
    }

    /// The operator spelling of the relation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }
}

impl TryFrom<u8> for Relation {
    type Error = InvalidRelationError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            EQUAL_BIT => Ok(Self::Equal),
            GREATER_BIT => Ok(Self::Greater),
            0b011 => Ok(Self::GreaterOrEqual),
            LESS_BIT => Ok(Self::Less),
            0b101 => Ok(Self::LessOrEqual),
            _ => Err(InvalidRelationError { bits }),
        }
    }
}

impl From<Relation> for u8 {
    fn from(relation: Relation) -> Self {
        relation.bits()
    }
}

impl FromStr for Relation {
    type Err = InvalidRelationSyntaxError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim() {
            "==" | "=" => Ok(Self::Equal),
            "<" => Ok(Self::Less),
            "<=" => Ok(Self::LessOrEqual),
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterOrEqual),
            _ => Err(InvalidRelationSyntaxError {
                text: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

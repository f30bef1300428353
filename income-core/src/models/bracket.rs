use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies a group of cards offered to one income range.
///
/// The string forms (`"2000-2900"`, ...) are what configuration files use and
/// the default directory names of the asset store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BracketId {
    From2000To2900,
    From3000To4900,
    From5000Up,
}

impl BracketId {
    pub fn all() -> &'static [BracketId] {
        &[
            BracketId::From2000To2900,
            BracketId::From3000To4900,
            BracketId::From5000Up,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From2000To2900 => "2000-2900",
            Self::From3000To4900 => "3000-4900",
            Self::From5000Up => "5000+",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "2000-2900" => Some(Self::From2000To2900),
            "3000-4900" => Some(Self::From3000To4900),
            "5000+" => Some(Self::From5000Up),
            _ => None,
        }
    }
}

impl fmt::Display for BracketId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for BracketId {
    type Error = BracketMappingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(BracketMappingError::UnknownBracket(value))
    }
}

impl From<BracketId> for String {
    fn from(id: BracketId) -> Self {
        id.as_str().to_string()
    }
}

/// A closed income interval `[lower, upper]` mapped to a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRange {
    pub lower: Decimal,
    pub upper: Decimal,
    pub bracket: BracketId,
}

impl BracketRange {
    pub fn new(
        lower: Decimal,
        upper: Decimal,
        bracket: BracketId,
    ) -> Self {
        Self {
            lower,
            upper,
            bracket,
        }
    }

    pub fn contains(
        &self,
        value: Decimal,
    ) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn overlaps(
        &self,
        other: &BracketRange,
    ) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketMappingError {
    #[error("unknown bracket '{0}'; expected one of 2000-2900, 3000-4900, 5000+")]
    UnknownBracket(String),

    #[error("range for {bracket} has lower bound {lower} above upper bound {upper}")]
    InvertedRange {
        bracket: BracketId,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("ranges for {first} and {second} overlap")]
    Overlap { first: BracketId, second: BracketId },

    #[error("bracket {0} is mapped by more than one range")]
    DuplicateBracket(BracketId),

    #[error("minimum income {minimum} is above the high income floor {floor}")]
    InvalidThresholds { minimum: Decimal, floor: Decimal },

    #[error("high bracket {0} must not also be mapped by a range")]
    HighBracketHasRange(BracketId),
}

/// Outcome of looking up a net income in a [`BracketMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketResolution {
    /// Below the minimum income; no cards are offered.
    Ineligible,
    /// Inside one of the explicit ranges.
    Bracket(BracketId),
    /// At or above the high income floor with no explicit range matching.
    HighBracket(BracketId),
    /// Eligible, but between ranges (e.g. 2901 to 2999 in the default mapping).
    Unmatched,
}

impl BracketResolution {
    pub fn bracket(&self) -> Option<BracketId> {
        match self {
            Self::Bracket(id) | Self::HighBracket(id) => Some(*id),
            Self::Ineligible | Self::Unmatched => None,
        }
    }
}

const DEFAULT_MINIMUM_INCOME: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);
const DEFAULT_HIGH_INCOME_FLOOR: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Ordered income ranges plus the catch-all high bracket.
///
/// Built only through [`BracketMapping::new`] (or deserialization, which goes
/// through the same checks), so ranges are never inverted or overlapping and
/// the high bracket never has a range of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBracketMapping")]
pub struct BracketMapping {
    ranges: Vec<BracketRange>,
    high_bracket: BracketId,
    minimum_income: Decimal,
    high_income_floor: Decimal,
}

impl BracketMapping {
    /// Creates a mapping with the standard thresholds (2000 minimum, 5000
    /// high floor). Ranges keep their order; the first match wins.
    pub fn new(
        ranges: Vec<BracketRange>,
        high_bracket: BracketId,
    ) -> Result<Self, BracketMappingError> {
        Self::with_thresholds(
            ranges,
            high_bracket,
            DEFAULT_MINIMUM_INCOME,
            DEFAULT_HIGH_INCOME_FLOOR,
        )
    }

    pub fn with_thresholds(
        ranges: Vec<BracketRange>,
        high_bracket: BracketId,
        minimum_income: Decimal,
        high_income_floor: Decimal,
    ) -> Result<Self, BracketMappingError> {
        if minimum_income > high_income_floor {
            return Err(BracketMappingError::InvalidThresholds {
                minimum: minimum_income,
                floor: high_income_floor,
            });
        }

        for (i, range) in ranges.iter().enumerate() {
            if range.lower > range.upper {
                return Err(BracketMappingError::InvertedRange {
                    bracket: range.bracket,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
            if range.bracket == high_bracket {
                return Err(BracketMappingError::HighBracketHasRange(high_bracket));
            }
            for earlier in &ranges[..i] {
                if earlier.bracket == range.bracket {
                    return Err(BracketMappingError::DuplicateBracket(range.bracket));
                }
                if earlier.overlaps(range) {
                    return Err(BracketMappingError::Overlap {
                        first: earlier.bracket,
                        second: range.bracket,
                    });
                }
            }
        }

        Ok(Self {
            ranges,
            high_bracket,
            minimum_income,
            high_income_floor,
        })
    }

    pub fn ranges(&self) -> &[BracketRange] {
        &self.ranges
    }

    pub fn high_bracket(&self) -> BracketId {
        self.high_bracket
    }

    pub fn minimum_income(&self) -> Decimal {
        self.minimum_income
    }

    pub fn high_income_floor(&self) -> Decimal {
        self.high_income_floor
    }

    /// The explicit range mapped to `bracket`, if any. The high bracket
    /// usually has none.
    pub fn range_for(
        &self,
        bracket: BracketId,
    ) -> Option<&BracketRange> {
        self.ranges.iter().find(|r| r.bracket == bracket)
    }
}

impl Default for BracketMapping {
    fn default() -> Self {
        Self {
            ranges: default_ranges(),
            high_bracket: BracketId::From5000Up,
            minimum_income: DEFAULT_MINIMUM_INCOME,
            high_income_floor: DEFAULT_HIGH_INCOME_FLOOR,
        }
    }
}

fn default_ranges() -> Vec<BracketRange> {
    vec![
        BracketRange::new(
            Decimal::from(2000),
            Decimal::from(2900),
            BracketId::From2000To2900,
        ),
        BracketRange::new(
            Decimal::from(3000),
            Decimal::from(4900),
            BracketId::From3000To4900,
        ),
    ]
}

fn default_high_bracket() -> BracketId {
    BracketId::From5000Up
}

fn default_minimum_income() -> Decimal {
    DEFAULT_MINIMUM_INCOME
}

fn default_high_income_floor() -> Decimal {
    DEFAULT_HIGH_INCOME_FLOOR
}

/// Unvalidated shape of a `[brackets]` configuration table.
#[derive(Debug, Deserialize)]
struct RawBracketMapping {
    #[serde(default = "default_ranges")]
    ranges: Vec<BracketRange>,
    #[serde(default = "default_high_bracket")]
    high_bracket: BracketId,
    #[serde(default = "default_minimum_income")]
    minimum_income: Decimal,
    #[serde(default = "default_high_income_floor")]
    high_income_floor: Decimal,
}

impl TryFrom<RawBracketMapping> for BracketMapping {
    type Error = BracketMappingError;

    fn try_from(raw: RawBracketMapping) -> Result<Self, Self::Error> {
        Self::with_thresholds(
            raw.ranges,
            raw.high_bracket,
            raw.minimum_income,
            raw.high_income_floor,
        )
    }
}

use std::fmt;

use thiserror::Error;

/// A qualitative magnitude drawn from the quantity space `{0, +, Max}`.
///
/// The variants are ordered along the quantity space, so `Zero < Positive <
/// Max`. Each variant is a landmark: behavior of the system changes
/// qualitatively whenever a quantity reaches or leaves one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Magnitude {
    Zero,
    Positive,
    Max,
}

/// A qualitative derivative drawn from `{-, 0, +}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    Decreasing,
    Steady,
    Increasing,
}

/// The quantity space of the tap, which has no maximum landmark.
pub const INFLOW_MAGNITUDES: [Magnitude; 2] = [Magnitude::Zero, Magnitude::Positive];

/// The quantity space of the volume and the outflow.
pub const MAGNITUDES: [Magnitude; 3] = [Magnitude::Zero, Magnitude::Positive, Magnitude::Max];

/// The derivative space shared by all three quantities.
pub const TRENDS: [Trend; 3] = [Trend::Decreasing, Trend::Steady, Trend::Increasing];

/// Error returned when an integer lies outside a qualitative domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{0} is not a magnitude (expected 0, 1 or 2)")]
    Magnitude(i8),

    #[error("{0} is not a trend (expected -1, 0 or 1)")]
    Trend(i8),
}

impl Magnitude {
    /// Returns the integer encoding: 0, 1 or 2.
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Self::Zero => 0,
            Self::Positive => 1,
            Self::Max => 2,
        }
    }

    /// Returns `true` for any magnitude above zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self != Self::Zero
    }

    /// Returns the diagram symbol for this magnitude.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::Positive => "+",
            Self::Max => "Max",
        }
    }
}

impl Trend {
    /// Returns the integer encoding: -1, 0 or 1.
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Self::Decreasing => -1,
            Self::Steady => 0,
            Self::Increasing => 1,
        }
    }

    /// Returns the diagram symbol for this trend.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Decreasing => "-",
            Self::Steady => "0",
            Self::Increasing => "+",
        }
    }
}

impl TryFrom<i8> for Magnitude {
    type Error = ValueError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::Positive),
            2 => Ok(Self::Max),
            other => Err(ValueError::Magnitude(other)),
        }
    }
}

impl TryFrom<i8> for Trend {
    type Error = ValueError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Decreasing),
            0 => Ok(Self::Steady),
            1 => Ok(Self::Increasing),
            other => Err(ValueError::Trend(other)),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

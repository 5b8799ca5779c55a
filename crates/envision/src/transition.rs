use std::fmt;

use brim_core::{Magnitude, RuleSet, State, Trend};

use crate::{
    epsilon::Changes,
    successors::{next_inflow_derivative, next_inflow_quantity, next_volume_quantity},
};

/// A legal step between two positions in the state sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a candidate transition was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// The target inflow magnitude is not a successor of the source.
    InflowQuantity,

    /// The target volume magnitude is not a successor of the source.
    VolumeQuantity,

    /// The target inflow derivative breaks the tap schedule.
    InflowDerivative,

    /// A full container would start rising.
    Overflow,

    /// Instantaneous and gradual changes would co-occur.
    EpsilonOrdering,
}

impl Rejection {
    /// Every rejection reason, in check order.
    pub const ALL: [Rejection; 5] = [
        Rejection::InflowQuantity,
        Rejection::VolumeQuantity,
        Rejection::InflowDerivative,
        Rejection::Overflow,
        Rejection::EpsilonOrdering,
    ];
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InflowQuantity => "inflow magnitude is unreachable",
            Self::VolumeQuantity => "volume magnitude is unreachable",
            Self::InflowDerivative => "tap schedule forbids the inflow derivative",
            Self::Overflow => "full container cannot start rising",
            Self::EpsilonOrdering => "instant and gradual changes co-occur",
        })
    }
}

/// Checks that each variable of `to` is a permitted successor of `from`.
///
/// The predicates are independent; the first one that fails is reported.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first failing predicate.
pub fn plausibility(from: &State, to: &State, rules: &RuleSet) -> Result<(), Rejection> {
    if !next_inflow_quantity(from).contains(&to.inflow.magnitude) {
        return Err(Rejection::InflowQuantity);
    }
    if !next_volume_quantity(from, rules).contains(&to.volume.magnitude) {
        return Err(Rejection::VolumeQuantity);
    }
    if !next_inflow_derivative(from).contains(&to.inflow.trend) {
        return Err(Rejection::InflowDerivative);
    }
    if rules.overflow_guard()
        && from.volume.magnitude == Magnitude::Max
        && to.volume.trend == Trend::Increasing
    {
        return Err(Rejection::Overflow);
    }
    Ok(())
}

/// Checks the epsilon-ordering law and returns the classified changes.
///
/// # Errors
///
/// Returns [`Rejection::EpsilonOrdering`] if the transition mixes an
/// instantaneous change with a gradual one.
pub fn epsilon_ordering(from: &State, to: &State) -> Result<Changes, Rejection> {
    let changes = Changes::between(from, to);
    if changes.is_mixed() {
        Err(Rejection::EpsilonOrdering)
    } else {
        Ok(changes)
    }
}

/// Runs every legality check on a candidate step.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies.
pub fn judge(from: &State, to: &State, rules: &RuleSet) -> Result<Changes, Rejection> {
    plausibility(from, to, rules)?;
    epsilon_ordering(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    use brim_core::{
        Magnitude::{Max, Positive, Zero},
        Trend::{Decreasing, Increasing, Steady},
    };

    #[test]
    fn opening_tap_fills_empty_container() {
        let start = State::new(Increasing, Zero, Steady, Zero, Steady, Zero);
        let filling = State::new(Increasing, Positive, Increasing, Zero, Increasing, Zero);

        assert!(judge(&start, &filling, &RuleSet::default()).is_ok());
    }

    #[test]
    fn reports_first_failing_predicate() {
        let rules = RuleSet::default();
        let start = State::new(Increasing, Zero, Steady, Zero, Steady, Zero);

        let still_closed = State::new(Increasing, Zero, Steady, Zero, Steady, Zero);
        assert_eq!(
            plausibility(&start, &still_closed, &rules),
            Err(Rejection::InflowQuantity)
        );

        let jumps_to_full = State::new(Increasing, Positive, Steady, Max, Steady, Max);
        assert_eq!(
            plausibility(&start, &jumps_to_full, &rules),
            Err(Rejection::VolumeQuantity)
        );

        let tap_stops = State::new(Steady, Positive, Increasing, Zero, Increasing, Zero);
        assert_eq!(
            plausibility(&start, &tap_stops, &rules),
            Err(Rejection::InflowDerivative)
        );
    }

    #[test]
    fn overflow_guard_blocks_rise_from_max() {
        let full = State::new(Steady, Positive, Steady, Max, Steady, Max);
        let rising = State::new(Steady, Positive, Increasing, Max, Increasing, Max);

        assert_eq!(
            plausibility(&full, &rising, &RuleSet::default()),
            Err(Rejection::Overflow)
        );
        assert!(plausibility(&full, &rising, &RuleSet::unguarded()).is_ok());
    }

    #[test]
    fn epsilon_ordering_rejects_mixed_step() {
        let from = State::new(Decreasing, Positive, Decreasing, Max, Decreasing, Max);
        let to = State::new(Steady, Zero, Decreasing, Positive, Decreasing, Positive);

        assert!(plausibility(&from, &to, &RuleSet::default()).is_ok());
        assert_eq!(judge(&from, &to, &RuleSet::default()), Err(Rejection::EpsilonOrdering));
    }
}

//! Epsilon ordering.
//!
//! A change that lands on the positive landmark happens in an instant: a
//! quantity leaves zero, or drops below its maximum, the moment it starts
//! moving. Any other change (reaching zero or reaching the maximum) takes an
//! interval of time. The two kinds cannot share one transition, because the
//! instantaneous change would already have happened before the gradual one
//! completes.

use brim_core::{Flow, Magnitude, State};

/// How a quantity's magnitude changes across a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The magnitude is unchanged.
    Neither,

    /// The magnitude changed and landed on the positive landmark.
    Instant,

    /// The magnitude changed and landed on zero or the maximum.
    NotInstant,
}

impl Change {
    /// Classifies a change from `prev` to `next`.
    #[must_use]
    pub fn classify(prev: Magnitude, next: Magnitude) -> Self {
        if prev == next {
            Self::Neither
        } else if next == Magnitude::Positive {
            Self::Instant
        } else {
            Self::NotInstant
        }
    }
}

/// The classified changes of all three quantities across one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Changes {
    pub inflow: Change,
    pub volume: Change,
    pub outflow: Change,
}

impl Changes {
    /// Classifies the magnitude changes between two states.
    #[must_use]
    pub fn between(from: &State, to: &State) -> Self {
        let classify = |flow| Change::classify(from.magnitude(flow), to.magnitude(flow));
        Self {
            inflow: classify(Flow::Inflow),
            volume: classify(Flow::Volume),
            outflow: classify(Flow::Outflow),
        }
    }

    /// Returns the change for one flow.
    #[must_use]
    pub fn get(&self, flow: Flow) -> Change {
        match flow {
            Flow::Inflow => self.inflow,
            Flow::Volume => self.volume,
            Flow::Outflow => self.outflow,
        }
    }

    /// Returns `true` if instantaneous and gradual changes co-occur.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        let all = [self.inflow, self.volume, self.outflow];
        all.contains(&Change::Instant) && all.contains(&Change::NotInstant)
    }
}

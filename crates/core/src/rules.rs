use crate::{Invariant, State};

/// How a draining volume may leave the maximum landmark in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxDrain {
    /// A volume at `Max` that is decreasing may become `+` or stay at `Max`.
    #[default]
    Gradual,

    /// A volume at `Max` that is decreasing must become `+`.
    Immediate,
}

/// The configurable part of the container model.
///
/// The variants differ only at the maximum landmark:
///
/// - `overflow_guard` adds the invariant `VQ == Max ⇒ VD ≠ +` and rejects any
///   transition from a full container into an increasing volume.
/// - `max_drain` selects the next volume magnitudes for a full, draining
///   container. See [`MaxDrain`].
///
/// The default is the reference model: guard on, gradual drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    overflow_guard: bool,
    max_drain: MaxDrain,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(true, MaxDrain::Gradual)
    }
}

impl RuleSet {
    /// Creates a rule set from its two boundary options.
    #[must_use]
    pub const fn new(overflow_guard: bool, max_drain: MaxDrain) -> Self {
        Self {
            overflow_guard,
            max_drain,
        }
    }

    /// The reference rules without the overflow guard.
    #[must_use]
    pub const fn unguarded() -> Self {
        Self::new(false, MaxDrain::Gradual)
    }

    /// Returns `true` if the overflow guard is active.
    #[must_use]
    pub fn overflow_guard(&self) -> bool {
        self.overflow_guard
    }

    /// Returns the drain behavior at the maximum landmark.
    #[must_use]
    pub fn max_drain(&self) -> MaxDrain {
        self.max_drain
    }

    /// Returns `self` with the overflow guard switched on or off.
    #[must_use]
    pub fn with_overflow_guard(self, overflow_guard: bool) -> Self {
        Self {
            overflow_guard,
            ..self
        }
    }

    /// Returns `self` with the given drain behavior.
    #[must_use]
    pub fn with_max_drain(self, max_drain: MaxDrain) -> Self {
        Self { max_drain, ..self }
    }

    /// Returns the invariants active under these rules.
    pub fn invariants(&self) -> impl Iterator<Item = Invariant> + use<> {
        let guard = self.overflow_guard;
        Invariant::ALL
            .into_iter()
            .filter(move |inv| guard || *inv != Invariant::OverflowGuard)
    }

    /// Returns `true` if the state satisfies every active invariant.
    #[must_use]
    pub fn admits(&self, state: &State) -> bool {
        self.invariants().all(|inv| inv.holds(state))
    }

    /// Returns the active invariants the state violates, in declaration order.
    #[must_use]
    pub fn violations(&self, state: &State) -> Vec<Invariant> {
        self.invariants().filter(|inv| !inv.holds(state)).collect()
    }
}

//! Per-variable successor predicates.
//!
//! Each function looks at a single state and returns the values one variable
//! may take in the next state, independently of every other variable. An
//! empty set means the variable has nowhere to go.

use std::collections::BTreeSet;

use brim_core::{Magnitude, MaxDrain, RuleSet, State, Trend};

use Magnitude::{Max, Positive, Zero};
use Trend::{Decreasing, Increasing, Steady};

/// Returns the possible next inflow magnitudes.
///
/// A steady tap holds its flow, an opening tap flows, and a closing tap may
/// shut off only if it was flowing.
#[must_use]
pub fn next_inflow_quantity(state: &State) -> BTreeSet<Magnitude> {
    let current = state.inflow.magnitude;
    match state.inflow.trend {
        Steady => BTreeSet::from([current]),
        Increasing => BTreeSet::from([Positive]),
        Decreasing => match current {
            Positive => BTreeSet::from([Zero, Positive]),
            Zero => BTreeSet::from([Zero]),
            Max => BTreeSet::new(),
        },
    }
}

/// Returns the possible next inflow derivatives.
///
/// The tap keeps opening until the container is full, then stops. After
/// that it may hold or close further, but never opens again.
#[must_use]
pub fn next_inflow_derivative(state: &State) -> BTreeSet<Trend> {
    match state.inflow.trend {
        Increasing if state.volume.magnitude == Max => BTreeSet::from([Steady]),
        Increasing => BTreeSet::from([Increasing]),
        Steady | Decreasing => BTreeSet::from([Decreasing, Steady]),
    }
}

/// Returns the possible next volume magnitudes.
///
/// A rising volume moves up the quantity space one landmark at a time and a
/// falling one moves down. Leaving `Max` while draining depends on
/// [`RuleSet::max_drain`].
#[must_use]
pub fn next_volume_quantity(state: &State, rules: &RuleSet) -> BTreeSet<Magnitude> {
    let current = state.volume.magnitude;
    match state.volume.trend {
        Steady => BTreeSet::from([current]),
        Increasing => match current {
            Zero => BTreeSet::from([Positive]),
            Positive => BTreeSet::from([Positive, Max]),
            Max => BTreeSet::from([Max]),
        },
        Decreasing => match current {
            Zero => BTreeSet::from([Zero]),
            Positive => BTreeSet::from([Zero, Positive]),
            Max => match rules.max_drain() {
                MaxDrain::Gradual => BTreeSet::from([Positive, Max]),
                MaxDrain::Immediate => BTreeSet::from([Positive]),
            },
        },
    }
}

/// Returns the volume derivatives consistent with the state's flows.
///
/// The derivative follows the balance of inflow against outflow. With both
/// flowing the balance is qualitatively ambiguous, except that a guarded
/// container at its maximum cannot rise.
///
/// A guarded container at its maximum may still fall as well as hold, so
/// the result there is `{-, 0}` rather than `{0}` alone. Holding only would
/// leave the draining full states without a consistent derivative.
#[must_use]
pub fn next_volume_derivative(state: &State, rules: &RuleSet) -> BTreeSet<Trend> {
    let inflow = state.inflow.magnitude;
    let outflow = state.outflow.magnitude;

    match (inflow.is_positive(), outflow.is_positive()) {
        (false, true) => BTreeSet::from([Decreasing]),
        (false, false) => BTreeSet::from([Steady]),
        (true, false) => BTreeSet::from([Increasing]),
        (true, true) if rules.overflow_guard() && state.volume.magnitude == Max => {
            BTreeSet::from([Decreasing, Steady])
        }
        (true, true) => BTreeSet::from([Decreasing, Steady, Increasing]),
    }
}

use brim_core::{INFLOW_MAGNITUDES, MAGNITUDES, RuleSet, State, TRENDS};
use itertools::{Itertools, iproduct};

use crate::{Error, Transition};

/// Returns every assignment of the six variables, legal or not.
///
/// The order is nested iteration with ID outermost and OQ innermost, each
/// domain ascending. Positions in the legal state sequence inherit it.
pub fn assignments() -> impl Iterator<Item = State> {
    iproduct!(TRENDS, INFLOW_MAGNITUDES, TRENDS, MAGNITUDES, TRENDS, MAGNITUDES)
        .map(|(id, iq, vd, vq, od, oq)| State::new(id, iq, vd, vq, od, oq))
}

/// Returns the ordered sequence of legal states under the given rules.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if no assignment satisfies the rules.
pub fn legal_states(rules: &RuleSet) -> Result<Vec<State>, Error> {
    admit(assignments(), rules)
}

/// Keeps the assignments that satisfy every active invariant.
pub(crate) fn admit<I>(assignments: I, rules: &RuleSet) -> Result<Vec<State>, Error>
where
    I: IntoIterator<Item = State>,
{
    let states: Vec<State> = assignments
        .into_iter()
        .filter(|state| rules.admits(state))
        .collect();

    if states.is_empty() {
        return Err(Error::Configuration { rules: *rules });
    }
    Ok(states)
}

/// Returns every ordered pair of distinct positions, sorted by `(from, to)`.
pub(crate) fn candidates(count: usize) -> Vec<Transition> {
    (0..count)
        .permutations(2)
        .map(|pair| Transition::new(pair[0], pair[1]))
        .collect()
}

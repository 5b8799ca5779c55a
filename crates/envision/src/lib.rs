//! Envisionment of the Brim container model.
//!
//! # Algorithm
//!
//! An envisionment is the set of every consistent qualitative state together
//! with every legal transition between them. Each step below produces a new
//! sequence from the previous one:
//!
//! 1. **States**: the full product of the variable domains is filtered by
//!    the invariants of the [`RuleSet`]. An empty result is a configuration
//!    error.
//! 2. **Candidates**: every ordered pair of distinct states, sorted by
//!    `(from, to)`.
//! 3. **Transitions**: each candidate is judged once. It must first be
//!    plausible: the target's inflow magnitude, volume magnitude and inflow
//!    derivative are each permitted successors of the source (see
//!    [`successors`]), and the overflow guard does not apply. It must then
//!    respect epsilon ordering: no quantity reaches the positive landmark
//!    instantly while another changes gradually (see [`Changes::is_mixed`]).
//!
//! # Observer Events
//!
//! [`envision`] emits one [`Event::Rejected`] or [`Event::Accepted`] per
//! candidate, in `(from, to)` order, then one [`Event::Terminal`] per state
//! without successors, in state order. Observers can answer an accepted
//! candidate with [`Action::Discard`] to prune it from the result.
//!
//! # Example
//!
//! ```
//! use brim_core::RuleSet;
//!
//! let env = brim_envision::envision_unobserved(RuleSet::default()).unwrap();
//!
//! let start = env.start_index().unwrap();
//! assert!(!env.successors(start).unwrap().is_empty());
//! ```

mod action;
mod envisionment;
mod epsilon;
mod error;
mod event;
mod generate;
pub mod successors;
mod transition;
mod warning;

pub use action::Action;
pub use envisionment::{Envisionment, TransitionDetails};
pub use epsilon::{Change, Changes};
pub use error::Error;
pub use event::Event;
pub use generate::{assignments, legal_states};
pub use transition::{Rejection, Transition, epsilon_ordering, judge, plausibility};
pub use warning::UnreachableState;

use brim_core::{Observer, RuleSet, State};
use log::{debug, trace};

/// Builds the envisionment for the given rules.
///
/// The observer receives an [`Event`] for every candidate transition and for
/// every terminal state. See the [crate docs](crate) for event order.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the rules admit no legal state.
pub fn envision<Obs>(rules: RuleSet, mut observer: Obs) -> Result<Envisionment, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let states = legal_states(&rules)?;
    debug!("{} legal states under {rules:?}", states.len());

    let candidates = generate::candidates(states.len());
    let total = candidates.len();

    let transitions: Vec<Transition> = candidates
        .into_iter()
        .filter(|&candidate| {
            let (from, to) = endpoints(&states, candidate);
            match judge(from, to, &rules) {
                Ok(changes) => {
                    let event = Event::Accepted {
                        transition: candidate,
                        from,
                        to,
                        changes,
                    };
                    observer.observe(&event) != Some(Action::Discard)
                }
                Err(reason) => {
                    reject(&mut observer, candidate, from, to, reason);
                    false
                }
            }
        })
        .collect();
    debug!("{} of {total} candidates are legal", transitions.len());

    let envisionment = Envisionment::new(rules, states, transitions);
    for warning in envisionment.terminal_states() {
        debug!("{warning}");
        observer.observe(&Event::Terminal(warning));
    }

    Ok(envisionment)
}

/// Builds the envisionment without observer support.
///
/// This is a convenience wrapper around [`envision`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the rules admit no legal state.
pub fn envision_unobserved(rules: RuleSet) -> Result<Envisionment, Error> {
    envision(rules, ())
}

/// Builds the envisionment, judging candidates on the rayon thread pool.
///
/// Every candidate depends only on its own two endpoints, so the result is
/// identical to [`envision_unobserved`].
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the rules admit no legal state.
#[cfg(feature = "rayon")]
pub fn envision_parallel(rules: RuleSet) -> Result<Envisionment, Error> {
    use rayon::prelude::*;

    let states = legal_states(&rules)?;
    let transitions: Vec<Transition> = generate::candidates(states.len())
        .into_par_iter()
        .filter(|&candidate| {
            let (from, to) = endpoints(&states, candidate);
            judge(from, to, &rules).is_ok()
        })
        .collect();
    debug!(
        "{} states and {} transitions (parallel)",
        states.len(),
        transitions.len()
    );

    Ok(Envisionment::new(rules, states, transitions))
}

fn endpoints(states: &[State], candidate: Transition) -> (&State, &State) {
    (&states[candidate.from], &states[candidate.to])
}

fn reject<Obs>(
    observer: &mut Obs,
    candidate: Transition,
    from: &State,
    to: &State,
    reason: Rejection,
) where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    trace!("rejected {candidate}: {reason}");
    // Rejections are final; any returned action is ignored.
    observer.observe(&Event::Rejected {
        candidate,
        from,
        to,
        reason,
    });
}

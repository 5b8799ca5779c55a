use brim_core::State;

use crate::{Changes, Rejection, Transition, UnreachableState};

/// Events emitted while the transition sequence is built.
///
/// Candidates are judged in `(from, to)` order. Each candidate produces
/// exactly one `Rejected` or `Accepted` event. Once every candidate has been
/// judged, one `Terminal` event is emitted per state with no outgoing
/// transition, in state order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A candidate failed a legality check.
    Rejected {
        /// The rejected pair of positions.
        candidate: Transition,

        /// The source state.
        from: &'a State,

        /// The target state.
        to: &'a State,

        /// The first check that failed.
        reason: Rejection,
    },

    /// A candidate passed every legality check.
    Accepted {
        /// The accepted pair of positions.
        transition: Transition,

        /// The source state.
        from: &'a State,

        /// The target state.
        to: &'a State,

        /// The classified magnitude changes.
        changes: Changes,
    },

    /// A state has no outgoing transition.
    Terminal(UnreachableState),
}

impl Event<'_> {
    /// Returns the candidate pair for `Rejected` and `Accepted` events.
    #[must_use]
    pub fn candidate(&self) -> Option<Transition> {
        match self {
            Self::Rejected { candidate, .. } => Some(*candidate),
            Self::Accepted { transition, .. } => Some(*transition),
            Self::Terminal(_) => None,
        }
    }
}

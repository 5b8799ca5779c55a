use std::collections::BTreeMap;

use brim_core::Observer;
use brim_envision::{Action, Event, Rejection};

/// Counts candidates by outcome.
///
/// Acceptances, rejections per [`Rejection`] reason, and terminal states are
/// counted separately. The tally never returns an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionTally {
    accepted: usize,
    rejected: BTreeMap<Rejection, usize>,
    terminal: Vec<usize>,
}

impl RejectionTally {
    /// Returns the number of accepted candidates.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Returns the number of candidates rejected for `reason`.
    #[must_use]
    pub fn rejected(&self, reason: Rejection) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }

    /// Returns the total number of rejected candidates.
    #[must_use]
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Returns the number of candidates seen.
    #[must_use]
    pub fn candidates(&self) -> usize {
        self.accepted + self.total_rejected()
    }

    /// Returns the rejection count for every reason, in check order.
    pub fn breakdown(&self) -> impl Iterator<Item = (Rejection, usize)> + '_ {
        Rejection::ALL
            .into_iter()
            .map(|reason| (reason, self.rejected(reason)))
    }

    /// Returns the positions of terminal states, in order.
    #[must_use]
    pub fn terminal(&self) -> &[usize] {
        &self.terminal
    }
}

impl<'a> Observer<Event<'a>, Action> for RejectionTally {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        match event {
            Event::Accepted { .. } => self.accepted += 1,
            Event::Rejected { reason, .. } => *self.rejected.entry(*reason).or_default() += 1,
            Event::Terminal(warning) => self.terminal.push(warning.index),
        }
        None
    }
}

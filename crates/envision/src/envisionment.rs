use std::collections::HashMap;

use brim_core::{Magnitude, RuleSet, State, Trend};

use crate::{Changes, Error, Transition, UnreachableState, epsilon_ordering};

/// The complete state-transition graph of the container system.
///
/// Both sequences are computed once and never change. Positions index into
/// [`states`](Self::states); transitions are sorted by `(from, to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envisionment {
    rules: RuleSet,
    states: Vec<State>,
    transitions: Vec<Transition>,
    positions: HashMap<State, usize>,
}

/// A legal transition together with its endpoint states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDetails<'a> {
    pub transition: Transition,
    pub from: &'a State,
    pub to: &'a State,
    pub changes: Changes,
}

impl Envisionment {
    pub(crate) fn new(rules: RuleSet, states: Vec<State>, transitions: Vec<Transition>) -> Self {
        debug_assert!(transitions.windows(2).all(|pair| pair[0] < pair[1]));

        let positions = states
            .iter()
            .enumerate()
            .map(|(index, state)| (*state, index))
            .collect();

        Self {
            rules,
            states,
            transitions,
            positions,
        }
    }

    /// Returns the rules this envisionment was built with.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the ordered legal states.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the ordered legal transitions.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the state at a position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if the position is out of range.
    pub fn state(&self, index: usize) -> Result<&State, Error> {
        self.states.get(index).ok_or(Error::UnknownState {
            index,
            len: self.states.len(),
        })
    }

    /// Returns the position of a state, if it is legal.
    #[must_use]
    pub fn index_of(&self, state: &State) -> Option<usize> {
        self.positions.get(state).copied()
    }

    /// Returns the position of the canonical start state.
    ///
    /// The canonical start is the instant the tap opens on an empty, static
    /// container: the inflow is increasing from zero and the volume is zero.
    /// It is found by value, so it survives changes to enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStartState`] if no legal state matches.
    pub fn start_index(&self) -> Result<usize, Error> {
        self.states
            .iter()
            .position(is_canonical_start)
            .ok_or(Error::MissingStartState)
    }

    /// Returns the canonical start state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStartState`] if no legal state matches.
    pub fn start(&self) -> Result<&State, Error> {
        self.start_index().map(|index| &self.states[index])
    }

    /// Returns the positions reachable in one step from `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if the position is out of range.
    pub fn successors(&self, index: usize) -> Result<Vec<usize>, Error> {
        self.state(index)?;
        Ok(self
            .transitions
            .iter()
            .filter(|t| t.from == index)
            .map(|t| t.to)
            .collect())
    }

    /// Returns the positions that reach `index` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if the position is out of range.
    pub fn predecessors(&self, index: usize) -> Result<Vec<usize>, Error> {
        self.state(index)?;
        Ok(self
            .transitions
            .iter()
            .filter(|t| t.to == index)
            .map(|t| t.from)
            .collect())
    }

    /// Returns `true` if the transition is in the sequence.
    #[must_use]
    pub fn contains(&self, transition: Transition) -> bool {
        self.transitions.binary_search(&transition).is_ok()
    }

    /// Returns the details of a legal transition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if either position is out of range, or
    /// [`Error::InvalidTransition`] if the pair is not a legal transition.
    pub fn transition(&self, from: usize, to: usize) -> Result<TransitionDetails<'_>, Error> {
        let from_state = self.state(from)?;
        let to_state = self.state(to)?;

        let transition = Transition::new(from, to);
        if !self.contains(transition) {
            return Err(Error::InvalidTransition { from, to });
        }

        // Accepted transitions always satisfy the ordering.
        let changes = epsilon_ordering(from_state, to_state)
            .map_err(|_| Error::InvalidTransition { from, to })?;

        Ok(TransitionDetails {
            transition,
            from: from_state,
            to: to_state,
            changes,
        })
    }

    /// Returns a warning for every state with no outgoing transition.
    #[must_use]
    pub fn terminal_states(&self) -> Vec<UnreachableState> {
        let mut has_successor = vec![false; self.states.len()];
        for t in &self.transitions {
            has_successor[t.from] = true;
        }

        self.states
            .iter()
            .zip(has_successor)
            .enumerate()
            .filter(|(_, (_, has))| !has)
            .map(|(index, (state, _))| UnreachableState {
                index,
                state: *state,
            })
            .collect()
    }
}

fn is_canonical_start(state: &State) -> bool {
    state.inflow.trend == Trend::Increasing
        && state.inflow.magnitude == Magnitude::Zero
        && state.volume.magnitude == Magnitude::Zero
}

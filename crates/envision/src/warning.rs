use std::fmt;

use brim_core::State;

/// A state with no outgoing transition.
///
/// This is a warning, not an error: a drained, steady container with a
/// closed tap has nowhere left to go, and is expected to be terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnreachableState {
    /// Position in the state sequence.
    pub index: usize,

    /// The terminal state.
    pub state: State,
}

impl fmt::Display for UnreachableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} has no successor", self.index)
    }
}

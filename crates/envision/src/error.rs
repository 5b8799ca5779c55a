use brim_core::RuleSet;

/// Errors that can occur when building or querying an envisionment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The invariants are self-contradictory and admit no state.
    #[error("rule set {rules:?} admits no legal state")]
    Configuration { rules: RuleSet },

    /// A pair of positions that is not in the transition sequence.
    #[error("no transition from state {from} to state {to}")]
    InvalidTransition { from: usize, to: usize },

    /// A position outside the state sequence.
    #[error("state {index} is out of range for {len} states")]
    UnknownState { index: usize, len: usize },

    /// The rules admit no state where the tap opens on an empty container.
    #[error("no canonical start state under the active rules")]
    MissingStartState,
}

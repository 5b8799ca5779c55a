/// Actions an observer can take during envisionment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop an accepted transition from the result.
    ///
    /// Only meaningful in response to [`Event::Accepted`](crate::Event::Accepted).
    /// Use this to layer an additional exogenous policy on top of the rules,
    /// such as forbidding the tap from closing before the container is full.
    Discard,
}

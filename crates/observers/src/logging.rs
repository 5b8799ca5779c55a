use brim_core::Observer;
use brim_envision::{Action, Event};
use log::{Level, log};

/// Forwards envisionment events to the `log` facade.
///
/// Rejections and acceptances are logged at the configured candidate level
/// (`trace` by default); terminal states are always logged at `info`, since
/// there are only a handful of them and they are usually what a reader of the
/// log is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    target: &'static str,
    candidate_level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("brim", Level::Trace)
    }
}

impl LogObserver {
    /// Creates an observer logging under `target`.
    #[must_use]
    pub fn new(target: &'static str, candidate_level: Level) -> Self {
        Self {
            target,
            candidate_level,
        }
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Returns the level used for candidate events.
    #[must_use]
    pub fn candidate_level(&self) -> Level {
        self.candidate_level
    }
}

impl<'a> Observer<Event<'a>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        let target = self.target;
        let level = self.candidate_level;

        match event {
            Event::Rejected {
                candidate, reason, ..
            } => log!(target: target, level, "reject {candidate}: {reason}"),
            Event::Accepted { transition, .. } => {
                log!(target: target, level, "accept {transition}");
            }
            Event::Terminal(warning) => {
                log!(target: target, Level::Info, "{warning}\n{}", warning.state);
            }
        }
        None
    }
}

//! Reusable observers for Brim envisionments.
//!
//! This crate provides [`Observer`] implementations for the events emitted
//! by [`brim_envision::envision`]:
//!
//! - [`RejectionTally`] — counts candidates by outcome and rejection reason
//! - [`LogObserver`] — forwards every event to the `log` facade
//!
//! Both record through `&mut self`, so several can share one run by wrapping
//! them in a closure:
//!
//! ```
//! use brim_core::{Observer, RuleSet};
//! use brim_envision::{Event, envision};
//! use brim_observers::{LogObserver, RejectionTally};
//!
//! let mut tally = RejectionTally::default();
//! let mut log = LogObserver::default();
//!
//! envision(RuleSet::default(), |event: &Event<'_>| {
//!     log.observe(event);
//!     tally.observe(event)
//! })
//! .unwrap();
//!
//! assert_eq!(tally.accepted(), 102);
//! ```
//!
//! [`Observer`]: brim_core::Observer

mod logging;
mod tally;

pub use logging::LogObserver;
pub use tally::RejectionTally;

//! Core types for Brim, a qualitative model of a tap filling a container.
//!
//! Every quantity in the system is described by a symbolic value rather than
//! a number. This crate defines the shared vocabulary the envisionment engine
//! and its consumers build on:
//!
//! - [`Magnitude`] and [`Trend`] — the quantity and derivative spaces
//! - [`Quantity`] and [`State`] — immutable assignments of the six variables
//! - [`Invariant`] — the named cross-variable consistency laws
//! - [`RuleSet`] — the configuration that selects boundary behavior at the
//!   maximum landmark
//! - [`Observer`] — receives engine events and optionally returns actions

mod invariant;
mod observer;
mod quantity;
mod rules;
mod state;

pub use invariant::Invariant;
pub use observer::Observer;
pub use quantity::{INFLOW_MAGNITUDES, MAGNITUDES, Magnitude, TRENDS, Trend, ValueError};
pub use rules::{MaxDrain, RuleSet};
pub use state::{Flow, Quantity, State};

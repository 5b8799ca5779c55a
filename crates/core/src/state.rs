use std::fmt;

use crate::{Magnitude, Trend};

/// One of the three flowing quantities of the container system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    Inflow,
    Volume,
    Outflow,
}

impl Flow {
    /// All flows, in state order.
    pub const ALL: [Flow; 3] = [Flow::Inflow, Flow::Volume, Flow::Outflow];

    /// Returns the label used in diagrams.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inflow => "Inflow",
            Self::Volume => "Volume",
            Self::Outflow => "Outflow",
        }
    }
}

/// The qualitative value of one quantity: its derivative and magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub trend: Trend,
    pub magnitude: Magnitude,
}

impl Quantity {
    #[must_use]
    pub const fn new(trend: Trend, magnitude: Magnitude) -> Self {
        Self { trend, magnitude }
    }
}

/// An assignment of all six variables of the container system.
///
/// Identity is structural: two states are equal exactly when all six values
/// are equal. A `State` can hold any assignment; whether it is legal is
/// decided by [`RuleSet::admits`](crate::RuleSet::admits).
///
/// The derived ordering follows the field order (inflow, volume, outflow,
/// each derivative before magnitude), which is also the enumeration order of
/// the state generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub inflow: Quantity,
    pub volume: Quantity,
    pub outflow: Quantity,
}

impl State {
    /// Creates a state from the six values in the order
    /// ID, IQ, VD, VQ, OD, OQ.
    #[must_use]
    pub const fn new(
        inflow_trend: Trend,
        inflow: Magnitude,
        volume_trend: Trend,
        volume: Magnitude,
        outflow_trend: Trend,
        outflow: Magnitude,
    ) -> Self {
        Self {
            inflow: Quantity::new(inflow_trend, inflow),
            volume: Quantity::new(volume_trend, volume),
            outflow: Quantity::new(outflow_trend, outflow),
        }
    }

    /// Returns the quantity for the given flow.
    #[must_use]
    pub fn quantity(&self, flow: Flow) -> Quantity {
        match flow {
            Flow::Inflow => self.inflow,
            Flow::Volume => self.volume,
            Flow::Outflow => self.outflow,
        }
    }

    /// Returns the magnitude for the given flow.
    #[must_use]
    pub fn magnitude(&self, flow: Flow) -> Magnitude {
        self.quantity(flow).magnitude
    }

    /// Returns the derivative for the given flow.
    #[must_use]
    pub fn trend(&self, flow: Flow) -> Trend {
        self.quantity(flow).trend
    }

    /// Returns `self` with one quantity replaced.
    #[must_use]
    pub fn with_quantity(self, flow: Flow, quantity: Quantity) -> Self {
        match flow {
            Flow::Inflow => Self {
                inflow: quantity,
                ..self
            },
            Flow::Volume => Self {
                volume: quantity,
                ..self
            },
            Flow::Outflow => Self {
                outflow: quantity,
                ..self
            },
        }
    }

    /// Returns the six values as integers in the order ID, IQ, VD, VQ, OD, OQ.
    #[must_use]
    pub fn values(&self) -> [i8; 6] {
        [
            self.inflow.trend.value(),
            self.inflow.magnitude.value(),
            self.volume.trend.value(),
            self.volume.magnitude.value(),
            self.outflow.trend.value(),
            self.outflow.magnitude.value(),
        ]
    }
}

/// Formats the state as three diagram lines, e.g. `Inflow: (d:+, q:0)`.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flow) in Flow::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let Quantity { trend, magnitude } = self.quantity(flow);
            write!(f, "{}: (d:{trend}, q:{magnitude})", flow.label())?;
        }
        Ok(())
    }
}

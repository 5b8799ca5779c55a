use std::fmt;

use crate::{Magnitude, State, Trend};

/// A named consistency law that every legal state satisfies.
///
/// Invariants relate the six variables of a [`State`] through the
/// dependencies of the container system: the outflow mirrors the volume, the
/// inflow and outflow influence the volume derivative, and the tap follows an
/// externally imposed opening schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Invariant {
    /// `VQ == OQ`: zero and maximum of volume and outflow coincide.
    Correspondence,

    /// `VD == OD`: the outflow is proportional to the volume.
    Proportionality,

    /// A quantity at zero cannot be decreasing.
    ZeroNotDecreasing,

    /// `IQ == 0 ⇒ VD ≠ +`: without inflow the volume cannot rise.
    NoInflowNoRise,

    /// `IQ == 0 ∧ OQ > 0 ⇒ VD == -`: draining without inflow.
    DrainWithoutInflow,

    /// `IQ == + ∧ OQ == 0 ⇒ VD == +`: filling without outflow.
    FillWithoutOutflow,

    /// `ID == + ∧ IQ == 0 ⇒ VQ == 0`: the tap only opens on an empty container.
    TapOpensWhenEmpty,

    /// `VQ == Max ⇒ VD ≠ +`: a full container cannot keep rising.
    OverflowGuard,
}

impl Invariant {
    /// Every invariant, in declaration order.
    pub const ALL: [Invariant; 8] = [
        Invariant::Correspondence,
        Invariant::Proportionality,
        Invariant::ZeroNotDecreasing,
        Invariant::NoInflowNoRise,
        Invariant::DrainWithoutInflow,
        Invariant::FillWithoutOutflow,
        Invariant::TapOpensWhenEmpty,
        Invariant::OverflowGuard,
    ];

    /// Returns `true` if the state satisfies this invariant.
    #[must_use]
    pub fn holds(self, state: &State) -> bool {
        let State {
            inflow,
            volume,
            outflow,
        } = *state;
        let no_inflow = inflow.magnitude == Magnitude::Zero;

        match self {
            Self::Correspondence => volume.magnitude == outflow.magnitude,
            Self::Proportionality => volume.trend == outflow.trend,
            Self::ZeroNotDecreasing => [inflow, volume, outflow]
                .iter()
                .all(|q| q.magnitude.is_positive() || q.trend != Trend::Decreasing),
            Self::NoInflowNoRise => !no_inflow || volume.trend != Trend::Increasing,
            Self::DrainWithoutInflow => {
                !(no_inflow && outflow.magnitude.is_positive()) || volume.trend == Trend::Decreasing
            }
            Self::FillWithoutOutflow => {
                !(inflow.magnitude == Magnitude::Positive && outflow.magnitude == Magnitude::Zero)
                    || volume.trend == Trend::Increasing
            }
            Self::TapOpensWhenEmpty => {
                !(inflow.trend == Trend::Increasing && no_inflow)
                    || volume.magnitude == Magnitude::Zero
            }
            Self::OverflowGuard => {
                volume.magnitude != Magnitude::Max || volume.trend != Trend::Increasing
            }
        }
    }

    /// Returns a short human-readable statement of the invariant.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Correspondence => "volume and outflow magnitudes correspond",
            Self::Proportionality => "outflow derivative follows volume derivative",
            Self::ZeroNotDecreasing => "a quantity at zero cannot decrease",
            Self::NoInflowNoRise => "volume cannot increase without inflow",
            Self::DrainWithoutInflow => "volume decreases when draining without inflow",
            Self::FillWithoutOutflow => "volume increases when filling without outflow",
            Self::TapOpensWhenEmpty => "the tap only opens on an empty container",
            Self::OverflowGuard => "volume cannot increase past its maximum",
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

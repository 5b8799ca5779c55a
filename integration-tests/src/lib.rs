//! Shared fixtures for the cross-crate tests.

use brim_core::{MaxDrain, RuleSet};
use brim_envision::{Envisionment, envision_unobserved};

/// Every rule-set variant, reference first.
pub const RULE_SETS: [RuleSet; 4] = [
    RuleSet::new(true, MaxDrain::Gradual),
    RuleSet::new(true, MaxDrain::Immediate),
    RuleSet::new(false, MaxDrain::Gradual),
    RuleSet::new(false, MaxDrain::Immediate),
];

/// Builds the envisionment for the reference rules.
///
/// # Panics
///
/// Panics if the reference rules admit no state.
#[must_use]
pub fn reference() -> Envisionment {
    envision_unobserved(RuleSet::default()).expect("reference rules admit states")
}

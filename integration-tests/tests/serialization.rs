use brim_core::{Magnitude, RuleSet, State, Trend};
use brim_envision::Transition;
use integration_tests::reference;
use serde_json::json;

#[test]
fn state_serializes_with_named_quantities() {
    let env = reference();
    let start = env.start().unwrap();

    assert_eq!(
        serde_json::to_value(start).unwrap(),
        json!({
            "inflow": { "trend": "Increasing", "magnitude": "Zero" },
            "volume": { "trend": "Steady", "magnitude": "Zero" },
            "outflow": { "trend": "Steady", "magnitude": "Zero" },
        })
    );
}

#[test]
fn transitions_serialize_as_position_pairs() {
    let env = reference();
    let value = serde_json::to_value(&env.transitions()[..1]).unwrap();
    assert_eq!(value, json!([{ "from": 0, "to": 2 }]));
}

#[test]
fn rules_can_be_read_from_json() {
    let rules: RuleSet =
        serde_json::from_str(r#"{ "overflow_guard": false, "max_drain": "Immediate" }"#).unwrap();
    assert_eq!(
        rules,
        RuleSet::unguarded().with_max_drain(brim_core::MaxDrain::Immediate)
    );

    let state: State = serde_json::from_value(json!({
        "inflow": { "trend": "Steady", "magnitude": "Positive" },
        "volume": { "trend": "Steady", "magnitude": "Max" },
        "outflow": { "trend": "Steady", "magnitude": "Max" },
    }))
    .unwrap();
    assert_eq!(
        state,
        State::new(
            Trend::Steady,
            Magnitude::Positive,
            Trend::Steady,
            Magnitude::Max,
            Trend::Steady,
            Magnitude::Max
        )
    );
    assert!(rules.admits(&state));
    assert!(reference().index_of(&state).is_some());

    let _: Transition = serde_json::from_str(r#"{ "from": 1, "to": 0 }"#).unwrap();
}

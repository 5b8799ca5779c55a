use std::collections::HashSet;

use brim_core::{
    Magnitude::{Max, Zero},
    MaxDrain, RuleSet, State,
    Trend::{Increasing, Steady},
};
use brim_envision::{
    Change, Changes, Error, assignments, envision_parallel, envision_unobserved,
    successors::next_inflow_quantity, successors::next_volume_derivative,
};
use integration_tests::{RULE_SETS, reference};

#[test]
fn volume_and_outflow_agree_in_every_state() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        for s in env.states() {
            assert_eq!(s.volume.magnitude, s.outflow.magnitude, "{s:?}");
            assert_eq!(s.volume.trend, s.outflow.trend, "{s:?}");
        }
    }
}

#[test]
fn state_and_transition_counts_are_fixed() {
    let expected = [(22, 102), (22, 93), (25, 136), (25, 122)];

    for (rules, (states, transitions)) in RULE_SETS.into_iter().zip(expected) {
        let env = envision_unobserved(rules).unwrap();
        assert_eq!(env.states().len(), states, "{rules:?}");
        assert_eq!(env.transitions().len(), transitions, "{rules:?}");
    }
}

#[test]
fn states_are_exactly_the_admitted_assignments() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        let expected: Vec<State> = assignments().filter(|s| rules.admits(s)).collect();
        assert_eq!(env.states(), expected.as_slice());

        let unique: HashSet<_> = env.states().iter().collect();
        assert_eq!(unique.len(), env.states().len());
    }
}

#[test]
fn no_self_loops() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        assert!(env.transitions().iter().all(|t| t.from != t.to));
    }
}

#[test]
fn no_transition_mixes_instant_and_gradual_changes() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();

        for t in env.transitions() {
            let changes = Changes::between(&env.states()[t.from], &env.states()[t.to]);
            let kinds = [changes.inflow, changes.volume, changes.outflow];

            assert!(
                !(kinds.contains(&Change::Instant) && kinds.contains(&Change::NotInstant)),
                "{t} mixes {kinds:?}"
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for rules in RULE_SETS {
        let first = envision_unobserved(rules).unwrap();
        let second = envision_unobserved(rules).unwrap();

        assert_eq!(first.states(), second.states());
        assert_eq!(first.transitions(), second.transitions());
        assert_eq!(first.rules(), &rules);
    }
}

#[test]
fn parallel_generation_matches_sequential() {
    for rules in RULE_SETS {
        let sequential = envision_unobserved(rules).unwrap();
        let first = envision_parallel(rules).unwrap();
        let second = envision_parallel(rules).unwrap();

        assert_eq!(first, sequential, "{rules:?}");
        assert_eq!(first.transitions(), second.transitions());
        assert_eq!(first.rules(), &rules);
    }
}

#[test]
fn parallel_transitions_respect_epsilon_ordering() {
    for rules in RULE_SETS {
        let env = envision_parallel(rules).unwrap();

        for t in env.transitions() {
            let changes = Changes::between(&env.states()[t.from], &env.states()[t.to]);
            assert!(!changes.is_mixed(), "{t} under {rules:?}");
        }
    }
}

#[test]
fn opening_the_tap_starts_the_inflow() {
    let just_opened = State::new(Increasing, Zero, Increasing, Zero, Increasing, Zero);
    assert_eq!(
        next_inflow_quantity(&just_opened).into_iter().collect::<Vec<_>>(),
        vec![brim_core::Magnitude::Positive]
    );

    let env = reference();
    let start = env.start_index().unwrap();
    assert!(!env.successors(start).unwrap().is_empty());
}

#[test]
fn full_container_never_starts_rising() {
    for rules in RULE_SETS.into_iter().filter(RuleSet::overflow_guard) {
        let env = envision_unobserved(rules).unwrap();

        for t in env.transitions() {
            let from = &env.states()[t.from];
            let to = &env.states()[t.to];
            if from.volume.magnitude == Max && from.outflow.magnitude == Max {
                assert_ne!(to.volume.trend, Increasing, "{t}");
            }
        }
    }
}

#[test]
fn canonical_start_is_unique_and_live() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        let start = env.start().unwrap();

        assert_eq!(start, &State::new(Increasing, Zero, Steady, Zero, Steady, Zero));
        assert_eq!(env.states().iter().filter(|s| *s == start).count(), 1);

        let index = env.start_index().unwrap();
        assert!(!env.successors(index).unwrap().is_empty());
    }
}

#[test]
fn volume_derivative_is_consistent_with_flows() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        for s in env.states() {
            assert!(
                next_volume_derivative(s, &rules).contains(&s.volume.trend),
                "{s:?}"
            );
        }
    }
}

#[test]
fn only_the_drained_container_is_terminal() {
    for rules in RULE_SETS {
        let env = envision_unobserved(rules).unwrap();
        let terminal = env.terminal_states();

        assert_eq!(terminal.len(), 1);
        assert_eq!(
            terminal[0].state,
            State::new(Steady, Zero, Steady, Zero, Steady, Zero)
        );
    }
}

#[test]
fn queries_for_illegal_transitions_fail_explicitly() {
    let env = reference();
    let start = env.start_index().unwrap();
    let terminal = env.terminal_states()[0].index;

    assert_eq!(
        env.transition(terminal, start),
        Err(Error::InvalidTransition {
            from: terminal,
            to: start,
        })
    );

    let next = env.successors(start).unwrap()[0];
    let details = env.transition(start, next).unwrap();
    assert_eq!(details.changes.inflow, Change::Instant);
    assert_eq!(details.changes.volume, Change::Neither);
}

#[test]
fn max_drain_variant_only_changes_transitions() {
    let gradual = envision_unobserved(RuleSet::default()).unwrap();
    let immediate =
        envision_unobserved(RuleSet::default().with_max_drain(MaxDrain::Immediate)).unwrap();

    assert_eq!(gradual.states(), immediate.states());
    assert!(
        immediate
            .transitions()
            .iter()
            .all(|t| gradual.contains(*t))
    );
}

//! Graph assembly for Brim envisionments.
//!
//! [`StateGraph`] turns an [`Envisionment`] into a `petgraph` directed graph
//! with one node per state and one edge per transition, plus a synthetic
//! start node pointing at the canonical start state. The graph can be
//! rendered as Graphviz DOT text; writing it to disk or running Graphviz is
//! left to the caller.

use std::fmt;

use brim_core::State;
use brim_envision::{Envisionment, Error};
use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, NodeIndex},
    visit::Dfs,
};

/// Label of the synthetic start node.
pub const START_LABEL: &str = "Start by turning on tap";

/// A node of the assembled graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// The synthetic entry point.
    Start,

    /// A legal state and its position in the state sequence.
    State { index: usize, state: State },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str(START_LABEL),
            Self::State { index, state } => write!(f, "{index}\n{state}"),
        }
    }
}

/// The state-transition graph of an envisionment.
#[derive(Debug, Clone)]
pub struct StateGraph {
    graph: DiGraph<Node, ()>,
    start: NodeIndex,
    states: Vec<NodeIndex>,
}

impl StateGraph {
    /// Assembles the graph for an envisionment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStartState`] if the envisionment has no
    /// canonical start state to attach the start node to.
    pub fn new(envisionment: &Envisionment) -> Result<Self, Error> {
        let start_index = envisionment.start_index()?;

        let mut graph = DiGraph::with_capacity(
            envisionment.states().len() + 1,
            envisionment.transitions().len() + 1,
        );

        let start = graph.add_node(Node::Start);
        let states: Vec<NodeIndex> = envisionment
            .states()
            .iter()
            .enumerate()
            .map(|(index, state)| {
                graph.add_node(Node::State {
                    index,
                    state: *state,
                })
            })
            .collect();

        graph.add_edge(start, states[start_index], ());
        for t in envisionment.transitions() {
            graph.add_edge(states[t.from], states[t.to], ());
        }

        Ok(Self {
            graph,
            start,
            states,
        })
    }

    /// Returns the underlying `petgraph` graph.
    #[must_use]
    pub fn graph(&self) -> &DiGraph<Node, ()> {
        &self.graph
    }

    /// Returns the synthetic start node.
    #[must_use]
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Returns the node for a state position.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<NodeIndex> {
        self.states.get(index).copied()
    }

    /// Returns the state positions reachable from the start node, ascending.
    #[must_use]
    pub fn reachable_from_start(&self) -> Vec<usize> {
        let mut reached = Vec::new();
        let mut dfs = Dfs::new(&self.graph, self.start);
        while let Some(node) = dfs.next(&self.graph) {
            if let Node::State { index, .. } = self.graph[node] {
                reached.push(index);
            }
        }
        reached.sort_unstable();
        reached
    }

    /// Renders the graph as Graphviz DOT text.
    ///
    /// Each state is labeled with its position and its three quantities, in
    /// the form `Inflow: (d:+, q:0)`.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, node)| {
                let shape = match node {
                    Node::Start => "plaintext",
                    Node::State { .. } => "box",
                };
                format!("label = \"{}\", shape = {shape}", escape(&node.to_string()))
            },
        );
        format!("{dot:?}")
    }
}

fn escape(label: &str) -> String {
    label.replace('"', "\\\"").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use brim_core::RuleSet;
    use brim_envision::envision_unobserved;
    use petgraph::Direction;

    fn reference() -> (Envisionment, StateGraph) {
        let env = envision_unobserved(RuleSet::default()).unwrap();
        let graph = StateGraph::new(&env).unwrap();
        (env, graph)
    }

    #[test]
    fn one_node_per_state_plus_start() {
        let (env, graph) = reference();

        assert_eq!(graph.graph().node_count(), env.states().len() + 1);
        assert_eq!(graph.graph().edge_count(), env.transitions().len() + 1);
    }

    #[test]
    fn start_node_points_at_canonical_start() {
        let (env, graph) = reference();

        let targets: Vec<_> = graph
            .graph()
            .neighbors_directed(graph.start(), Direction::Outgoing)
            .collect();

        assert_eq!(targets, vec![graph.node(env.start_index().unwrap()).unwrap()]);
    }

    #[test]
    fn every_state_is_reachable_from_start() {
        let (env, graph) = reference();
        let all: Vec<usize> = (0..env.states().len()).collect();
        assert_eq!(graph.reachable_from_start(), all);
    }

    #[test]
    fn dot_labels_states_like_the_diagram() {
        let (_, graph) = reference();
        let dot = graph.to_dot();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains(START_LABEL));
        assert!(dot.contains("15\\nInflow: (d:+, q:0)\\nVolume: (d:0, q:0)\\nOutflow: (d:0, q:0)"));
    }

    #[test]
    fn node_display() {
        assert_eq!(Node::Start.to_string(), START_LABEL);
    }
}

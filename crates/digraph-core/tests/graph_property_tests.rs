//! Property-based tests for DiGraph mutation semantics.
//!
//! Random operation sequences are applied both to the graph and to a plain
//! reference model; after every step the sizes, the modification counter
//! and both adjacency indices must agree with the model.

use std::collections::{BTreeMap, BTreeSet};

use digraph_core::DiGraph;
use proptest::{
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const GRAPH_PROP_CASES: u32 = 256;
const MAX_KEY: i64 = 8;

#[derive(Debug, Clone)]
enum Op {
    AddNode(i64),
    RemoveNode(i64),
    AddEdge(i64, i64, f64),
    RemoveEdge(i64, i64),
}

fn key_strategy() -> impl Strategy<Value = i64> {
    0..MAX_KEY
}

fn weight_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-5.0_f64..-0.001, 0.0_f64..100.0, Just(0.0_f64)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        key_strategy().prop_map(Op::AddNode),
        key_strategy().prop_map(Op::RemoveNode),
        (key_strategy(), key_strategy(), weight_strategy())
            .prop_map(|(s, d, w)| Op::AddEdge(s, d, w)),
        (key_strategy(), key_strategy()).prop_map(|(s, d)| Op::RemoveEdge(s, d)),
    ]
}

#[derive(Default)]
struct Model {
    nodes: BTreeSet<i64>,
    edges: BTreeMap<(i64, i64), f64>,
    mc: u64,
}

impl Model {
    fn apply(&mut self, op: &Op) -> bool {
        let changed = match *op {
            Op::AddNode(k) => self.nodes.insert(k),
            Op::RemoveNode(k) => {
                let present = self.nodes.remove(&k);
                if present {
                    self.edges.retain(|&(s, d), _| s != k && d != k);
                }
                present
            }
            Op::AddEdge(s, d, w) => {
                let valid = self.nodes.contains(&s)
                    && self.nodes.contains(&d)
                    && w >= 0.0
                    && !self.edges.contains_key(&(s, d));
                if valid {
                    self.edges.insert((s, d), w);
                }
                valid
            }
            Op::RemoveEdge(s, d) => self.edges.remove(&(s, d)).is_some(),
        };
        if changed {
            self.mc += 1;
        }
        changed
    }
}

fn apply(graph: &mut DiGraph<i64>, op: &Op) -> bool {
    match *op {
        Op::AddNode(k) => graph.add_node(k),
        Op::RemoveNode(k) => graph.remove_node(k),
        Op::AddEdge(s, d, w) => graph.add_edge(s, d, w),
        Op::RemoveEdge(s, d) => graph.remove_edge(s, d),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: GRAPH_PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_graph_matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut graph = DiGraph::new();
        let mut model = Model::default();

        for op in &ops {
            let applied = apply(&mut graph, op);
            let expected = model.apply(op);
            prop_assert_eq!(applied, expected, "op {:?}", op);
            prop_assert_eq!(graph.v_size(), model.nodes.len());
            prop_assert_eq!(graph.e_size(), model.edges.len());
            prop_assert_eq!(graph.get_mc(), model.mc);
        }

        for key in 0..MAX_KEY {
            let present = model.nodes.contains(&key);
            prop_assert_eq!(graph.all_out_edges_of_node(key).is_some(), present);
            prop_assert_eq!(graph.all_in_edges_of_node(key).is_some(), present);
        }

        let mut out_total = 0;
        for key in &model.nodes {
            let out = graph.all_out_edges_of_node(*key).unwrap();
            let inc = graph.all_in_edges_of_node(*key).unwrap();
            out_total += out.len();
            for (dst, w) in out {
                prop_assert_eq!(graph.all_in_edges_of_node(*dst).unwrap().get(key), Some(w));
                prop_assert_eq!(model.edges.get(&(*key, *dst)), Some(w));
            }
            for (src, w) in inc {
                prop_assert_eq!(graph.all_out_edges_of_node(*src).unwrap().get(key), Some(w));
            }
        }
        prop_assert_eq!(out_total, graph.e_size());
    }

    #[test]
    fn prop_add_node_is_idempotent(key in any::<i64>()) {
        let mut once = DiGraph::new();
        once.add_node(key);

        let mut twice = DiGraph::new();
        twice.add_node(key);
        twice.add_node(key);

        prop_assert_eq!(once.v_size(), twice.v_size());
        prop_assert_eq!(once.get_mc(), twice.get_mc());
    }

    #[test]
    fn prop_remove_node_cascade_arithmetic(
        edges in proptest::collection::vec((key_strategy(), key_strategy()), 0..40),
        victim in key_strategy(),
    ) {
        let mut graph = DiGraph::new();
        for key in 0..MAX_KEY {
            graph.add_node(key);
        }
        for (s, d) in &edges {
            graph.add_edge(*s, *d, 1.0);
        }

        let d_out = graph.out_degree(victim);
        let d_in = graph.in_degree(victim);
        let self_loop = usize::from(graph.has_edge(victim, victim));
        let (e, v, mc) = (graph.e_size(), graph.v_size(), graph.get_mc());

        prop_assert!(graph.remove_node(victim));
        prop_assert_eq!(graph.e_size(), e - (d_out + d_in - self_loop));
        prop_assert_eq!(graph.v_size(), v - 1);
        prop_assert_eq!(graph.get_mc(), mc + 1);
    }

    #[test]
    fn prop_rejected_edges_change_nothing(
        src in key_strategy(),
        dst in key_strategy(),
        weight in -1000.0_f64..-0.0001,
    ) {
        let mut graph = DiGraph::new();
        graph.add_node(src);
        let snapshot = (graph.v_size(), graph.e_size(), graph.get_mc());

        prop_assert!(!graph.add_edge(src, dst, weight));
        prop_assert!(!graph.add_edge(src, MAX_KEY + 1, 1.0));
        prop_assert!(!graph.remove_edge(src, dst));
        prop_assert!(!graph.remove_node(MAX_KEY + 1));
        prop_assert_eq!((graph.v_size(), graph.e_size(), graph.get_mc()), snapshot);
    }

    #[test]
    fn prop_duplicate_edge_keeps_first_weight(w1 in 0.0_f64..1e6, w2 in 0.0_f64..1e6) {
        let mut graph = DiGraph::new();
        graph.add_node(1);
        graph.add_node(2);
        graph.add_edge(1, 2, w1);
        let mc = graph.get_mc();

        prop_assert!(!graph.add_edge(1, 2, w2));
        prop_assert_eq!(graph.edge_weight(1, 2), Some(w1));
        prop_assert_eq!(graph.all_in_edges_of_node(2).unwrap().get(&1), Some(&w1));
        prop_assert_eq!(graph.get_mc(), mc);
    }
}

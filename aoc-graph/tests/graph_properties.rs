//! Property-based tests for graph structure and algorithms
//!
//! **Feature: graph-core**

use aoc_graph::{Dag, Graph, Set};
use proptest::prelude::*;

/// Arbitrary edge lists over a small label space, so collisions are common.
fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..30)
}

/// Edges that always point from a smaller to a larger label, hence acyclic.
fn acyclic_edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    })
}

/// A total precedence order: every earlier label must precede every later one.
fn total_order() -> impl Strategy<Value = Vec<u8>> {
    Just((0u8..8).collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property 1: Idempotent edge insertion**
    /// *For any* graph, adding every edge a second time changes nothing.
    #[test]
    fn prop_edge_insertion_is_idempotent(pairs in edge_list(), directed in any::<bool>()) {
        let once = Graph::from_edges(directed, pairs.clone());
        let mut twice = once.clone();
        for (from, to) in pairs {
            twice.add_edge(from, to);
        }

        prop_assert_eq!(twice.edge_count(), once.edge_count());
        prop_assert_eq!(twice.edges(), once.edges());
        prop_assert_eq!(twice, once);
    }

    /// **Property 2: Undirected symmetry**
    /// *For any* undirected graph, every inserted edge is visible from both
    /// ends and stored in exactly one orientation.
    #[test]
    fn prop_undirected_symmetry(pairs in edge_list()) {
        let graph = Graph::from_edges(false, pairs.clone());
        let edges = graph.edges();

        for (a, b) in pairs {
            prop_assert!(graph.out_n(&a).has(&b));
            prop_assert!(graph.out_n(&b).has(&a));
            if a != b {
                prop_assert!(edges.has(&(a, b)) ^ edges.has(&(b, a)));
            }
        }
    }

    /// **Property 3: Clone round trip**
    /// *For any* graph, the clone is equal and mutating it leaves the original alone.
    #[test]
    fn prop_clone_round_trip(pairs in edge_list(), directed in any::<bool>(), victim in 0u8..12) {
        let graph = Graph::from_edges(directed, pairs);
        let before = graph.edges();
        let mut copy = graph.clone();
        prop_assert_eq!(&copy, &graph);

        copy.remove(&victim);
        copy.add_edge(100, 101);
        prop_assert_eq!(graph.edges(), before);
        prop_assert!(!graph.has(&100));
    }

    /// **Property 4: Topological-sort validity**
    /// *For any* acyclic directed graph, every edge points forward in `topo`.
    #[test]
    fn prop_topo_respects_edges(pairs in acyclic_edge_list()) {
        let graph = Graph::from_edges(true, pairs);
        let sorted = graph.topo().unwrap();
        prop_assert_eq!(sorted.len(), graph.node_count());

        let position = |node: &u8| sorted.iter().position(|n| n == node);
        for (from, to) in graph.edges() {
            prop_assert!(position(&from) < position(&to));
        }
    }

    /// **Property 5: Cycle detection flips with a back edge**
    /// *For any* acyclic directed graph and edge `a -> b`, adding `b -> a`
    /// creates a cycle and removing it again restores acyclicity.
    #[test]
    fn prop_back_edge_toggles_cycle(pairs in acyclic_edge_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!pairs.is_empty());
        let (a, b) = pairs[pick.index(pairs.len())];
        let mut graph = Graph::from_edges(true, pairs);
        prop_assert!(!graph.has_cycle());
        prop_assert!(graph.has_path(&a, &b));

        graph.add_edge(b, a);
        prop_assert!(graph.has_cycle());
        prop_assert!(graph.topo().is_err());

        graph.remove_edge(&b, &a);
        prop_assert!(!graph.has_cycle());
        prop_assert!(graph.topo().is_ok());
    }

    /// **Property 6: Every enumerated path is a simple path of real edges**
    #[test]
    fn prop_paths_are_simple(pairs in edge_list(), from in 0u8..12, to in 0u8..12) {
        let graph = Graph::from_edges(true, pairs);
        let paths = graph.paths(&from, &to);

        prop_assert_eq!(!paths.is_empty(), graph.has_path(&from, &to));
        for path in &paths {
            prop_assert_eq!(path.first(), Some(&from));
            prop_assert_eq!(path.last(), Some(&to));
            prop_assert_eq!(path.iter().collect::<Set<_>>().len(), path.len());
            for step in path.windows(2) {
                prop_assert!(graph.has_edge(&step[0], &step[1]));
            }
        }
    }

    /// **Property 7: Ordering checks agree**
    /// *For any* total precedence order and any sequence drawn from it,
    /// `is_sorted_dumb` holds exactly when `sort` leaves the sequence unchanged,
    /// and `sort_dumb` agrees with `sort`.
    #[test]
    fn prop_ordering_checks_agree(order in total_order(), picks in prop::collection::vec(0u8..8, 0..8)) {
        let mut rules = Dag::new();
        for (i, before) in order.iter().enumerate() {
            for after in &order[i + 1..] {
                rules.add_edge(*before, *after);
            }
        }
        let items: Vec<u8> = picks.into_iter().collect::<Set<_>>().into_iter().collect();

        let sorted = rules.sort(&items).unwrap();
        prop_assert_eq!(rules.is_sorted_dumb(&items), sorted == items);
        prop_assert_eq!(rules.is_sorted(&items).unwrap(), sorted == items);
        prop_assert_eq!(rules.sort_dumb(&items).unwrap(), sorted.clone());
        prop_assert!(rules.is_sorted_dumb(&sorted));
    }

    /// **Property 8: Connected components partition the graph**
    /// *For any* undirected graph, components cover every node exactly once
    /// and every edge lies inside one component.
    #[test]
    fn prop_components_partition(pairs in edge_list(), isolated in prop::collection::vec(20u8..25, 0..4)) {
        let mut graph = Graph::from_edges(false, pairs);
        for node in isolated {
            graph.add(node);
        }
        let components = graph.cnx_comp().unwrap();

        let total: usize = components.iter().map(Graph::node_count).sum();
        prop_assert_eq!(total, graph.node_count());

        let mut covered = Set::new();
        for component in &components {
            covered.extend(component.nodes());
        }
        prop_assert_eq!(covered, graph.nodes());

        let edges: usize = components.iter().map(Graph::edge_count).sum();
        prop_assert_eq!(edges, graph.edge_count());
        for component in &components {
            for (a, b) in component.edges() {
                prop_assert!(graph.has_edge(&a, &b));
            }
            for node in component.nodes() {
                for nbor in graph.nbors(&node) {
                    prop_assert!(component.has(&nbor));
                }
            }
        }
    }
}

//! Shared helpers for unit tests: a conformance suite for graph representations and
//! slow reference implementations that algorithms are checked against.

/// Generates a test module `$env` checking that `$graph` (keyed by `u32`) implements the
/// editing operations consistently with a naive model, including slot recycling and
/// the cleanup performed when vertices are removed.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::{gens::Substructures, prelude::*, testing::init_tracing};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Outgoing edges per vertex in insertion order
            type Model = FxHashMap<u32, Vec<(u32, Weight)>>;

            fn assert_matches_model(graph: &$graph, model: &Model) {
                assert_eq!(graph.len(), model.len());
                assert_eq!(
                    graph.number_of_edges() as usize,
                    model.values().map(Vec::len).sum::<usize>()
                );

                for (u, out) in model {
                    let s = graph.slot_of(u).unwrap();
                    assert_eq!(graph.key_of(s), u);

                    let edges = graph
                        .out_edges_of(s)
                        .iter()
                        .map(|e| (*graph.key_of(e.dest), e.weight))
                        .collect_vec();
                    assert_eq!(&edges, out);

                    let in_degree = model
                        .values()
                        .flatten()
                        .filter(|(v, _)| v == u)
                        .count();
                    assert_eq!(graph.in_degree(u).unwrap() as usize, in_degree);
                }

                for s in 0..graph.slot_capacity() as Slot {
                    if !graph.is_occupied(s) {
                        assert!(graph.out_edges_of(s).is_empty());
                        assert_eq!(graph.in_degree_of(s), 0);
                    }
                }
            }

            #[test]
            fn random_editing() {
                init_tracing();
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5u32, 12, 30] {
                    let mut graph = <$graph as GraphNew>::new();
                    let mut model = Model::default();

                    for _ in 0..40 * n {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w: Weight = rng.random_range(0..100);

                        match rng.random_range(0..10) {
                            0..2 => {
                                let added = graph.add_vertex(u);
                                assert_eq!(added, !model.contains_key(&u));
                                model.entry(u).or_default();
                            }
                            2 => {
                                let removed = graph.remove_vertex(&u);
                                assert_eq!(removed, model.remove(&u).is_some());
                                for out in model.values_mut() {
                                    out.retain(|&(x, _)| x != u);
                                }
                            }
                            3..7 => {
                                let res = graph.add_edge(&u, &v, w);
                                if !model.contains_key(&u) || !model.contains_key(&v) {
                                    assert!(matches!(res, Err(GraphError::InvalidVertex(_))));
                                } else if u == v {
                                    assert!(matches!(res, Err(GraphError::SelfLoopRejected(_))));
                                } else {
                                    let out = model.get_mut(&u).unwrap();
                                    let fresh = out.iter().all(|&(x, _)| x != v);
                                    assert_eq!(res.unwrap(), fresh);
                                    if fresh {
                                        out.push((v, w));
                                    }
                                }
                            }
                            7..9 => {
                                let res = graph.remove_edge(&u, &v);
                                if model.contains_key(&u) && model.contains_key(&v) {
                                    let out = model.get_mut(&u).unwrap();
                                    let before = out.len();
                                    out.retain(|&(x, _)| x != v);
                                    assert_eq!(res.unwrap(), out.len() < before);
                                } else {
                                    assert!(matches!(res, Err(GraphError::InvalidVertex(_))));
                                }
                            }
                            _ => {
                                let res = graph.set_weight(&u, &v, w);
                                if model.contains_key(&u) && model.contains_key(&v) {
                                    let out = model.get_mut(&u).unwrap();
                                    let prev = match out.iter_mut().find(|(x, _)| *x == v) {
                                        Some(edge) => std::mem::replace(&mut edge.1, w),
                                        None => NO_EDGE,
                                    };
                                    assert_eq!(res.unwrap(), prev);
                                } else {
                                    assert!(res.is_err());
                                }
                            }
                        }

                        assert_matches_model(&graph, &model);
                    }

                    graph.clear();
                    assert!(graph.is_empty());
                    assert!(graph.has_no_edges());
                    assert_eq!(graph.slot_capacity(), 0);
                }
            }

            #[test]
            fn freed_slots_are_reused_last_in_first_out() {
                let mut graph = <$graph as GraphNew>::new();
                graph.add_vertices(0..6u32);
                graph.connect_clique(0..6u32, 1).unwrap();
                let (s1, s3) = (graph.slot_of(&1).unwrap(), graph.slot_of(&3).unwrap());

                assert!(graph.remove_vertex(&1));
                assert!(graph.remove_vertex(&3));
                assert!(!graph.remove_vertex(&3));
                assert_eq!(graph.number_of_edges(), 4 * 3);

                assert!(graph.add_vertex(10));
                assert!(graph.add_vertex(11));
                assert!(graph.add_vertex(12));
                assert_eq!(graph.slot_of(&10), Some(s3));
                assert_eq!(graph.slot_of(&11), Some(s1));
                assert_eq!(graph.slot_of(&12), Some(6));
                assert_eq!(graph.slot_capacity(), 7);

                assert_eq!(graph.out_degree(&10).unwrap(), 0);
                assert_eq!(graph.in_degree(&11).unwrap(), 0);
                assert!(!graph.contains_edge(&0, &10).unwrap());
            }

            #[test]
            fn failed_edits_leave_graph_unchanged() {
                let mut graph = <$graph as GraphNew>::new();
                graph.add_vertices([1u32, 2]);
                graph.add_edge(&1, &2, 5).unwrap();

                assert!(matches!(graph.add_edge(&1, &1, 3), Err(GraphError::SelfLoopRejected(_))));
                assert!(matches!(graph.add_edge(&1, &9, 3), Err(GraphError::InvalidVertex(_))));
                assert!(matches!(graph.remove_edge(&9, &1), Err(GraphError::InvalidVertex(_))));
                assert!(!graph.add_edge(&1, &2, 7).unwrap());

                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.weight(&1, &2).unwrap(), 5);
                assert_eq!(graph.weight(&2, &1).unwrap(), NO_EDGE);
                assert_eq!(graph.in_degree(&2).unwrap(), 1);
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use helpers::*;

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use itertools::Itertools;
    use rand::Rng;

    use crate::prelude::*;

    /// Installs a tracing subscriber honoring `RUST_LOG`; repeated calls are no-ops
    pub(crate) fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// `reach[u][v]` is *true* iff `v` is reachable from `u` (indexed by slot, reflexive)
    pub(crate) fn reachability<G: WeightedAdjacencyList>(graph: &G) -> Vec<Vec<bool>> {
        let cap = graph.slot_capacity();
        let mut reach = vec![vec![false; cap]; cap];

        for s in graph.slots() {
            let row = &mut reach[s as usize];
            row[s as usize] = true;
            let mut queue = VecDeque::from([s]);
            while let Some(u) = queue.pop_front() {
                for v in graph.neighbors_of(u) {
                    if !row[v as usize] {
                        row[v as usize] = true;
                        queue.push_back(v);
                    }
                }
            }
        }

        reach
    }

    /// Distances from `source` indexed by slot; unreachable slots get [`INFINITY`]
    pub(crate) fn bellman_ford<G: WeightedAdjacencyList>(graph: &G, source: Slot) -> Vec<Weight> {
        let mut dist = vec![INFINITY; graph.slot_capacity()];
        dist[source as usize] = 0;

        for _ in 0..graph.len() {
            let mut changed = false;
            for (u, e) in graph.edges() {
                let du = dist[u as usize];
                if du != INFINITY && du + e.weight < dist[e.dest as usize] {
                    dist[e.dest as usize] = du + e.weight;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        dist
    }

    /// Weight of a minimum spanning tree of a symmetric graph by trying every edge subset
    /// of size `n - 1`; `None` if the graph is disconnected
    pub(crate) fn brute_force_mst<G: WeightedAdjacencyList>(graph: &G) -> Option<Weight> {
        let n = graph.len();
        if n <= 1 {
            return Some(0);
        }

        let edges = graph.edges().filter(|(u, e)| *u < e.dest).collect_vec();
        let mut best = None;

        for tree in edges.iter().combinations(n - 1) {
            let mut component: Vec<Slot> = (0..graph.slot_capacity() as Slot).collect();
            let find = |component: &Vec<Slot>, mut x: Slot| {
                while component[x as usize] != x {
                    x = component[x as usize];
                }
                x
            };

            let mut spanning = true;
            for (u, e) in &tree {
                let (ru, rv) = (find(&component, *u), find(&component, e.dest));
                if ru == rv {
                    spanning = false;
                    break;
                }
                component[ru as usize] = rv;
            }

            if spanning {
                let total: Weight = tree.iter().map(|(_, e)| e.weight).sum();
                best = Some(best.map_or(total, |b: Weight| b.min(total)));
            }
        }

        best
    }

    /// A random DAG on vertices `0..n` where every edge `(u, v)` satisfies `u < v`
    pub(crate) fn random_dag<G, R>(rng: &mut R, n: NumVertices, p: f64) -> G
    where
        G: GraphNew + GraphEdgeEditing,
        G::Key: From<NumVertices>,
        R: Rng,
    {
        let mut graph = G::new();
        graph.add_vertices((0..n).map(Into::into));

        for u in 0..n {
            for v in u + 1..n {
                if rng.random_bool(p) {
                    let w = rng.random_range(0..20);
                    graph.add_edge(&u.into(), &v.into(), w).unwrap();
                }
            }
        }

        graph
    }
}

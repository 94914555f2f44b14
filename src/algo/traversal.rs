/*!
Breadth- and depth-first traversals and everything derived from finishing times.

The depth-first visit runs on an explicit stack of `(slot, next edge)` frames, so deep
graphs (long paths, large cycles) cannot overflow the call stack. Vertices are prepended
to the output as they finish, which yields decreasing finishing-time order.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Breadth-first search from `source`.
/// Returns the vertices reachable from `source` in the order they were dequeued.
///
/// Leaves every reached vertex black in `state`.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `source` is not in the graph.
pub fn bfs<G>(graph: &G, state: &mut AlgoState, source: &G::Key) -> Result<Vec<G::Key>>
where
    G: WeightedAdjacencyList,
{
    let s = graph.try_slot_of(source)?;
    state.color_white(graph);

    let mut queue = VecDeque::from([s]);
    state.set_color_of(s, Color::Gray);

    let mut order = Vec::new();
    while let Some(u) = queue.pop_front() {
        state.set_color_of(u, Color::Black);
        order.push(u);

        for v in graph.neighbors_of(u) {
            if state.is_white(v) {
                state.set_color_of(v, Color::Gray);
                queue.push_back(v);
            }
        }
    }

    Ok(graph.keys_of(order))
}

/// Core of the depth-first visit on slot level; `on_finish` is called for every vertex
/// in finishing order. With `detect_cycle` set, the visit stops at the first edge into a
/// gray vertex and returns it.
pub(crate) fn visit_slots<G, F>(
    graph: &G,
    state: &mut AlgoState,
    root: Slot,
    detect_cycle: bool,
    mut on_finish: F,
) -> Option<(Slot, Slot)>
where
    G: WeightedAdjacencyList,
    F: FnMut(Slot),
{
    state.set_color_of(root, Color::Gray);
    let mut stack: Vec<(Slot, usize)> = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let (u, pos) = *frame;

        match graph.out_edges_of(u).get(pos) {
            Some(e) => {
                frame.1 += 1;
                match state.color_of(e.dest) {
                    Color::White => {
                        state.set_color_of(e.dest, Color::Gray);
                        stack.push((e.dest, 0));
                    }
                    Color::Gray if detect_cycle => return Some((u, e.dest)),
                    _ => {}
                }
            }
            None => {
                stack.pop();
                state.set_color_of(u, Color::Black);
                on_finish(u);
            }
        }
    }

    None
}

/// Runs the depth-first visit from every white vertex in slot order and returns the
/// vertices in decreasing finishing time, together with the edge that closed a cycle
/// if `detect_cycle` is set and one was found
fn finish_all<G>(
    graph: &G,
    state: &mut AlgoState,
    detect_cycle: bool,
) -> (VecDeque<Slot>, Option<(Slot, Slot)>)
where
    G: WeightedAdjacencyList,
{
    state.color_white(graph);

    let mut order = VecDeque::with_capacity(graph.len());
    for u in graph.slots() {
        if !state.is_white(u) {
            continue;
        }
        if let Some(edge) = visit_slots(graph, state, u, detect_cycle, |v| order.push_front(v)) {
            return (order, Some(edge));
        }
    }

    (order, None)
}

/// All slots in decreasing finishing time of a depth-first search
pub(crate) fn dfs_slots<G>(graph: &G, state: &mut AlgoState) -> VecDeque<Slot>
where
    G: WeightedAdjacencyList,
{
    finish_all(graph, state, false).0
}

/// All slots in topological order
pub(crate) fn topological_slots<G>(graph: &G, state: &mut AlgoState) -> Result<VecDeque<Slot>>
where
    G: WeightedAdjacencyList,
{
    match finish_all(graph, state, true) {
        (order, None) => Ok(order),
        (_, Some((u, v))) => Err(GraphError::cycle(graph.key_of(u), graph.key_of(v))),
    }
}

/// Depth-first visit from `source`. Every vertex finished by this visit is prepended to `out`,
/// so repeated calls accumulate vertices in decreasing finishing time.
///
/// Does **not** reset colors: vertices that are not white are treated as already visited.
/// Call [`AlgoState::color_white`] before the first visit.
///
/// # Errors
/// - [`GraphError::InvalidVertex`] if `source` is not in the graph
/// - [`GraphError::CycleDetected`] if `detect_cycle` is set and an edge into a vertex on
///   the current search path is found. `out` then holds the vertices finished before.
pub fn dfs_visit<G>(
    graph: &G,
    state: &mut AlgoState,
    source: &G::Key,
    out: &mut VecDeque<G::Key>,
    detect_cycle: bool,
) -> Result<()>
where
    G: WeightedAdjacencyList,
{
    let s = graph.try_slot_of(source)?;
    state.fit(graph);
    match visit_slots(graph, state, s, detect_cycle, |u| {
        out.push_front(graph.key_of(u).clone())
    }) {
        Some((u, v)) => Err(GraphError::cycle(graph.key_of(u), graph.key_of(v))),
        None => Ok(()),
    }
}

/// Depth-first search over the whole graph.
/// Returns all vertices in decreasing finishing time.
pub fn dfs<G>(graph: &G, state: &mut AlgoState) -> Vec<G::Key>
where
    G: WeightedAdjacencyList,
{
    graph.keys_of(dfs_slots(graph, state))
}

/// Returns the vertices in topological order: for every edge `(u, v)`, `u` comes before `v`.
///
/// # Errors
/// [`GraphError::CycleDetected`] if the graph contains a cycle.
pub fn topological_sort<G>(graph: &G, state: &mut AlgoState) -> Result<Vec<G::Key>>
where
    G: WeightedAdjacencyList,
{
    Ok(graph.keys_of(topological_slots(graph, state)?))
}

/// Returns *true* if the graph has no directed cycle
pub fn acyclic<G>(graph: &G, state: &mut AlgoState) -> bool
where
    G: WeightedAdjacencyList,
{
    match topological_slots(graph, state) {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "graph is cyclic");
            false
        }
    }
}

/// Returns a new graph with the same vertices and every edge reversed, keeping weights.
/// Vertices are inserted in slot order, so on a graph without free slots every vertex
/// keeps its slot.
///
/// # Errors
/// Propagates the first failing [`GraphEdgeEditing::add_edge`] on the new graph.
pub fn transpose<G>(graph: &G) -> Result<G>
where
    G: GraphNew + GraphEdgeEditing,
{
    let mut transposed = G::new();
    transposed.add_vertices(graph.vertices().cloned());

    for (u, v, w) in graph.weighted_edges() {
        transposed.add_edge(v, u, w)?;
    }

    Ok(transposed)
}

/// Provides convenient traversal methods on graphs that allocate their own [`AlgoState`]
pub trait Traversal: WeightedAdjacencyList + Sized {
    /// Vertices reachable from `source` in breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseDiGraph::from_weighted_edges([1, 2, 3], [(1, 2, 5), (2, 3, 1)]).unwrap();
    ///
    /// assert_eq!(g.bfs_from(&1).unwrap(), vec![1, 2, 3]);
    /// assert_eq!(g.bfs_from(&3).unwrap(), vec![3]);
    /// ```
    fn bfs_from(&self, source: &Self::Key) -> Result<Vec<Self::Key>> {
        bfs(self, &mut AlgoState::for_graph(self), source)
    }

    /// All vertices in decreasing finishing time of a depth-first search
    fn dfs_order(&self) -> Vec<Self::Key> {
        dfs(self, &mut AlgoState::for_graph(self))
    }

    /// All vertices in topological order or [`GraphError::CycleDetected`]
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseDiGraph::from_weighted_edges(["b", "a"], [("a", "b", 1)]).unwrap();
    /// assert_eq!(g.topological_order().unwrap(), vec!["a", "b"]);
    /// ```
    fn topological_order(&self) -> Result<Vec<Self::Key>> {
        topological_sort(self, &mut AlgoState::for_graph(self))
    }

    /// Returns *true* if the graph has no directed cycle
    fn is_acyclic(&self) -> bool {
        acyclic(self, &mut AlgoState::for_graph(self))
    }

    /// Returns the graph with all edges reversed
    fn transposed(&self) -> Result<Self>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        transpose(self)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    fn position_map<K: VertexKey>(order: &[K]) -> fxhash::FxHashMap<K, usize> {
        order.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect()
    }

    #[test]
    fn bfs_reaches_exactly_the_reachable_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1u32, 5, 8, 20] {
            for p in [0.05, 0.2, 0.5] {
                let g: SparseDiGraph<u32> = WeightedGnp::new().nodes(n).prob(p).generate(rng).unwrap();
                let reach = reachability(&g);

                for s in g.slots() {
                    let order = g.bfs_from(g.key_of(s)).unwrap();
                    assert_eq!(order[0], *g.key_of(s));
                    assert!(order.iter().all_unique());

                    let mut got = order.iter().map(|k| g.slot_of(k).unwrap()).collect_vec();
                    got.sort_unstable();
                    let expected = g.slots().filter(|&t| reach[idx(s)][idx(t)]).collect_vec();
                    assert_eq!(got, expected);
                }
            }
        }
    }

    #[test]
    fn bfs_visits_by_layer() {
        let g = SparseDiGraph::from_weighted_edges(
            0..6u32,
            [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1), (4, 5, 1), (5, 0, 1)],
        )
        .unwrap();
        let order = g.bfs_from(&0).unwrap();
        let pos = position_map(&order);

        assert_eq!(order.len(), 6);
        assert!(pos[&1] < pos[&3] && pos[&2] < pos[&3]);
        assert!(pos[&3] < pos[&5] && pos[&4] < pos[&5]);
        assert!(matches!(g.bfs_from(&9), Err(GraphError::InvalidVertex(_))));
    }

    #[test]
    fn dfs_visit_prepends_in_finishing_order() {
        let g = SparseDiGraph::from_weighted_edges(
            ['a', 'b', 'c', 'd'],
            [('a', 'b', 1), ('b', 'c', 1), ('d', 'c', 1)],
        )
        .unwrap();
        let mut state = AlgoState::for_graph(&g);
        state.color_white(&g);

        let mut out = VecDeque::new();
        dfs_visit(&g, &mut state, &'a', &mut out, false).unwrap();
        assert_eq!(out, VecDeque::from(vec!['a', 'b', 'c']));

        dfs_visit(&g, &mut state, &'d', &mut out, true).unwrap();
        assert_eq!(out, VecDeque::from(vec!['d', 'a', 'b', 'c']));
        assert_eq!(state.color(&g, &'c').unwrap(), Color::Black);

        assert!(dfs_visit(&g, &mut state, &'z', &mut out, false).is_err());
    }

    #[test]
    fn dfs_covers_every_vertex_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let g: ArrDiGraph<u32> = WeightedGnp::new().nodes(30).prob(0.1).generate(rng).unwrap();

        let order = g.dfs_order();
        assert_eq!(order.len(), 30);
        assert!(order.iter().all_unique());
    }

    #[test]
    fn topological_sort_respects_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2u32, 8, 30, 60] {
            for _ in 0..10 {
                let g: SparseDiGraph<u32> = random_dag(rng, n, 0.2);
                let order = g.topological_order().unwrap();
                assert_eq!(order.len(), n as usize);

                let pos = position_map(&order);
                for (u, v, _) in g.weighted_edges() {
                    assert!(pos[u] < pos[v]);
                }
                assert!(g.is_acyclic());
            }
        }
    }

    #[test]
    fn cycles_are_detected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [2u32, 3, 10, 40] {
            let mut g: SparseDiGraph<u32> = random_dag(rng, n, 0.3);
            assert!(g.is_acyclic());

            // close a cycle against the topological order
            let order = g.topological_order().unwrap();
            let (first, last) = (order[0], order[order.len() - 1]);
            g.add_edge(&first, &last, 1).unwrap();
            assert!(g.is_acyclic());
            g.add_edge(&last, &first, 1).unwrap();

            assert!(!g.is_acyclic());
            let err = g.topological_order().unwrap_err();
            assert!(err.is_cycle());
        }
    }

    #[test]
    fn deep_cycle_does_not_overflow() {
        let n = 10_000u32;
        let mut g = SparseDiGraph::new();
        g.add_vertices(0..n);
        g.connect_cycle(0..n, 1).unwrap();

        assert_eq!(g.dfs_order().len(), n as usize);
        assert!(!g.is_acyclic());

        g.remove_edge(&(n - 1), &0).unwrap();
        assert_eq!(g.topological_order().unwrap(), (0..n).collect_vec());
    }

    #[test]
    fn transpose_after_vertex_churn() {
        let mut g = ArrDiGraph::from_weighted_edges(
            0..5u32,
            [(0, 1, 3), (1, 2, 4), (2, 3, 5), (3, 4, 6), (4, 0, 7)],
        )
        .unwrap();
        g.remove_vertex(&1);
        g.remove_vertex(&3);
        g.add_vertices([8, 9]);
        g.connect_path([8, 0, 9], 2).unwrap();

        let t = transpose(&g).unwrap();
        assert_eq!(t.number_of_vertices(), g.number_of_vertices());
        assert_eq!(t.number_of_edges(), g.number_of_edges());
        for (u, v, w) in g.weighted_edges() {
            assert_eq!(t.weight(v, u).unwrap(), w);
            assert_eq!(t.weight(u, v).unwrap(), NO_EDGE);
        }
        assert_eq!(t.in_degree(&0).unwrap(), g.out_degree(&0).unwrap());
    }

    #[test]
    fn double_transpose_is_identity() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let g: SparseDiGraph<u32> = WeightedGnp::new()
            .nodes(25)
            .prob(0.15)
            .weights(1, 50)
            .generate(rng)
            .unwrap();

        let t = g.transposed().unwrap();
        assert_eq!(t.number_of_edges(), g.number_of_edges());
        for (u, v, w) in g.weighted_edges() {
            assert_eq!(t.weight(v, u).unwrap(), w);
        }

        let tt = t.transposed().unwrap();
        assert_eq!(
            tt.vertices().sorted().collect_vec(),
            g.vertices().sorted().collect_vec()
        );
        assert_eq!(
            tt.weighted_edges().sorted().collect_vec(),
            g.weighted_edges().sorted().collect_vec()
        );
    }
}

/*!
Unweighted and weighted single-source shortest paths.

All functions leave their result in the [`AlgoState`]: the data value of a vertex is its
distance from the source (or [`INFINITY`] if unreached) and the parent chain leads back to
the source, whose parent is itself. [`path`] reconstructs a path from this state.

Edge weights are expected to be non-negative; distances saturate at [`INFINITY`].
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use tracing::debug;

use super::*;

/// Resets colors, data and parents and installs `s` as the source
fn prepare_source<G: GraphVertexOrder>(graph: &G, state: &mut AlgoState, s: Slot) {
    state.color_white(graph);
    state.init_data(graph);
    state.clear_parents(graph);
    state.set_data_of(s, 0);
    state.set_parent_of(s, s);
}

/// Computes the minimum number of edges from `source` to every vertex (breadth-first).
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `source` is not in the graph.
pub fn shortest_path<G>(graph: &G, state: &mut AlgoState, source: &G::Key) -> Result<()>
where
    G: WeightedAdjacencyList,
{
    let s = graph.try_slot_of(source)?;
    prepare_source(graph, state, s);

    let mut queue = VecDeque::from([s]);
    state.set_color_of(s, Color::Gray);

    let mut reached: NumVertices = 1;
    while let Some(u) = queue.pop_front() {
        state.set_color_of(u, Color::Black);
        let hops = state.data_of(u) + 1;

        for v in graph.neighbors_of(u) {
            if state.is_white(v) {
                state.set_color_of(v, Color::Gray);
                state.set_data_of(v, hops);
                state.set_parent_of(v, u);
                queue.push_back(v);
                reached += 1;
            }
        }
    }

    debug!(reached, "computed hop distances");
    Ok(())
}

/// Returns the path `source, .., target` recorded in `state` by a previous run of
/// [`shortest_path`], [`minimum_path`] or [`dag_minimum_path`] from `source`.
/// Returns an empty path if `target` was not reached.
///
/// # Errors
/// - [`GraphError::InvalidVertex`] if `source` or `target` is not in the graph
/// - [`GraphError::BrokenPath`] if the parent chain of `target` does not lead to `source`
pub fn path<G>(
    graph: &G,
    state: &AlgoState,
    source: &G::Key,
    target: &G::Key,
) -> Result<Vec<G::Key>>
where
    G: GraphVertexOrder,
{
    let s = graph.try_slot_of(source)?;
    let t = graph.try_slot_of(target)?;

    if state.data(graph, target)? == INFINITY {
        return Ok(Vec::new());
    }

    let broken = || GraphError::BrokenPath(format!("{target:?}"));

    let mut rev_path = vec![t];
    let mut u = t;
    while u != s {
        let p = state
            .parent_of(u)
            .filter(|&p| p != u && graph.is_occupied(p))
            .ok_or_else(broken)?;

        rev_path.push(p);
        if rev_path.len() > graph.len() {
            return Err(broken());
        }
        u = p;
    }

    rev_path.reverse();
    Ok(graph.keys_of(rev_path))
}

/// Dijkstra's algorithm with lazy deletion: the heap may hold several entries per vertex,
/// stale ones are skipped once the vertex is finalized.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `source` is not in the graph.
pub fn minimum_path<G>(graph: &G, state: &mut AlgoState, source: &G::Key) -> Result<()>
where
    G: WeightedAdjacencyList,
{
    let s = graph.try_slot_of(source)?;
    prepare_source(graph, state, s);

    let n = graph.number_of_vertices();
    let mut finalized: NumVertices = 0;
    let mut stale: usize = 0;
    let mut heap = BinaryHeap::from([Reverse((0, s))]);

    while finalized < n {
        let Some(Reverse((_, u))) = heap.pop() else {
            break;
        };
        if state.color_of(u) == Color::Black {
            stale += 1;
            continue;
        }

        state.set_color_of(u, Color::Black);
        finalized += 1;

        let du = state.data_of(u);
        for e in graph.out_edges_of(u) {
            if !state.is_white(e.dest) {
                continue;
            }

            let candidate = du.saturating_add(e.weight);
            if candidate < state.data_of(e.dest) {
                state.set_data_of(e.dest, candidate);
                state.set_parent_of(e.dest, u);
                heap.push(Reverse((candidate, e.dest)));
            }
        }
    }

    debug!(finalized, stale, "computed weighted distances");
    Ok(())
}

/// Weighted distances on a directed acyclic graph: relaxes the outgoing edges of every
/// vertex once, in topological order.
///
/// # Errors
/// - [`GraphError::InvalidVertex`] if `source` is not in the graph
/// - [`GraphError::CycleDetected`] if the graph has a cycle
pub fn dag_minimum_path<G>(graph: &G, state: &mut AlgoState, source: &G::Key) -> Result<()>
where
    G: WeightedAdjacencyList,
{
    let s = graph.try_slot_of(source)?;
    let order = topological_slots(graph, state)?;
    prepare_source(graph, state, s);

    for u in order {
        let du = state.data_of(u);
        if du == INFINITY {
            continue;
        }

        for e in graph.out_edges_of(u) {
            let candidate = du.saturating_add(e.weight);
            if candidate < state.data_of(e.dest) {
                state.set_data_of(e.dest, candidate);
                state.set_parent_of(e.dest, u);
            }
        }
    }

    Ok(())
}

/// Result of a single-source shortest path run that owns its scratch state
pub struct PathTree<'a, G> {
    graph: &'a G,
    state: AlgoState,
    source: Slot,
}

impl<'a, G> PathTree<'a, G>
where
    G: GraphVertexOrder,
{
    /// The source of all paths
    pub fn source(&self) -> &'a G::Key {
        self.graph.key_of(self.source)
    }

    /// Distance of `target` from the source or `None` if it is unreachable
    pub fn distance(&self, target: &G::Key) -> Result<Option<Weight>> {
        let d = self.state.data(self.graph, target)?;
        Ok((d != INFINITY).then_some(d))
    }

    /// Path from the source to `target`, empty if `target` is unreachable
    pub fn path_to(&self, target: &G::Key) -> Result<Vec<G::Key>> {
        path(self.graph, &self.state, self.source(), target)
    }

    /// Iterates over all reached vertices together with their distance
    pub fn distances(&self) -> impl Iterator<Item = (&'a G::Key, Weight)> + '_ {
        let graph = self.graph;
        graph.slots().filter_map(move |u| {
            let d = self.state.data_of(u);
            (d != INFINITY).then(|| (graph.key_of(u), d))
        })
    }

    /// The underlying scratch state
    pub fn state(&self) -> &AlgoState {
        &self.state
    }

    /// Consumes the tree and returns its scratch state
    pub fn into_state(self) -> AlgoState {
        self.state
    }
}

fn path_tree_with<'a, G, F>(graph: &'a G, source: &G::Key, algo: F) -> Result<PathTree<'a, G>>
where
    G: WeightedAdjacencyList,
    F: FnOnce(&G, &mut AlgoState, &G::Key) -> Result<()>,
{
    let mut state = AlgoState::for_graph(graph);
    algo(graph, &mut state, source)?;
    Ok(PathTree {
        graph,
        state,
        source: graph.try_slot_of(source)?,
    })
}

/// Provides shortest path computations on graphs that allocate their own [`AlgoState`]
pub trait ShortestPaths: WeightedAdjacencyList + Sized {
    /// Hop distances from `source`
    fn hop_distances(&self, source: &Self::Key) -> Result<PathTree<'_, Self>> {
        path_tree_with(self, source, shortest_path)
    }

    /// Weighted distances from `source` (Dijkstra)
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseDiGraph::from_weighted_edges(
    ///     ["A", "B", "C"],
    ///     [("A", "B", 1), ("B", "C", 2), ("A", "C", 5)],
    /// ).unwrap();
    ///
    /// let tree = g.min_distances(&"A").unwrap();
    /// assert_eq!(tree.distance(&"C").unwrap(), Some(3));
    /// assert_eq!(tree.path_to(&"C").unwrap(), vec!["A", "B", "C"]);
    /// ```
    fn min_distances(&self, source: &Self::Key) -> Result<PathTree<'_, Self>> {
        path_tree_with(self, source, minimum_path)
    }

    /// Weighted distances from `source` on an acyclic graph
    fn dag_min_distances(&self, source: &Self::Key) -> Result<PathTree<'_, Self>> {
        path_tree_with(self, source, dag_minimum_path)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + Sized {}

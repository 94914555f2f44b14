/*!
Minimum spanning trees with Prim's algorithm.

Undirected graphs are modelled by mirrored edges of equal weight. By default this is
not verified: the tree is grown along outgoing edges and every tree edge is mirrored in
the output. [`MinSpanTree::require_symmetric`] turns the assumption into a check.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::debug;

use super::*;

/// Computes a minimum spanning tree of a (symmetric) graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut g = SparseDiGraph::new();
/// g.add_vertices(['a', 'b', 'c']);
/// for (u, v, w) in [('a', 'b', 3), ('b', 'c', 1), ('a', 'c', 2)] {
///     g.add_edge(&u, &v, w).unwrap();
///     g.add_edge(&v, &u, w).unwrap();
/// }
///
/// let (tree, weight) = MinSpanTree::new()
///     .require_symmetric(true)
///     .compute(&g, &mut AlgoState::new())
///     .unwrap();
///
/// assert_eq!(weight, 3);
/// assert_eq!(tree.number_of_edges(), 4);
/// assert!(!tree.contains_edge(&'a', &'b').unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSpanTree {
    require_symmetric: bool,
}

impl MinSpanTree {
    /// Creates the default configuration: symmetry is not checked
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether every edge must be mirrored with equal weight
    pub fn set_require_symmetric(&mut self, require: bool) {
        self.require_symmetric = require;
    }

    /// Sets whether every edge must be mirrored with equal weight
    pub fn require_symmetric(mut self, require: bool) -> Self {
        self.set_require_symmetric(require);
        self
    }

    /// Returns the tree (all vertices, both directions of every tree edge) and its total weight.
    ///
    /// # Errors
    /// - [`GraphError::EmptyGraph`] if the graph has no vertices
    /// - [`GraphError::Asymmetric`] if symmetry is required and some edge is not mirrored
    /// - [`GraphError::Disconnected`] if not every vertex can be reached from the start vertex
    pub fn compute<G>(&self, graph: &G, state: &mut AlgoState) -> Result<(G, Weight)>
    where
        G: GraphNew + GraphEdgeEditing,
    {
        let Some(start) = graph.slots().next() else {
            return Err(GraphError::EmptyGraph);
        };

        if self.require_symmetric {
            check_symmetric(graph)?;
        }

        state.color_white(graph);
        state.init_data(graph);
        state.clear_parents(graph);
        state.set_data_of(start, 0);
        state.set_parent_of(start, start);

        let n = graph.number_of_vertices();
        let mut spanned: NumVertices = 0;
        let mut total: Weight = 0;
        let mut heap = BinaryHeap::from([Reverse((0, start))]);

        loop {
            let Some(Reverse((w, u))) = heap.pop() else {
                return Err(GraphError::Disconnected { spanned, total: n });
            };
            if !state.is_white(u) {
                continue;
            }

            state.set_color_of(u, Color::Black);
            total = total.saturating_add(w);
            spanned += 1;
            if spanned == n {
                break;
            }

            for e in graph.out_edges_of(u) {
                if state.is_white(e.dest) && e.weight < state.data_of(e.dest) {
                    state.set_data_of(e.dest, e.weight);
                    state.set_parent_of(e.dest, u);
                    heap.push(Reverse((e.weight, e.dest)));
                }
            }
        }

        let mut tree = G::new();
        tree.add_vertices(graph.vertices().cloned());
        for v in graph.slots().filter(|&v| v != start) {
            let Some(p) = state.parent_of(v) else {
                continue;
            };
            let w = graph.edge_between(p, v).map_or(NO_EDGE, |e| e.weight);
            let (pk, vk) = (graph.key_of(p), graph.key_of(v));
            tree.add_edge(pk, vk, w)?;
            tree.add_edge(vk, pk, w)?;
        }

        debug!(vertices = n, total, "computed minimum spanning tree");
        Ok((tree, total))
    }
}

/// Fails with [`GraphError::Asymmetric`] on the first edge without a mirrored edge of equal weight
fn check_symmetric<G>(graph: &G) -> Result<()>
where
    G: WeightedAdjacencyList,
{
    for (u, e) in graph.edges() {
        if graph.edge_between(e.dest, u).map(|m| m.weight) != Some(e.weight) {
            return Err(GraphError::Asymmetric {
                from: format!("{:?}", graph.key_of(u)),
                to: format!("{:?}", graph.key_of(e.dest)),
                weight: e.weight,
            });
        }
    }
    Ok(())
}

/// Shorthand for [`MinSpanTree::compute`] with the default configuration
pub fn min_span_tree<G>(graph: &G, state: &mut AlgoState) -> Result<(G, Weight)>
where
    G: GraphNew + GraphEdgeEditing,
{
    MinSpanTree::new().compute(graph, state)
}

/*!
Strongly connected components via Kosaraju's algorithm: a depth-first search on the graph
yields vertices in decreasing finishing time; depth-first visits on the transposed graph,
seeded in that order, then touch exactly one component each.
*/

use tracing::debug;

use super::*;

/// Partitions the vertices into strongly connected components.
/// Two vertices share a component iff each can reach the other.
///
/// `state` holds the colors of the depth-first search on `graph` afterwards; the
/// transposed graph gets a state of its own.
///
/// # Errors
/// Propagates a failure to build the transposed graph, see [`transpose`].
pub fn strong_components<G>(graph: &G, state: &mut AlgoState) -> Result<Vec<Vec<G::Key>>>
where
    G: GraphNew + GraphEdgeEditing,
{
    let order = dfs_slots(graph, state);

    let transposed = transpose(graph)?;
    let mut t_state = AlgoState::for_graph(&transposed);
    t_state.color_white(&transposed);

    let mut components = Vec::new();
    for u in order {
        let Some(tu) = transposed.slot_of(graph.key_of(u)) else {
            continue;
        };
        if !t_state.is_white(tu) {
            continue;
        }

        let mut members = Vec::new();
        visit_slots(&transposed, &mut t_state, tu, false, |v| members.push(v));
        members.reverse();
        components.push(transposed.keys_of(members));
    }

    debug!(
        vertices = graph.number_of_vertices(),
        components = components.len(),
        "computed strongly connected components"
    );
    Ok(components)
}

/// Provides component computations on graphs that allocate their own [`AlgoState`]
pub trait Components: GraphNew + GraphEdgeEditing + Sized {
    /// Returns the strongly connected components of the graph
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseDiGraph::from_weighted_edges(
    ///     [1, 2, 3],
    ///     [(1, 2, 1), (2, 1, 1), (2, 3, 1)],
    /// ).unwrap();
    ///
    /// let mut sccs = g.strongly_connected_components().unwrap();
    /// sccs.iter_mut().for_each(|c| c.sort());
    /// sccs.sort();
    /// assert_eq!(sccs, vec![vec![1, 2], vec![3]]);
    /// ```
    fn strongly_connected_components(&self) -> Result<Vec<Vec<Self::Key>>> {
        strong_components(self, &mut AlgoState::for_graph(self))
    }
}

impl<G> Components for G where G: GraphNew + GraphEdgeEditing + Sized {}

/*!
# Substructure Generators

Adds common motifs to an existing graph: **paths**, **cycles** and **cliques**, every
edge with the same weight. Edges that already exist are kept with their weight.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = SparseDiGraph::new();
g.add_vertices(0..5u32);
g.connect_path([0, 1, 2], 1).unwrap();
g.connect_cycle([2, 3, 4], 7).unwrap();

assert_eq!(g.number_of_edges(), 5);
assert_eq!(g.weight(&4, &2).unwrap(), 7);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// All methods return the number of new edges and fail like [`GraphEdgeEditing::add_edge`]
/// on absent vertices or self-loops; edges added before the failing one stay.
pub trait Substructures: GraphEdgeEditing {
    /// Connects consecutive vertices with an edge `(u, v)` of weight `w`
    fn connect_path<P>(&mut self, vertices_on_path: P, w: Weight) -> Result<NumEdges>
    where
        P: IntoIterator<Item = Self::Key>;

    /// Like [`Substructures::connect_path`] and additionally connects the last vertex back
    /// to the first. A single vertex yields no edge.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, w: Weight) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Self::Key>;

    /// Connects every ordered pair of distinct vertices
    fn connect_clique<C>(&mut self, vertices: C, w: Weight) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Self::Key>;
}

impl<G> Substructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, vertices_on_path: P, w: Weight) -> Result<NumEdges>
    where
        P: IntoIterator<Item = Self::Key>,
    {
        let mut added = 0;
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            added += self.add_edge(&u, &v, w)? as NumEdges;
        }
        Ok(added)
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, w: Weight) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Self::Key>,
    {
        let mut iter = vertices_in_cycle.into_iter();
        let Some(first) = iter.next() else {
            return Ok(0);
        };

        let mut added = 0;
        let mut prev = first.clone();
        for cur in iter {
            added += self.add_edge(&prev, &cur, w)? as NumEdges;
            prev = cur;
        }

        if prev != first {
            added += self.add_edge(&prev, &first, w)? as NumEdges;
        }
        Ok(added)
    }

    fn connect_clique<C>(&mut self, vertices: C, w: Weight) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Self::Key>,
    {
        let vertices = vertices.into_iter().collect_vec();
        let mut added = 0;
        for u in &vertices {
            for v in vertices.iter().filter(|&v| v != u) {
                added += self.add_edge(u, v, w)? as NumEdges;
            }
        }
        Ok(added)
    }
}

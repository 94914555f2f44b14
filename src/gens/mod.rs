/*!
# Graph Generators

Random weighted graphs and deterministic substructures, mainly for tests.

Generators follow the builder pattern:
1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters (e.g., `.nodes(n).prob(p).weights(1, 10)`).
3. Build a graph via `generate(rng)` or just the edges via `edges(rng)`.

Generated vertices are keyed `0..n` (converted into the key type of the graph);
generated graphs never contain self-loops.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices
pub trait NumNodesGen {
    /// Sets the number of vertices of the generated graph
    fn nodes(self, n: NumVertices) -> Self;
}

/// A weighted edge between generated vertices
pub type GeneratedEdge = (NumVertices, NumVertices, Weight);

/// General trait for a configurable random weighted graph generator
pub trait WeightedGraphGenerator {
    /// Number of vertices to generate
    fn number_of_vertices(&self) -> NumVertices;

    /// Draws a random list of weighted edges between vertices `0..n`
    fn edges<R>(&self, rng: &mut R) -> Result<Vec<GeneratedEdge>>
    where
        R: Rng;

    /// Draws a random graph with vertices `0..n`
    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing,
        G::Key: From<NumVertices>,
        R: Rng,
    {
        let edges = self.edges(rng)?;
        G::from_weighted_edges(
            (0..self.number_of_vertices()).map(Into::into),
            edges.into_iter().map(|(u, v, w)| (u.into(), v.into(), w)),
        )
    }
}

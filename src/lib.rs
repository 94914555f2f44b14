/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **directed** : `(u, v)` and `(v, u)` are distinct edges; undirected graphs are modelled by mirrored edges
- **weighted** : every edge carries an integer [`Weight`]
- **labelled** : vertices are identified by caller-chosen keys (anything `Clone + Eq + Hash + Debug`)

# Representation

Internally every vertex lives in a [`Slot`] (`u32`). Slots freed by vertex removal are recycled
through an availability stack before the storage grows, so per-slot arrays stay dense.
Edges are stored per slot as an ordered list of [`WeightedEdge`]s `(destination, weight)`
together with an in-degree counter per slot and a global edge counter.

See the [`repr`] module for the storage backends:
- [`ArrDiGraph`](crate::repr::ArrDiGraph) storing edges in `Vec`s
- [`SparseDiGraph`](crate::repr::SparseDiGraph) storing up to four edges per vertex inline

# Design

Algorithms never touch the graph mutably. Their scratch fields (color, parent, numeric data)
live in an [`AlgoState`](crate::state::AlgoState) indexed by slot, which is passed alongside a
shared reference to the graph. The free functions in [`algo`] take `(&graph, &mut state, ..)`;
the convenience traits [`algo::Traversal`], [`algo::ShortestPaths`] and
[`algo::Components`] allocate a fresh state per call.

Configurable algorithms/generators/readers follow the *Builder* / *Setter* pattern.

# Usage

- [`prelude`] includes slots, edges, errors, basic graph operations, scratch state and all representations,
- [`algo`] includes BFS, DFS, topological sort, shortest paths, minimum spanning trees and SCCs,
- [`gens`] includes a seeded random weighted graph generator and path/cycle substructures,
- [`io`] includes a reader/writer for the plain text graph format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub mod slot;
pub mod state;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use slot::*;

/// `wgraphs::prelude` includes definitions for slots, edges and errors, all basic graph operation
/// traits, the algorithm scratch state as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, slot::*, state::*};
}

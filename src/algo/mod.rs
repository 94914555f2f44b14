/*!
# Graph Algorithms

This module provides the classical algorithms on top of [`WeightedAdjacencyList`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```

Every algorithm comes in two flavors:
- a free function taking `(&graph, &mut AlgoState, ..)` that leaves its results in the
  scratch state (colors, parents, data), and
- a method on one of the extension traits [`Traversal`], [`ShortestPaths`] and
  [`Components`], implemented for every graph, which allocates a fresh [`AlgoState`].

A single [`AlgoState`] must not be shared by interleaved algorithm runs; every algorithm
resets the fields it reads at entry.
*/

mod components;
mod paths;
mod spanning;
mod traversal;

use crate::prelude::*;

pub use components::*;
pub use paths::*;
pub use spanning::*;
pub use traversal::*;

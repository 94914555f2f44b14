/*!
# Edge Representation

An edge is stored in the adjacency list of its source vertex and only records its
destination slot and its weight. Edge identity (for containment and removal) is the
destination slot alone: the weight can be updated in place.
*/

use std::fmt::{Debug, Display};

use crate::slot::Slot;

/// Edge weights are signed integers. Algorithms assume non-negative weights.
pub type Weight = i32;

/// Returned by weight queries if the requested edge does not exist
pub const NO_EDGE: Weight = -1;

/// Scratch-data value of vertices that have not been reached (yet)
pub const INFINITY: Weight = Weight::MAX;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An outgoing edge: the destination slot and the weight of the edge.
#[derive(Copy, Clone, Eq)]
pub struct WeightedEdge {
    /// Slot of the destination vertex
    pub dest: Slot,
    /// Weight of the edge
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a new edge towards `dest`
    pub const fn new(dest: Slot, weight: Weight) -> Self {
        Self { dest, weight }
    }

    /// Returns *true* if the edge points to `dest` regardless of its weight
    #[inline]
    pub const fn points_to(&self, dest: Slot) -> bool {
        self.dest == dest
    }
}

/// Two edges are equal if they share a destination
impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.dest == other.dest
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "->{}({})", self.dest, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Slot, Weight)> for WeightedEdge {
    fn from(value: (Slot, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_weight() {
        assert_eq!(WeightedEdge::new(3, 1), WeightedEdge::new(3, 7));
        assert_ne!(WeightedEdge::new(3, 1), WeightedEdge::new(4, 1));
        assert!(WeightedEdge::from((5, 2)).points_to(5));
    }
}

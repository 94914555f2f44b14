use smallvec::{Array, SmallVec};

use super::*;

/// Trait for the ordered list of outgoing edges stored per slot.
///
/// Edges are kept in insertion order and identified by their destination only;
/// implementations never hold two edges with the same destination because
/// [`DiGraph`] checks before pushing.
pub trait EdgeList: Default + Clone {
    /// Returns the edges as a slice in insertion order
    fn as_slice(&self) -> &[WeightedEdge];

    /// Returns the number of edges in the list
    fn num_of_edges(&self) -> NumVertices {
        self.as_slice().len() as NumVertices
    }

    /// Returns the edge pointing to `dest` if it exists
    fn find(&self, dest: Slot) -> Option<&WeightedEdge> {
        self.as_slice().iter().find(|e| e.points_to(dest))
    }

    /// Returns a mutable reference to the edge pointing to `dest` if it exists
    fn find_mut(&mut self, dest: Slot) -> Option<&mut WeightedEdge>;

    /// Appends an edge without checking for an existing edge to the same destination
    fn push(&mut self, edge: WeightedEdge);

    /// Removes the edge pointing to `dest` while keeping the order of the remaining edges.
    /// Returns the removed edge if it existed.
    fn try_remove(&mut self, dest: Slot) -> Option<WeightedEdge>;

    /// Removes all edges
    fn clear(&mut self);
}

macro_rules! impl_edge_list_body {
    () => {
        fn as_slice(&self) -> &[WeightedEdge] {
            &self[..]
        }

        fn find_mut(&mut self, dest: Slot) -> Option<&mut WeightedEdge> {
            self.iter_mut().find(|e| e.points_to(dest))
        }

        fn push(&mut self, edge: WeightedEdge) {
            // inherent `push`
            Self::push(self, edge);
        }

        fn try_remove(&mut self, dest: Slot) -> Option<WeightedEdge> {
            let pos = self.iter().position(|e| e.points_to(dest))?;
            Some(self.remove(pos))
        }

        fn clear(&mut self) {
            Self::clear(self);
        }
    };
}

/// Plain heap-allocated edge list
pub type ArrEdges = Vec<WeightedEdge>;

/// Edge list storing up to four edges inline.
/// Prefer this if most vertices have a small out-degree.
pub type SparseEdges = SmallVec<[WeightedEdge; 4]>;

impl EdgeList for Vec<WeightedEdge> {
    impl_edge_list_body!();
}

impl<A> EdgeList for SmallVec<A>
where
    A: Array<Item = WeightedEdge>,
{
    impl_edge_list_body!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<L: EdgeList>() {
        let mut list = L::default();
        for (dest, weight) in [(3, 30), (1, 10), (7, 70), (2, 20), (5, 50)] {
            list.push(WeightedEdge::new(dest, weight));
        }
        assert_eq!(list.num_of_edges(), 5);
        assert_eq!(list.find(7).map(|e| e.weight), Some(70));
        assert!(list.find(4).is_none());

        list.find_mut(1).unwrap().weight = 11;
        assert_eq!(list.find(1).map(|e| e.weight), Some(11));

        assert_eq!(list.try_remove(7).map(|e| e.weight), Some(70));
        assert!(list.try_remove(7).is_none());
        let order: Vec<Slot> = list.as_slice().iter().map(|e| e.dest).collect();
        assert_eq!(order, vec![3, 1, 2, 5]);

        list.clear();
        assert_eq!(list.num_of_edges(), 0);
    }

    #[test]
    fn vec_edges() {
        exercise::<ArrEdges>();
    }

    #[test]
    fn sparse_edges() {
        exercise::<SparseEdges>();
    }
}

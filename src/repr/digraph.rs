/*!
# Directed Weighted Graph

[`DiGraph`] composes a [`SlotStore`] with one [`EdgeList`] per slot, an in-degree
counter per slot and a global edge counter.

## Invariants
After every public operation:
- `number_of_edges` equals the summed length of all edge lists,
- `in_degree_of(v)` equals the number of edges with destination `v`,
- no edge list contains two edges to the same destination and there are no self-loops,
- free slots have empty edge lists and an in-degree of `0`.

Removing a vertex costs `O(V + E)` as incoming edges are found by scanning every
edge list; no reverse adjacency is stored.
*/

use std::fmt;

use tracing::{debug, trace};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph with weighted edges and vertices identified by keys of type `K`.
///
/// # Type parameters
/// - `K`: external vertex identity
/// - `L`: [`EdgeList`] implementation storing the outgoing edges of a slot
#[derive(Clone, Debug)]
pub struct DiGraph<K, L = SparseEdges> {
    slots: SlotStore<K>,
    edges: Vec<L>,
    in_degrees: Vec<NumVertices>,
    num_edges: NumEdges,
}

/// Directed graph storing outgoing edges in `Vec<WeightedEdge>`
pub type ArrDiGraph<K> = DiGraph<K, ArrEdges>;

/// Directed graph storing outgoing edges in `SmallVec<[WeightedEdge; 4]>`
pub type SparseDiGraph<K> = DiGraph<K, SparseEdges>;

impl<K, L> DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    /// Creates an empty graph with room for `n` vertices before reallocating
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: SlotStore::new(),
            edges: Vec::with_capacity(n),
            in_degrees: Vec::with_capacity(n),
            num_edges: 0,
        }
    }

    /// Returns the slots freed by vertex removal that will be reused next (top last)
    pub fn free_slots(&self) -> &[Slot] {
        self.slots.available()
    }

    /// Runs the removal fixup on `v` and frees its slot.
    /// Returns the number of dropped incoming and outgoing edges.
    pub(crate) fn detach_and_release(&mut self, v: Slot) -> (NumEdges, NumEdges) {
        let mut incoming = 0;
        for u in self.slots.occupied() {
            if self.edges[idx(u)].try_remove(v).is_some() {
                incoming += 1;
            }
        }
        debug_assert_eq!(incoming, self.in_degrees[idx(v)]);

        let outgoing = std::mem::take(&mut self.edges[idx(v)]);
        for e in outgoing.as_slice() {
            self.in_degrees[idx(e.dest)] -= 1;
        }
        let outgoing = outgoing.num_of_edges() as NumEdges;

        self.num_edges -= incoming as NumEdges + outgoing;
        self.in_degrees[idx(v)] = 0;

        // `key_of` would borrow `self` across `release`
        let key = self.slots.key(v).cloned();
        if let Some(key) = key {
            self.slots.release(&key);
        }

        debug!(
            slot = v,
            incoming,
            outgoing,
            edges_left = self.num_edges,
            "removed vertex"
        );
        (incoming as NumEdges, outgoing)
    }

    /// Resolves both endpoints of an edge operation
    fn try_endpoints(&self, u: &K, v: &K) -> Result<(Slot, Slot)> {
        Ok((self.try_slot_of(u)?, self.try_slot_of(v)?))
    }
}

impl<K, L> Default for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, L> GraphNew for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn new() -> Self {
        Self::default()
    }
}

impl<K, L> GraphVertexOrder for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    type Key = K;

    fn number_of_vertices(&self) -> NumVertices {
        self.slots.len()
    }

    fn slot_capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.occupied()
    }

    fn slot_of(&self, key: &K) -> Option<Slot> {
        self.slots.get(key)
    }

    fn is_occupied(&self, slot: Slot) -> bool {
        self.slots.is_occupied(slot)
    }

    fn key_of(&self, slot: Slot) -> &K {
        match self.slots.key(slot) {
            Some(key) => key,
            None => panic!("slot {slot} is not occupied"),
        }
    }
}

impl<K, L> GraphEdgeOrder for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<K, L> WeightedAdjacencyList for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn out_edges_of(&self, u: Slot) -> &[WeightedEdge] {
        self.edges[idx(u)].as_slice()
    }

    fn in_degree_of(&self, u: Slot) -> NumVertices {
        self.in_degrees[idx(u)]
    }

    fn out_degree_of(&self, u: Slot) -> NumVertices {
        self.edges[idx(u)].num_of_edges()
    }
}

impl<K, L> GraphVertexEditing for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn add_vertex(&mut self, key: K) -> bool {
        let Some((slot, reused)) = self.slots.insert(key) else {
            return false;
        };

        if reused {
            self.edges[idx(slot)].clear();
            self.in_degrees[idx(slot)] = 0;
        } else {
            self.edges.push(L::default());
            self.in_degrees.push(0);
        }

        trace!(slot, reused, "added vertex");
        true
    }

    fn remove_vertex(&mut self, key: &K) -> bool {
        match self.slot_of(key) {
            Some(v) => {
                self.detach_and_release(v);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.edges.clear();
        self.in_degrees.clear();
        self.num_edges = 0;
    }
}

impl<K, L> GraphEdgeEditing for DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    fn add_edge(&mut self, u: &K, v: &K, w: Weight) -> Result<bool> {
        let (us, vs) = self.try_endpoints(u, v)?;
        if us == vs {
            return Err(GraphError::self_loop(u));
        }

        let list = &mut self.edges[idx(us)];
        if list.find(vs).is_some() {
            return Ok(false);
        }

        list.push(WeightedEdge::new(vs, w));
        self.in_degrees[idx(vs)] += 1;
        self.num_edges += 1;

        trace!(from = us, to = vs, weight = w, "added edge");
        Ok(true)
    }

    fn remove_edge(&mut self, u: &K, v: &K) -> Result<bool> {
        let (us, vs) = self.try_endpoints(u, v)?;
        if self.edges[idx(us)].try_remove(vs).is_none() {
            return Ok(false);
        }

        self.in_degrees[idx(vs)] -= 1;
        self.num_edges -= 1;

        trace!(from = us, to = vs, "removed edge");
        Ok(true)
    }

    fn set_weight(&mut self, u: &K, v: &K, w: Weight) -> Result<Weight> {
        let (us, vs) = self.try_endpoints(u, v)?;
        Ok(self.edges[idx(us)]
            .find_mut(vs)
            .map_or(NO_EDGE, |e| std::mem::replace(&mut e.weight, w)))
    }
}

/// Lists vertices sorted by key, each with its degrees and outgoing edges
impl<K, L> fmt::Display for DiGraph<K, L>
where
    K: VertexKey + fmt::Display + Ord,
    L: EdgeList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<Slot> = self.slots().collect();
        slots.sort_unstable_by(|&a, &b| self.key_of(a).cmp(self.key_of(b)));

        for u in slots {
            writeln!(
                f,
                "{}:  in-degree {}  out-degree {}",
                self.key_of(u),
                self.in_degree_of(u),
                self.out_degree_of(u)
            )?;
            write!(f, "    Edges: ")?;
            for e in self.out_edges_of(u) {
                write!(f, "{}({})  ", self.key_of(e.dest), e.weight)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(test_arr_digraph, ArrDiGraph<u32>);
test_graph_ops!(test_sparse_digraph, SparseDiGraph<u32>);

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> SparseDiGraph<&'static str> {
        SparseDiGraph::from_weighted_edges(
            ["A", "B", "C"],
            [("A", "B", 4), ("B", "C", 2), ("A", "C", 7), ("C", "A", 1)],
        )
        .unwrap()
    }

    #[test]
    fn edge_errors_leave_graph_untouched() {
        let mut g = abc();

        assert!(matches!(
            g.add_edge(&"A", &"Z", 1),
            Err(GraphError::InvalidVertex(_))
        ));
        assert!(matches!(
            g.add_edge(&"B", &"B", 1),
            Err(GraphError::SelfLoopRejected(_))
        ));
        assert!(matches!(
            g.remove_edge(&"Z", &"A"),
            Err(GraphError::InvalidVertex(_))
        ));
        assert!(g.weight(&"A", &"Z").is_err());
        assert!(g.in_degree(&"Z").is_err());

        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.in_degree(&"C").unwrap(), 2);
    }

    #[test]
    fn duplicate_edge_is_ignored() {
        let mut g = abc();
        assert!(!g.add_edge(&"A", &"B", 99).unwrap());
        assert_eq!(g.weight(&"A", &"B").unwrap(), 4);
        assert_eq!(g.number_of_edges(), 4);
    }

    #[test]
    fn weights_and_sentinel() {
        let mut g = abc();
        assert_eq!(g.weight(&"B", &"A").unwrap(), NO_EDGE);
        assert_eq!(g.set_weight(&"B", &"A", 3).unwrap(), NO_EDGE);
        assert!(!g.contains_edge(&"B", &"A").unwrap());

        assert_eq!(g.set_weight(&"A", &"C", 3).unwrap(), 7);
        assert_eq!(g.weight(&"A", &"C").unwrap(), 3);
    }

    #[test]
    fn remove_vertex_runs_fixup() {
        let mut g = abc();
        let (in_deg, out_deg) = (g.in_degree(&"C").unwrap(), g.out_degree(&"C").unwrap());

        assert!(g.remove_vertex(&"C"));
        assert!(!g.remove_vertex(&"C"));

        assert_eq!(g.number_of_edges(), 4 - (in_deg + out_deg) as NumEdges);
        assert_eq!(g.in_degree(&"A").unwrap(), 0);
        assert_eq!(g.out_degree(&"A").unwrap(), 1);
        assert!(g.weighted_edges().all(|(u, v, _)| *u != "C" && *v != "C"));
        assert_eq!(g.free_slots(), &[2]);

        assert!(g.add_vertex("D"));
        assert_eq!(g.slot_of(&"D"), Some(2));
        assert_eq!(g.out_degree(&"D").unwrap(), 0);
        assert_eq!(g.in_degree(&"D").unwrap(), 0);
        assert!(g.free_slots().is_empty());
    }

    #[test]
    fn neighbors_as_set() {
        let g = abc();
        let nbs = g.neighbors(&"A").unwrap();
        assert_eq!(nbs.len(), 2);
        assert!(nbs.contains(&"B") && nbs.contains(&"C"));
        assert!(g.neighbors(&"Q").is_err());
    }

    #[test]
    fn clear_empties_everything() {
        let mut g = abc();
        g.remove_vertex(&"A");
        g.clear();

        assert!(g.is_empty());
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.slot_capacity(), 0);
        assert!(g.free_slots().is_empty());
    }

    #[test]
    fn display_sorts_by_key() {
        let g = abc();
        let expected = "A:  in-degree 1  out-degree 2\n    Edges: B(4)  C(7)  \n\
                        B:  in-degree 1  out-degree 1\n    Edges: C(2)  \n\
                        C:  in-degree 2  out-degree 1\n    Edges: A(1)  \n";
        assert_eq!(g.to_string(), expected);
    }
}

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashSet;

use crate::{edge::*, error::*, slot::*};

/// Requirements on vertex keys: they are cloned into results, hashed into the
/// key-to-slot map and rendered with `Debug` into error messages.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<K> VertexKey for K where K: Clone + Eq + Hash + Debug {}

/// Provides getters pertaining to the vertex-size of a graph and the mapping
/// between vertex keys and slots
pub trait GraphVertexOrder {
    /// Type of the external vertex identity
    type Key: VertexKey;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns the number of slots in the backing storage, including freed slots.
    /// Every occupied slot is smaller than this value.
    fn slot_capacity(&self) -> usize;

    /// Returns an iterator over all occupied slots in ascending order
    fn slots(&self) -> impl Iterator<Item = Slot> + '_;

    /// Returns the slot of a vertex or `None` if the key is not in the graph
    fn slot_of(&self, key: &Self::Key) -> Option<Slot>;

    /// Returns *true* if `slot` currently holds a vertex
    fn is_occupied(&self, slot: Slot) -> bool;

    /// Returns the key stored in an occupied slot.
    /// ** Panics if the slot is not occupied **
    fn key_of(&self, slot: Slot) -> &Self::Key;

    /// Returns the slot of a vertex or [`GraphError::InvalidVertex`]
    fn try_slot_of(&self, key: &Self::Key) -> Result<Slot> {
        self.slot_of(key)
            .ok_or_else(|| GraphError::invalid_vertex(key))
    }

    /// Returns *true* if the key is a vertex of the graph
    fn contains_vertex(&self, key: &Self::Key) -> bool {
        self.slot_of(key).is_some()
    }

    /// Returns an iterator over all vertex keys in slot order
    fn vertices(&self) -> impl Iterator<Item = &Self::Key> + '_ {
        self.slots().map(|s| self.key_of(s))
    }

    /// Clones the keys of the given (occupied) slots
    fn keys_of<I>(&self, slots: I) -> Vec<Self::Key>
    where
        I: IntoIterator<Item = Slot>,
    {
        slots.into_iter().map(|s| self.key_of(s).clone()).collect()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Getters for weighted adjacency lists, both on slot-level (used by algorithms)
/// and on key-level (checked against absent vertices)
pub trait WeightedAdjacencyList: GraphVertexOrder + GraphEdgeOrder {
    /// Returns the outgoing edges of a slot in insertion order.
    /// Freed slots have no edges.
    /// ** Panics if `u >= slot_capacity` **
    fn out_edges_of(&self, u: Slot) -> &[WeightedEdge];

    /// Returns the number of edges ending in `u`
    /// ** Panics if `u >= slot_capacity` **
    fn in_degree_of(&self, u: Slot) -> NumVertices;

    /// Returns the number of edges starting in `u`
    /// ** Panics if `u >= slot_capacity` **
    fn out_degree_of(&self, u: Slot) -> NumVertices {
        self.out_edges_of(u).len() as NumVertices
    }

    /// Returns an iterator over the destination slots of `u`
    /// ** Panics if `u >= slot_capacity` **
    fn neighbors_of(&self, u: Slot) -> impl Iterator<Item = Slot> + '_ {
        self.out_edges_of(u).iter().map(|e| e.dest)
    }

    /// Returns the edge `(u, v)` if it exists
    /// ** Panics if `u >= slot_capacity` **
    fn edge_between(&self, u: Slot, v: Slot) -> Option<&WeightedEdge> {
        self.out_edges_of(u).iter().find(|e| e.points_to(v))
    }

    /// Returns an iterator over all edges as `(source, edge)`
    fn edges(&self) -> impl Iterator<Item = (Slot, WeightedEdge)> + '_ {
        self.slots()
            .flat_map(move |u| self.out_edges_of(u).iter().map(move |e| (u, *e)))
    }

    /// Returns an iterator over all edges as `(source key, destination key, weight)`
    fn weighted_edges(&self) -> impl Iterator<Item = (&Self::Key, &Self::Key, Weight)> + '_ {
        self.edges()
            .map(|(u, e)| (self.key_of(u), self.key_of(e.dest), e.weight))
    }

    /// Returns the in-degree of a vertex
    fn in_degree(&self, key: &Self::Key) -> Result<NumVertices> {
        Ok(self.in_degree_of(self.try_slot_of(key)?))
    }

    /// Returns the out-degree of a vertex
    fn out_degree(&self, key: &Self::Key) -> Result<NumVertices> {
        Ok(self.out_degree_of(self.try_slot_of(key)?))
    }

    /// Returns the set of vertices adjacent to a vertex
    fn neighbors(&self, key: &Self::Key) -> Result<FxHashSet<Self::Key>> {
        let u = self.try_slot_of(key)?;
        Ok(self
            .neighbors_of(u)
            .map(|v| self.key_of(v).clone())
            .collect())
    }

    /// Returns *true* if the edge `(u, v)` exists
    fn contains_edge(&self, u: &Self::Key, v: &Self::Key) -> Result<bool> {
        let (u, v) = (self.try_slot_of(u)?, self.try_slot_of(v)?);
        Ok(self.edge_between(u, v).is_some())
    }

    /// Returns the weight of the edge `(u, v)` or [`NO_EDGE`] if it does not exist
    fn weight(&self, u: &Self::Key, v: &Self::Key) -> Result<Weight> {
        let (u, v) = (self.try_slot_of(u)?, self.try_slot_of(v)?);
        Ok(self.edge_between(u, v).map_or(NO_EDGE, |e| e.weight))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph without vertices
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphVertexOrder {
    /// Adds a vertex. Returns *false* (without changes) if the key is already present.
    /// Freed slots are reused before the storage grows.
    fn add_vertex(&mut self, key: Self::Key) -> bool;

    /// Adds all vertices in the collection and returns how many were new
    fn add_vertices<I>(&mut self, keys: I) -> NumVertices
    where
        I: IntoIterator<Item = Self::Key>,
    {
        keys.into_iter()
            .map(|k| self.add_vertex(k) as NumVertices)
            .sum()
    }

    /// Removes a vertex together with all edges into and out of it.
    /// Returns *false* if the key was not present.
    fn remove_vertex(&mut self, key: &Self::Key) -> bool;

    /// Removes all vertices and edges and forgets all freed slots
    fn clear(&mut self);
}

/// Provides functions to insert/delete/reweigh edges
pub trait GraphEdgeEditing: GraphVertexEditing + WeightedAdjacencyList {
    /// Adds the edge `(u, v)` with weight `w`.
    /// Returns *false* (without changes) if the edge already exists.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if an endpoint is absent and
    /// [`GraphError::SelfLoopRejected`] if `u == v`.
    fn add_edge(&mut self, u: &Self::Key, v: &Self::Key, w: Weight) -> Result<bool>;

    /// Adds all edges in the collection and returns how many were new
    fn add_edges<I>(&mut self, edges: I) -> Result<NumEdges>
    where
        I: IntoIterator<Item = (Self::Key, Self::Key, Weight)>,
    {
        let mut added = 0;
        for (u, v, w) in edges {
            added += self.add_edge(&u, &v, w)? as NumEdges;
        }
        Ok(added)
    }

    /// Removes the edge `(u, v)`. Returns *false* if it did not exist.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if an endpoint is absent.
    fn remove_edge(&mut self, u: &Self::Key, v: &Self::Key) -> Result<bool>;

    /// Updates the weight of the edge `(u, v)` and returns the previous weight,
    /// or returns [`NO_EDGE`] without changes if the edge does not exist.
    ///
    /// # Errors
    /// [`GraphError::InvalidVertex`] if an endpoint is absent.
    fn set_weight(&mut self, u: &Self::Key, v: &Self::Key, w: Weight) -> Result<Weight>;
}

/// A super trait for creating a graph from scratch from vertices and weighted edges
pub trait GraphFromScratch: Sized + GraphVertexOrder {
    /// Create a graph from vertex keys and `(source, destination, weight)` triples
    fn from_weighted_edges<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Self::Key>,
        E: IntoIterator<Item = (Self::Key, Self::Key, Weight)>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_weighted_edges<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Self::Key>,
        E: IntoIterator<Item = (Self::Key, Self::Key, Weight)>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

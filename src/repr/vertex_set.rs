/*!
# Vertex-Set Views

[`VertexSet`] is a read-only view over the keys of a graph, [`VertexSetMut`] a live
view that can remove vertices. Every removal through the mutable view runs the same
fixup as [`GraphVertexEditing::remove_vertex`], so no edge is left pointing into a
freed slot.
*/

use super::*;

/// Read-only view over the vertex keys of a graph
pub struct VertexSet<'a, G> {
    graph: &'a G,
}

impl<'a, G: GraphVertexOrder> VertexSet<'a, G> {
    /// Number of vertices in the view
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns *true* if the view is empty
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns *true* if `key` is in the view
    pub fn contains(&self, key: &G::Key) -> bool {
        self.graph.contains_vertex(key)
    }

    /// Iterates over all keys in slot order
    pub fn iter(&self) -> impl Iterator<Item = &'a G::Key> + 'a {
        let graph = self.graph;
        graph.vertices()
    }
}

/// Mutable view over the vertex keys of a [`DiGraph`]
pub struct VertexSetMut<'a, K, L> {
    graph: &'a mut DiGraph<K, L>,
}

impl<'a, K, L> VertexSetMut<'a, K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    /// Number of vertices in the view
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns *true* if the view is empty
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns *true* if `key` is in the view
    pub fn contains(&self, key: &K) -> bool {
        self.graph.contains_vertex(key)
    }

    /// Iterates over all keys in slot order
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.graph.vertices()
    }

    /// Removes `key` and all edges at it. Returns *false* if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.graph.remove_vertex(key)
    }

    /// Removes every vertex for which `keep` returns *false* and returns how many were removed
    pub fn retain<F>(&mut self, mut keep: F) -> NumVertices
    where
        F: FnMut(&K) -> bool,
    {
        let doomed: Vec<Slot> = self
            .graph
            .slots()
            .filter(|&s| !keep(self.graph.key_of(s)))
            .collect();

        for &s in &doomed {
            self.graph.detach_and_release(s);
        }
        doomed.len() as NumVertices
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Returns a cursor that walks the vertices in slot order and can remove the
    /// vertex it currently points at
    pub fn cursor(&mut self) -> VertexCursor<'_, K, L> {
        VertexCursor {
            graph: self.graph,
            next: 0,
            current: None,
        }
    }
}

/// Cursor over the vertices of a [`DiGraph`] with removal of the current vertex
pub struct VertexCursor<'a, K, L> {
    graph: &'a mut DiGraph<K, L>,
    next: usize,
    current: Option<Slot>,
}

impl<K, L> VertexCursor<'_, K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    /// Moves to the next vertex and returns its key, or `None` once all vertices were visited
    pub fn next_vertex(&mut self) -> Option<&K> {
        self.current = None;
        while self.next < self.graph.slot_capacity() {
            let s = self.next as Slot;
            self.next += 1;
            if self.graph.is_occupied(s) {
                self.current = Some(s);
                return Some(self.graph.key_of(s));
            }
        }
        None
    }

    /// Removes the current vertex together with all edges at it.
    ///
    /// # Errors
    /// [`GraphError::NoCurrentVertex`] if `next_vertex` was not called, returned `None`,
    /// or the current vertex was already removed.
    pub fn remove_current(&mut self) -> Result<()> {
        let s = self.current.take().ok_or(GraphError::NoCurrentVertex)?;
        self.graph.detach_and_release(s);
        Ok(())
    }
}

impl<K, L> DiGraph<K, L>
where
    K: VertexKey,
    L: EdgeList,
{
    /// Returns a read-only view over the vertex keys
    pub fn vertex_set(&self) -> VertexSet<'_, Self> {
        VertexSet { graph: self }
    }

    /// Returns a live view over the vertex keys that can remove vertices
    pub fn vertex_set_mut(&mut self) -> VertexSetMut<'_, K, L> {
        VertexSetMut { graph: self }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn ring(n: u32) -> ArrDiGraph<u32> {
        ArrDiGraph::from_weighted_edges(0..n, (0..n).map(|u| (u, (u + 1) % n, 1))).unwrap()
    }

    #[test]
    fn read_only_view() {
        let g = ring(5);
        let view = g.vertex_set();
        assert_eq!(view.len(), 5);
        assert!(view.contains(&3));
        assert!(!view.contains(&5));
        assert_eq!(view.iter().copied().collect_vec(), (0..5).collect_vec());
    }

    #[test]
    fn cursor_removal_runs_fixup() {
        let mut g = ring(6);
        {
            let mut set = g.vertex_set_mut();
            let mut cursor = set.cursor();
            assert!(matches!(
                cursor.remove_current(),
                Err(GraphError::NoCurrentVertex)
            ));

            while let Some(&key) = cursor.next_vertex() {
                if key % 2 == 0 {
                    cursor.remove_current().unwrap();
                    assert!(matches!(
                        cursor.remove_current(),
                        Err(GraphError::NoCurrentVertex)
                    ));
                }
            }
        }

        assert_eq!(g.vertices().copied().collect_vec(), vec![1, 3, 5]);
        assert_eq!(g.number_of_edges(), 0);
        for v in [1, 3, 5] {
            assert_eq!(g.in_degree(&v).unwrap(), 0);
            assert_eq!(g.out_degree(&v).unwrap(), 0);
        }
    }

    #[test]
    fn retain_and_remove() {
        let mut g = ring(6);
        let mut set = g.vertex_set_mut();

        assert_eq!(set.retain(|&k| k < 4), 2);
        assert!(set.remove(&0));
        assert!(!set.remove(&0));
        assert_eq!(set.len(), 3);

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.in_degree(&1).unwrap(), 0);
        assert_eq!(g.in_degree(&3).unwrap(), 1);

        g.vertex_set_mut().clear();
        assert!(g.is_empty());
    }
}

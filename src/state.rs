/*!
# Algorithm Scratch State

Every algorithm in [`crate::algo`] works on three scratch fields per vertex: a [`Color`],
a parent and a numeric data value (hop count, distance or connecting edge weight).
These fields live in an [`AlgoState`] indexed by [`Slot`], separate from the graph, so that
independent algorithm runs over the same graph never share state.

Resets are explicit: [`AlgoState::color_white`] and [`AlgoState::init_data`] prepare the
state for the next run. Every algorithm calls the resets it relies on at entry.
*/

use crate::{ops::*, *};

/// Visit state of a vertex during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet
    #[default]
    White,
    /// Discovered and on the frontier/search path
    Gray,
    /// Finished
    Black,
}

/// Per-slot scratch fields shared by the algorithms of a single run
#[derive(Debug, Clone, Default)]
pub struct AlgoState {
    colors: Vec<Color>,
    parents: Vec<Option<OptionalSlot>>,
    data: Vec<Weight>,
}

impl AlgoState {
    /// Creates an empty state; it grows on demand to the slot capacity of a graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state sized for `graph`
    pub fn for_graph<G: GraphVertexOrder>(graph: &G) -> Self {
        let mut state = Self::new();
        state.fit(graph);
        state
    }

    /// Grows the state to cover every slot of `graph`. New entries are white,
    /// parentless and hold [`INFINITY`].
    pub fn fit<G: GraphVertexOrder>(&mut self, graph: &G) {
        let n = graph.slot_capacity();
        if self.colors.len() < n {
            self.colors.resize(n, Color::White);
            self.parents.resize(n, None);
            self.data.resize(n, INFINITY);
        }
    }

    /// Colors every vertex of `graph` white
    pub fn color_white<G: GraphVertexOrder>(&mut self, graph: &G) {
        self.fit(graph);
        for u in graph.slots() {
            self.colors[idx(u)] = Color::White;
        }
    }

    /// Sets the data value of every vertex of `graph` to [`INFINITY`]
    pub fn init_data<G: GraphVertexOrder>(&mut self, graph: &G) {
        self.fit(graph);
        for u in graph.slots() {
            self.data[idx(u)] = INFINITY;
        }
    }

    /// Forgets the parent of every vertex of `graph`
    pub fn clear_parents<G: GraphVertexOrder>(&mut self, graph: &G) {
        self.fit(graph);
        for u in graph.slots() {
            self.parents[idx(u)] = None;
        }
    }

    /// Returns the color of slot `u`
    /// ** Panics if the state was not fitted to cover `u` **
    #[inline]
    pub fn color_of(&self, u: Slot) -> Color {
        self.colors[idx(u)]
    }

    /// Sets the color of slot `u`
    #[inline]
    pub fn set_color_of(&mut self, u: Slot, color: Color) {
        self.colors[idx(u)] = color;
    }

    /// Returns *true* if slot `u` is white
    #[inline]
    pub fn is_white(&self, u: Slot) -> bool {
        self.colors[idx(u)] == Color::White
    }

    /// Returns the parent slot of `u` if one was recorded
    #[inline]
    pub fn parent_of(&self, u: Slot) -> Option<Slot> {
        self.parents[idx(u)].map(|p| p.get())
    }

    /// Records `p` as parent of slot `u`
    #[inline]
    pub fn set_parent_of(&mut self, u: Slot, p: Slot) {
        self.parents[idx(u)] = OptionalSlot::new(p);
    }

    /// Returns the data value of slot `u`
    #[inline]
    pub fn data_of(&self, u: Slot) -> Weight {
        self.data[idx(u)]
    }

    /// Sets the data value of slot `u`
    #[inline]
    pub fn set_data_of(&mut self, u: Slot, value: Weight) {
        self.data[idx(u)] = value;
    }

    /// Returns the color of vertex `key`
    pub fn color<G: GraphVertexOrder>(&self, graph: &G, key: &G::Key) -> Result<Color> {
        let u = graph.try_slot_of(key)?;
        Ok(self.colors.get(idx(u)).copied().unwrap_or_default())
    }

    /// Sets the color of vertex `key` and returns the previous color
    pub fn set_color<G: GraphVertexOrder>(
        &mut self,
        graph: &G,
        key: &G::Key,
        color: Color,
    ) -> Result<Color> {
        let u = graph.try_slot_of(key)?;
        self.fit(graph);
        Ok(std::mem::replace(&mut self.colors[idx(u)], color))
    }

    /// Returns the parent of vertex `key` if one was recorded
    pub fn parent<'a, G: GraphVertexOrder>(
        &self,
        graph: &'a G,
        key: &G::Key,
    ) -> Result<Option<&'a G::Key>> {
        let u = graph.try_slot_of(key)?;
        Ok(self
            .parents
            .get(idx(u))
            .copied()
            .flatten()
            .map(|p| p.get())
            .filter(|&p| graph.is_occupied(p))
            .map(|p| graph.key_of(p)))
    }

    /// Sets the parent of vertex `key` to `parent` and returns the previous parent.
    /// Both vertices must be in the graph.
    pub fn set_parent<'a, G: GraphVertexOrder>(
        &mut self,
        graph: &'a G,
        key: &G::Key,
        parent: &G::Key,
    ) -> Result<Option<&'a G::Key>> {
        let p = graph.try_slot_of(parent)?;
        let previous = self.parent(graph, key)?;
        let u = graph.try_slot_of(key)?;
        self.fit(graph);
        self.set_parent_of(u, p);
        Ok(previous)
    }

    /// Returns the data value of vertex `key`
    pub fn data<G: GraphVertexOrder>(&self, graph: &G, key: &G::Key) -> Result<Weight> {
        let u = graph.try_slot_of(key)?;
        Ok(self.data.get(idx(u)).copied().unwrap_or(INFINITY))
    }

    /// Sets the data value of vertex `key` and returns the previous value
    pub fn set_data<G: GraphVertexOrder>(
        &mut self,
        graph: &G,
        key: &G::Key,
        value: Weight,
    ) -> Result<Weight> {
        let u = graph.try_slot_of(key)?;
        self.fit(graph);
        Ok(std::mem::replace(&mut self.data[idx(u)], value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    fn graph() -> SparseDiGraph<char> {
        SparseDiGraph::from_weighted_edges(['x', 'y', 'z'], [('x', 'y', 2), ('y', 'z', 3)]).unwrap()
    }

    #[test]
    fn resets_are_idempotent() {
        let g = graph();
        let mut once = AlgoState::new();
        once.set_color(&g, &'y', Color::Black).unwrap();
        once.set_data(&g, &'z', 5).unwrap();

        let mut twice = once.clone();
        once.color_white(&g);
        once.init_data(&g);
        twice.color_white(&g);
        twice.color_white(&g);
        twice.init_data(&g);
        twice.init_data(&g);

        for key in ['x', 'y', 'z'] {
            assert_eq!(once.color(&g, &key).unwrap(), Color::White);
            assert_eq!(twice.color(&g, &key).unwrap(), Color::White);
            assert_eq!(once.data(&g, &key).unwrap(), INFINITY);
            assert_eq!(twice.data(&g, &key).unwrap(), INFINITY);
        }
    }

    #[test]
    fn setters_return_previous_values() {
        let g = graph();
        let mut state = AlgoState::for_graph(&g);

        assert_eq!(state.set_color(&g, &'x', Color::Gray).unwrap(), Color::White);
        assert_eq!(state.set_color(&g, &'x', Color::Black).unwrap(), Color::Gray);

        assert_eq!(state.set_data(&g, &'y', 7).unwrap(), INFINITY);
        assert_eq!(state.set_data(&g, &'y', 1).unwrap(), 7);

        assert_eq!(state.set_parent(&g, &'z', &'y').unwrap(), None);
        assert_eq!(state.set_parent(&g, &'z', &'x').unwrap(), Some(&'y'));
        assert_eq!(state.parent(&g, &'z').unwrap(), Some(&'x'));
    }

    #[test]
    fn absent_keys_are_rejected() {
        let g = graph();
        let mut state = AlgoState::for_graph(&g);

        assert!(state.color(&g, &'q').is_err());
        assert!(state.set_data(&g, &'q', 1).is_err());
        assert!(matches!(
            state.set_parent(&g, &'x', &'q'),
            Err(GraphError::InvalidVertex(_))
        ));
        assert_eq!(state.parent(&g, &'x').unwrap(), None);
    }
}

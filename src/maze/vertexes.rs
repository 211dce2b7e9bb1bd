/*
vertexes.rs

Copyright 2025 Hervé Quatremain

This file is part of Coinmaze.

Coinmaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Coinmaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Coinmaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Vertexes for the rooms in the maze graph.


/// Room of the maze, as a vertex of the graph.
///
/// The vertex ID is also its index in the graph. The marker is not used by the path finder,
/// which tracks the visited rooms along the current branch only (see [`super::path::Path`]).
/// It is set by [`super::graph::Graph::mark`] and by the reachability utility
/// [`super::graph::Graph::mark_reachable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Vertex ID, from 0 to the number of vertexes minus one.
    id: usize,

    /// Visitation marker.
    visited: bool,
}

impl Vertex {
    /// Create an unmarked [`Vertex`] object.
    pub fn new(id: usize) -> Self {
        Self { id, visited: false }
    }

    /// Return the vertex ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Set or clear the marker.
    pub fn mark(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Whether the vertex is marked.
    pub fn is_marked(&self) -> bool {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_is_not_marked() {
        let v: Vertex = Vertex::new(7);
        assert_eq!(v.id(), 7);
        assert!(!v.is_marked());
    }

    #[test]
    fn mark_and_unmark() {
        let mut v: Vertex = Vertex::new(0);
        v.mark(true);
        assert!(v.is_marked());
        v.mark(false);
        assert!(!v.is_marked());
    }
}

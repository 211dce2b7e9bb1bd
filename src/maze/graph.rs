/*
graph.rs

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

//! Undirected maze graph stored as adjacency lists.
//!
//! The number of vertexes is fixed when the [`Graph`] object is created. Edges can only be
//! added: each inserted connection is stored twice, once in the adjacency list of each
//! endpoint.

use log::debug;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::slice;

use super::edges::{Edge, EdgeKind};
use super::vertexes::Vertex;

/// Type of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex index is not in the graph.
    VertexOutOfRange { index: usize, num_vertexes: usize },

    /// There is no edge between the two vertexes.
    EdgeNotFound { from: usize, to: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange {
                index,
                num_vertexes,
            } => write!(
                f,
                "vertex {index} does not exist (the graph has {num_vertexes} vertexes)"
            ),
            GraphError::EdgeNotFound { from, to } => {
                write!(f, "no edge exists between vertexes {from} and {to}")
            }
        }
    }
}

impl Error for GraphError {}

/// Represent the maze graph.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Vertexes, indexed by their ID.
    vertexes: Vec<Vertex>,

    /// For each vertex, the edges that start from it, in insertion order.
    edges: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertexes` vertexes and no edges.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            vertexes: (0..num_vertexes).map(Vertex::new).collect(),
            edges: vec![Vec::new(); num_vertexes],
        }
    }

    /// Number of vertexes.
    pub fn num_vertexes(&self) -> usize {
        self.vertexes.len()
    }

    /// Number of undirected connections (each one is stored as two directed edges).
    pub fn num_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Connect the vertexes `u` and `v`.
    ///
    /// Two directed edges are stored, `u` to `v` and `v` to `u`, with the same cost and kind.
    /// Connecting two vertexes that are already connected adds another pair of edges.
    ///
    /// # Errors
    ///
    /// The method returns an error if `u` or `v` is not a vertex of the graph. In that case the
    /// graph is not modified.
    pub fn insert_edge(
        &mut self,
        u: usize,
        v: usize,
        cost: u32,
        kind: EdgeKind,
    ) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let edge: Edge = Edge::new(u, v, cost, kind);
        self.edges[u].push(edge);
        self.edges[v].push(edge.reversed());
        Ok(())
    }

    /// Return the vertex with the given ID.
    pub fn get_vertex(&self, index: usize) -> Result<&Vertex, GraphError> {
        self.vertexes
            .get(index)
            .ok_or(GraphError::VertexOutOfRange {
                index,
                num_vertexes: self.vertexes.len(),
            })
    }

    /// Return an iterator over the edges that start from the vertex `u`, in insertion order.
    ///
    /// The iterator is empty for an isolated vertex. It can be cloned to walk the edges again.
    pub fn incident_edges(&self, u: usize) -> Result<slice::Iter<'_, Edge>, GraphError> {
        self.check_vertex(u)?;
        Ok(self.edges[u].iter())
    }

    /// Return the first edge from `u` to `v`.
    pub fn get_edge(&self, u: usize, v: usize) -> Result<&Edge, GraphError> {
        self.check_vertex(v)?;
        self.incident_edges(u)?
            .find(|e| e.to() == v)
            .ok_or(GraphError::EdgeNotFound { from: u, to: v })
    }

    /// Whether an edge connects the vertexes `u` and `v`, in either direction.
    pub fn are_adjacent(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        Ok(self.incident_edges(u)?.any(|e| e.to() == v)
            || self.incident_edges(v)?.any(|e| e.to() == u))
    }

    /// Set or clear the marker of the given vertex.
    pub fn mark(&mut self, index: usize, visited: bool) -> Result<(), GraphError> {
        self.check_vertex(index)?;
        self.vertexes[index].mark(visited);
        Ok(())
    }

    /// Clear the marker of all the vertexes.
    pub fn clear_marks(&mut self) {
        for v in &mut self.vertexes {
            v.mark(false);
        }
    }

    /// Mark all the vertexes that can be reached from `from`, whatever the cost of the doors.
    ///
    /// The markers of the other vertexes are cleared. Return the number of marked vertexes,
    /// including `from`.
    pub fn mark_reachable(&mut self, from: usize) -> Result<usize, GraphError> {
        self.check_vertex(from)?;
        self.clear_marks();

        let mut queue: VecDeque<usize> = VecDeque::from([from]);
        self.vertexes[from].mark(true);
        let mut count: usize = 1;

        while let Some(u) = queue.pop_front() {
            for i in 0..self.edges[u].len() {
                let v: usize = self.edges[u][i].to();
                if !self.vertexes[v].is_marked() {
                    self.vertexes[v].mark(true);
                    count += 1;
                    queue.push_back(v);
                }
            }
        }
        Ok(count)
    }

    /// Print the adjacency lists.
    pub fn debug(&self) {
        for u in 0..self.edges.len() {
            debug!("{}", self.adjacency_line(u));
        }
    }

    /// Text representation of the edges leaving a vertex: `  0 --> 1 3(door 2)`.
    fn adjacency_line(&self, u: usize) -> String {
        let mut s: String = format!("{u:>3} -->");
        for edge in &self.edges[u] {
            match edge.kind() {
                EdgeKind::Corridor => s.push_str(&format!(" {}", edge.to())),
                EdgeKind::Door => {
                    s.push_str(&format!(" {}({} {})", edge.to(), edge.kind(), edge.cost()))
                }
            }
        }
        s
    }

    fn check_vertex(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertexes.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                num_vertexes: self.vertexes.len(),
            })
        }
    }
}

/*
edges.rs

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

//! Edges between rooms in the maze graph.

use strum_macros::Display;

/// Category of an edge.
///
/// - a `Corridor` is free to cross.
/// - a `Door` needs coins to be opened. The number of coins is the cost of the edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeKind {
    Corridor,
    Door,
}

/// Directed edge from one room to another.
///
/// Edges are created in pairs by [`super::graph::Graph::insert_edge`], one for each direction,
/// and are never modified afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    from: usize,
    to: usize,

    /// Number of coins needed to open the door. Not used for corridors.
    cost: u32,

    kind: EdgeKind,
}

impl Edge {
    /// Create an [`Edge`] object.
    pub fn new(from: usize, to: usize, cost: u32, kind: EdgeKind) -> Self {
        Self {
            from,
            to,
            cost,
            kind,
        }
    }

    /// Return the same edge in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
            kind: self.kind,
        }
    }

    /// Vertex the edge starts from.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Vertex the edge leads to.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Cost as given when the edge was inserted.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Number of coins spent when going through the edge: zero for a corridor, the door cost
    /// otherwise.
    pub fn traversal_cost(&self) -> u32 {
        match self.kind {
            EdgeKind::Corridor => 0,
            EdgeKind::Door => self.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_is_free_whatever_its_cost() {
        let e: Edge = Edge::new(0, 1, 4, EdgeKind::Corridor);
        assert_eq!(e.cost(), 4);
        assert_eq!(e.traversal_cost(), 0);
    }

    #[test]
    fn door_costs_its_coins() {
        let e: Edge = Edge::new(2, 3, 6, EdgeKind::Door);
        assert_eq!(e.traversal_cost(), 6);
    }

    #[test]
    fn reversed_keeps_cost_and_kind() {
        let e: Edge = Edge::new(2, 3, 6, EdgeKind::Door).reversed();
        assert_eq!((e.from(), e.to()), (3, 2));
        assert_eq!(e.cost(), 6);
        assert_eq!(e.kind(), EdgeKind::Door);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(EdgeKind::Corridor.to_string(), "corridor");
        assert_eq!(EdgeKind::Door.to_string(), "door");
    }
}

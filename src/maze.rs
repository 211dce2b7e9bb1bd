/*
maze.rs

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

//! Build maze graphs and find paths through them.
//!
//! A maze is a grid of rooms. Two neighbor rooms are separated by a wall, a corridor, or a
//! door that needs coins to be opened.
//!
//! [`maze_parse::Maze`] objects are built from a text description, first parsed into a
//! [`grid::Grid`] object, and then converted into a [`graph::Graph`] object where the rooms are
//! the [`vertexes::Vertex`] objects and the corridors and doors are [`edges::Edge`] objects.
//!
//! [`maze_parse::Maze::solve`] returns a [`path::Path`] object from the starting room to the
//! exit, if the coins are enough to open the doors along the way.
//! The search itself is done by a [`solver::Solver`] object, which also collects some
//! statistics.

pub mod edges;
pub mod graph;
pub mod grid;
pub mod maze_parse;
pub mod path;
pub mod solver;
pub mod vertexes;

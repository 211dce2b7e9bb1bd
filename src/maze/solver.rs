/*
solver.rs

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

//! Find a path through the maze within the coin budget.
//!
//! The search is a depth-first search that follows the edges in insertion order and stops at
//! the first path that reaches the exit. Doors are only crossed when enough coins are left.
//! The rooms already on the current branch are skipped; rooms visited by abandoned branches are
//! not, because [`Path::pop`] removes them when backtracking.

use log::debug;
use std::time::Instant;

use super::graph::Graph;
use super::path::Path;

/// Search state for one room of the explicit stack used by [`Solver::solve_iterative`].
struct Frame {
    room: usize,
    coins_left: u32,

    /// Index, in the room's incident edges, of the next edge to try.
    next_edge: usize,
}

/// [`Solver`] object.
pub struct Solver<'a> {
    graph: &'a Graph,

    /// Number of coins available when leaving the starting room.
    pub coin_budget: u32,

    /// Number of rooms entered during the last search.
    pub iteration: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,

    /// Coins spent along the path found by the last search, if any.
    pub coins_spent: Option<u32>,

    /// Time when the search started. Used to compute the [`Solver::duration`].
    start: Instant,
}

impl<'a> Solver<'a> {
    /// Create the object.
    pub fn new(graph: &'a Graph, coin_budget: u32) -> Self {
        Self {
            graph,
            coin_budget,
            iteration: 0,
            duration: 0.0,
            coins_spent: None,
            start: Instant::now(),
        }
    }

    /// Find a path from `start` to `end` by using recursion.
    ///
    /// Return [`None`] if there is no path that fits the coin budget, or if `start` is not a
    /// room of the graph.
    pub fn solve(&mut self, start: usize, end: usize) -> Option<Path> {
        if !self.reset(start, end) {
            return None;
        }

        let mut path: Path = Path::new(self.graph.num_vertexes());
        let found: bool = self.find_path(start, end, &mut path, self.coin_budget);
        self.finish(if found { Some(path) } else { None })
    }

    /// Find a path from `start` to `end` by using an explicit stack instead of recursion.
    ///
    /// The rooms and the edges are tried in the same order as [`Solver::solve`], so both
    /// methods return the same path.
    pub fn solve_iterative(&mut self, start: usize, end: usize) -> Option<Path> {
        if !self.reset(start, end) {
            return None;
        }

        let graph: &Graph = self.graph;
        let mut path: Path = Path::new(graph.num_vertexes());

        self.iteration += 1;
        path.push(start);
        if start == end {
            self.coins_spent = Some(0);
            return self.finish(Some(path));
        }

        let mut stack: Vec<Frame> = vec![Frame {
            room: start,
            coins_left: self.coin_budget,
            next_edge: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let edge = graph
                .incident_edges(frame.room)
                .ok()
                .and_then(|mut edges| edges.nth(frame.next_edge));

            let Some(edge) = edge else {
                debug!("    Back: no route from room {}", frame.room);
                path.pop();
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            let next: usize = edge.to();
            if path.contains(next) {
                continue;
            }
            let cost: u32 = edge.traversal_cost();
            if frame.coins_left < cost {
                debug!(
                    "    Door {}-{next} needs {cost} coins, {} left",
                    frame.room, frame.coins_left
                );
                continue;
            }
            let coins_left: u32 = frame.coins_left - cost;

            debug!("== Going to room {next} ({coins_left} coins left)");
            self.iteration += 1;
            path.push(next);
            if next == end {
                self.coins_spent = Some(self.coin_budget - coins_left);
                return self.finish(Some(path));
            }
            stack.push(Frame {
                room: next,
                coins_left,
                next_edge: 0,
            });
        }
        self.finish(None)
    }

    /// Recursively find a path.
    ///
    /// On success, `path` holds the rooms from the starting room to the exit. On failure, the
    /// current room has been removed from `path`.
    fn find_path(
        &mut self,
        current: usize,
        end: usize,
        path: &mut Path,
        coins_left: u32,
    ) -> bool {
        debug!("== Going to room {current} ({coins_left} coins left)");
        self.iteration += 1;
        path.push(current);
        if current == end {
            self.coins_spent = Some(self.coin_budget - coins_left);
            return true;
        }

        let graph: &Graph = self.graph;
        if let Ok(edges) = graph.incident_edges(current) {
            for edge in edges {
                let next: usize = edge.to();
                if path.contains(next) {
                    continue;
                }
                let cost: u32 = edge.traversal_cost();
                if coins_left < cost {
                    debug!("    Door {current}-{next} needs {cost} coins, {coins_left} left");
                    continue;
                }
                if self.find_path(next, end, path, coins_left - cost) {
                    return true;
                }
            }
        }

        debug!("    Back: no route from room {current}");
        path.pop();
        false
    }

    /// Reset the statistics. Return `false` if the starting room is not in the graph.
    fn reset(&mut self, start: usize, end: usize) -> bool {
        self.iteration = 0;
        self.duration = 0.0;
        self.coins_spent = None;
        self.start = Instant::now();

        debug!(
            "Starting room = {}  Exit room = {}  Coins = {}",
            start, end, self.coin_budget
        );
        if let Err(e) = self.graph.get_vertex(start) {
            debug!("Cannot start the search: {e}");
            return false;
        }
        true
    }

    /// Record the duration of the search.
    fn finish(&mut self, path: Option<Path>) -> Option<Path> {
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}  Found = {}",
            self.iteration,
            self.duration,
            path.is_some()
        );
        path
    }
}

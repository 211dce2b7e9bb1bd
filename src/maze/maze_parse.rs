/*
maze_parse.rs

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

//! Build the maze graph from its text description.
//!
//! The [`Maze`] object groups the graph, the starting and exit rooms, and the number of coins
//! available to open the doors.

use log::{Level, debug, info, log_enabled};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use super::edges::EdgeKind;
use super::graph::{Graph, GraphError};
use super::grid::{CellType, Grid, RoomType};
use super::path::Path;
use super::solver::Solver;

/// Type of errors raised while building a maze.
#[derive(Debug)]
pub enum MazeError {
    /// The description file cannot be read.
    Io { path: PathBuf, source: io::Error },

    /// A header line is missing.
    MissingField(&'static str),

    /// A header line is not a number.
    InvalidNumber { field: &'static str, value: String },

    /// The width or the length is zero or too large.
    InvalidDimensions { width: usize, length: usize },

    /// A row has more characters than the width allows.
    GridTooWide {
        row: usize,
        columns: usize,
        expected: usize,
    },

    /// A row of rooms is too short to hold all its rooms.
    RowTooShort {
        row: usize,
        columns: usize,
        expected: usize,
    },

    /// The grid has more rows than the length allows.
    GridTooLong { rows: usize, expected: usize },

    /// The grid has fewer rows than the length requires.
    GridTooShort { rows: usize, expected: usize },

    /// Unknown character between two rooms.
    InvalidConnector {
        row: usize,
        column: usize,
        character: char,
    },

    /// No room is marked with `s`.
    MissingStart,

    /// No room is marked with `x`.
    MissingExit,

    /// Several rooms are marked with `s`.
    DuplicateStart { first: usize, second: usize },

    /// Several rooms are marked with `x`.
    DuplicateExit { first: usize, second: usize },

    /// A connector refers to a room that is not in the graph.
    Graph(GraphError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            MazeError::MissingField(field) => write!(f, "missing {field} line"),
            MazeError::InvalidNumber { field, value } => {
                write!(f, "invalid {field} value: {value:?}")
            }
            MazeError::InvalidDimensions { width, length } => {
                write!(f, "invalid maze dimensions: {width} x {length}")
            }
            MazeError::GridTooWide {
                row,
                columns,
                expected,
            } => write!(
                f,
                "row {row} has {columns} characters, at most {expected} expected"
            ),
            MazeError::RowTooShort {
                row,
                columns,
                expected,
            } => write!(
                f,
                "row {row} has only {columns} characters, {expected} expected to hold its rooms"
            ),
            MazeError::GridTooLong { rows, expected } => {
                write!(f, "the maze has {rows} rows, {expected} expected")
            }
            MazeError::GridTooShort { rows, expected } => {
                write!(f, "the maze has only {rows} rows, {expected} expected")
            }
            MazeError::InvalidConnector {
                row,
                column,
                character,
            } => write!(
                f,
                "unknown connector {character:?} at row {row}, column {column}"
            ),
            MazeError::MissingStart => write!(f, "no starting room (s) in the maze"),
            MazeError::MissingExit => write!(f, "no exit room (x) in the maze"),
            MazeError::DuplicateStart { first, second } => {
                write!(f, "rooms {first} and {second} are both starting rooms")
            }
            MazeError::DuplicateExit { first, second } => {
                write!(f, "rooms {first} and {second} are both exit rooms")
            }
            MazeError::Graph(e) => write!(f, "invalid connector: {e}"),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MazeError::Io { source, .. } => Some(source),
            MazeError::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for MazeError {
    fn from(e: GraphError) -> Self {
        MazeError::Graph(e)
    }
}

/// Maze object.
#[derive(Debug, Clone)]
pub struct Maze {
    graph: Graph,
    start: usize,
    end: usize,
    coin_budget: u32,

    /// Number of rooms in a row.
    width: usize,

    /// Number of rooms in a column.
    length: usize,
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        Self::from_grid(&Grid::parse(description)?)
    }
}

impl Maze {
    /// Read and parse the maze description file.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read or if its content is not a valid
    /// maze description.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, MazeError> {
        let description: String =
            fs::read_to_string(path.as_ref()).map_err(|source| MazeError::Io {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        debug!("Loading maze from {}", path.as_ref().display());
        description.parse()
    }

    /// Build the graph from a parsed description.
    ///
    /// The grid is scanned row by row. Rooms are numbered in that order. A connector between two
    /// rooms of the same row links the last numbered room and the next one. A connector between
    /// two rows links the room above and the room below, in the same column.
    pub fn from_grid(grid: &Grid) -> Result<Self, MazeError> {
        let mut graph: Graph = Graph::new(grid.width() * grid.length());
        let mut counter: usize = 0;
        let mut start: Option<usize> = None;
        let mut end: Option<usize> = None;

        for (x, y, cell) in grid.iter() {
            let (cost, kind): (u32, EdgeKind) = match cell {
                CellType::Room(room) => {
                    counter += 1;
                    let id: usize = counter - 1;
                    match room {
                        RoomType::Start => {
                            if let Some(first) = start {
                                return Err(MazeError::DuplicateStart { first, second: id });
                            }
                            start = Some(id);
                        }
                        RoomType::Exit => {
                            if let Some(first) = end {
                                return Err(MazeError::DuplicateExit { first, second: id });
                            }
                            end = Some(id);
                        }
                        RoomType::Plain => (),
                    }
                    continue;
                }
                CellType::Corridor => (0, EdgeKind::Corridor),
                CellType::Door(cost) => (cost, EdgeKind::Door),
                CellType::Wall | CellType::Filler => continue,
            };

            if y % 2 == 0 {
                // Between the room on the left and the room on the right
                graph.insert_edge(counter - 1, counter, cost, kind)?;
            } else {
                // Between the room above and the room below
                graph.insert_edge(
                    counter - grid.width() + x / 2,
                    counter + x / 2,
                    cost,
                    kind,
                )?;
            }
        }

        let start: usize = start.ok_or(MazeError::MissingStart)?;
        let end: usize = end.ok_or(MazeError::MissingExit)?;

        info!(
            "Maze: {} rooms, {} connections, start {}, exit {}, {} coins",
            graph.num_vertexes(),
            graph.num_edges(),
            start,
            end,
            grid.coin_budget()
        );
        if log_enabled!(Level::Debug) {
            graph.debug();
        }

        Ok(Self {
            graph,
            start,
            end,
            coin_budget: grid.coin_budget(),
            width: grid.width(),
            length: grid.length(),
        })
    }

    /// Return a reference to the maze graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Starting room.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exit room.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of coins available to open doors.
    pub fn coin_budget(&self) -> u32 {
        self.coin_budget
    }

    /// Number of rooms in a row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rooms in a column.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Find a path from the starting room to the exit without spending more coins than
    /// available.
    ///
    /// The returned path is the first one found by a depth-first search that follows the edges
    /// in the order they were created. It is not necessarily the shortest or the cheapest one.
    /// Return [`None`] if no such path exists.
    pub fn solve(&self) -> Option<Path> {
        Solver::new(&self.graph, self.coin_budget).solve(self.start, self.end)
    }

    /// Same as [`Maze::solve`], without recursion.
    pub fn solve_iterative(&self) -> Option<Path> {
        Solver::new(&self.graph, self.coin_budget).solve_iterative(self.start, self.end)
    }

    /// Minimum number of coins needed to follow the given path.
    ///
    /// When two rooms are connected several times, the cheapest connection is used.
    ///
    /// # Errors
    ///
    /// The method returns an error if two consecutive rooms are not connected or if a room is
    /// not in the maze.
    pub fn path_cost(&self, path: &Path) -> Result<u32, GraphError> {
        let mut total: u32 = 0;

        for step in path.get().windows(2) {
            let (u, v): (usize, usize) = (step[0], step[1]);
            // Reports the missing edge
            self.graph.get_edge(u, v)?;
            let cost: u32 = self
                .graph
                .incident_edges(u)?
                .filter(|e| e.to() == v)
                .map(|e| e.traversal_cost())
                .min()
                .unwrap_or_default();
            total = total.saturating_add(cost);
        }
        Ok(total)
    }

    /// Whether the path goes from the starting room to the exit, through connected rooms,
    /// without visiting a room twice, and within the coin budget.
    pub fn is_valid_path(&self, path: &Path) -> bool {
        if path.get_first() != Some(self.start)
            || path.get_last() != Some(self.end)
            || path.has_duplicates()
        {
            return false;
        }
        if !path
            .get()
            .windows(2)
            .all(|step| self.graph.are_adjacent(step[0], step[1]) == Ok(true))
        {
            return false;
        }
        match self.path_cost(path) {
            Ok(cost) => cost <= self.coin_budget,
            Err(_) => false,
        }
    }

    /// Number of rooms connected to the starting room, whatever the cost of the doors.
    ///
    /// The computation uses a copy of the graph, so the markers of the maze vertexes are not
    /// modified.
    pub fn reachable_rooms(&self) -> Result<usize, GraphError> {
        let mut graph: Graph = self.graph.clone();
        graph.mark_reachable(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three rooms by two, with a door on the upper right and a door going down.
    const SMALL: &str = "header
3
2
4
sco1o
wwcw4
ocxco
";

    #[test]
    fn rooms_and_edges_match_the_description() {
        let maze: Maze = SMALL.parse().unwrap();
        let g: &Graph = maze.graph();

        assert_eq!(g.num_vertexes(), maze.width() * maze.length());
        // c, 1 (row 0) + c, 4 (row 1) + c, c (row 2)
        assert_eq!(g.num_edges(), 6);
        assert_eq!((maze.start(), maze.end(), maze.coin_budget()), (0, 4, 4));

        let e = g.get_edge(1, 2).unwrap();
        assert_eq!((e.kind(), e.cost()), (EdgeKind::Door, 1));
        let e = g.get_edge(2, 5).unwrap();
        assert_eq!((e.kind(), e.cost()), (EdgeKind::Door, 4));
        assert_eq!(g.get_edge(1, 4).unwrap().kind(), EdgeKind::Corridor);
        assert!(!g.are_adjacent(0, 3).unwrap());
    }

    #[test]
    fn solve_small_maze() {
        let maze: Maze = SMALL.parse().unwrap();
        let path: Path = maze.solve().unwrap();
        assert_eq!(path.get(), &vec![0, 1, 4]);
        assert!(maze.is_valid_path(&path));
        assert_eq!(maze.path_cost(&path), Ok(0));
    }

    #[test]
    fn solve_does_not_modify_the_maze() {
        let maze: Maze = SMALL.parse().unwrap();
        let first: Option<Path> = maze.solve();
        assert_eq!(maze.solve(), first);
        assert_eq!(maze.coin_budget(), 4);
        for i in 0..maze.graph().num_vertexes() {
            assert!(!maze.graph().get_vertex(i).unwrap().is_marked());
        }
    }

    #[test]
    fn corridor_with_no_coins() {
        let maze: Maze = "h\n2\n1\n0\nscx\n".parse().unwrap();
        assert_eq!(maze.solve(), Some(Path::from_vec(&[0, 1])));
    }

    #[test]
    fn door_needs_enough_coins() {
        let maze: Maze = "h\n2\n1\n2\ns3x\n".parse().unwrap();
        assert_eq!(maze.solve(), None);
        let maze: Maze = "h\n2\n1\n3\ns3x\n".parse().unwrap();
        assert_eq!(maze.solve(), Some(Path::from_vec(&[0, 1])));
    }

    #[test]
    fn expensive_first_leg_blocks_the_only_route() {
        let maze: Maze = "h\n3\n1\n2\ns5ocx\n".parse().unwrap();
        assert_eq!(maze.solve(), None);
        assert_eq!(maze.solve_iterative(), None);
    }

    #[test]
    fn dead_end_loop_does_not_block_a_room() {
        // Rooms:
        //   0(s) 1    2
        //   3    4    5(x)
        // The search goes 0 -> 1 -> 4 -> 3, where room 0 is already in the branch. The door
        // 4-5 needs 3 coins but the door 1-4 took 1 of the 3 coins, so the branch through room 1
        // fails. The second branch, 0 -> 3 -> 4 -> 5, must still be allowed to use rooms 3 and 4.
        let maze: Maze = "h\n3\n2\n3\nscowo\ncw1ww\noco3x\n".parse().unwrap();
        let path: Path = maze.solve().unwrap();
        assert_eq!(path.get(), &vec![0, 3, 4, 5]);
        assert_eq!(maze.solve_iterative(), Some(path));
    }

    #[test]
    fn isolated_exit() {
        let maze: Maze = "h\n2\n2\n9\nswo\nc\nowx\n".parse().unwrap();
        assert_eq!(maze.solve(), None);
        assert_eq!(maze.reachable_rooms(), Ok(2));
    }

    #[test]
    fn parallel_door_is_tried_after_an_expensive_one() {
        let mut maze: Maze = "h\n2\n1\n1\nswx\n".parse().unwrap();
        maze.graph.insert_edge(0, 1, 5, EdgeKind::Door).unwrap();
        assert_eq!(maze.solve(), None);
        maze.graph.insert_edge(0, 1, 1, EdgeKind::Door).unwrap();
        let path: Path = maze.solve().unwrap();
        assert_eq!(maze.path_cost(&path), Ok(1));
        assert!(maze.is_valid_path(&path));
    }

    #[test]
    fn invalid_paths() {
        let maze: Maze = SMALL.parse().unwrap();
        assert!(!maze.is_valid_path(&Path::from_vec(&[0, 4])));
        assert!(!maze.is_valid_path(&Path::from_vec(&[1, 4])));
        assert!(!maze.is_valid_path(&Path::from_vec(&[0, 1, 0, 1, 4])));
        // 0 -> 1 -> 2 -> 5 -> 4 costs 5 coins
        assert!(!maze.is_valid_path(&Path::from_vec(&[0, 1, 2, 5, 4])));
        assert_eq!(
            maze.path_cost(&Path::from_vec(&[0, 1, 2, 5, 4])),
            Ok(5)
        );
        assert_eq!(
            maze.path_cost(&Path::from_vec(&[0, 3])),
            Err(GraphError::EdgeNotFound { from: 0, to: 3 })
        );
    }

    #[test]
    fn missing_or_duplicate_markers() {
        assert!(matches!(
            "h\n2\n1\n0\nocx\n".parse::<Maze>(),
            Err(MazeError::MissingStart)
        ));
        assert!(matches!(
            "h\n2\n1\n0\nsco\n".parse::<Maze>(),
            Err(MazeError::MissingExit)
        ));
        assert!(matches!(
            "h\n3\n1\n0\nscscx\n".parse::<Maze>(),
            Err(MazeError::DuplicateStart { first: 0, second: 1 })
        ));
        assert!(matches!(
            "h\n3\n1\n0\nxcscx\n".parse::<Maze>(),
            Err(MazeError::DuplicateExit { first: 0, second: 2 })
        ));
    }

    #[test]
    fn missing_file() {
        let err: MazeError = Maze::from_file("/nonexistent/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nonexistent/maze.txt"));
    }

    #[test]
    fn huge_width_is_rejected_before_building_the_graph() {
        let err: MazeError = "h\n100000000000000000\n1\n0\ns\n"
            .parse::<Maze>()
            .unwrap_err();
        assert!(matches!(err, MazeError::RowTooShort { row: 0, .. }));
        assert!(err.to_string().contains("to hold its rooms"));
    }
}

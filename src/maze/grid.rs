/*
grid.rs

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

//! Parse the text description of a maze into a matrix of cells.
//!
//! The description starts with four lines: a header that is ignored, the width and the length
//! of the maze in rooms, and the number of coins available. The maze itself follows:
//!
//! ```text
//! sco1o
//! wwcw4
//! ocxco
//! ```
//!
//! Cells at even row and even column are rooms: `s` is the starting room, `x` is the exit, and
//! any other character is a plain room.
//! Cells between two rooms, at even row and odd column or at odd row and even column, are
//! connectors: `w` is a wall, `c` a corridor, and a digit a door that needs that many coins.
//! Cells at odd row and odd column are ignored.

use log::{Level, debug, log_enabled};
use std::str::{FromStr, Lines};

use super::maze_parse::MazeError;

/// Type of room.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoomType {
    Start,
    Exit,
    Plain,
}

/// Representation of a cell of the description.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellType {
    Room(RoomType),
    Wall,
    Corridor,
    Door(u32),

    /// Cell at the crossing of an odd row and an odd column.
    Filler,
}

impl CellType {
    /// Character used for the debug output.
    fn symbol(&self) -> char {
        match self {
            CellType::Room(RoomType::Start) => 's',
            CellType::Room(RoomType::Exit) => 'x',
            CellType::Room(RoomType::Plain) => 'o',
            CellType::Wall => '#',
            CellType::Corridor => '.',
            CellType::Door(cost) => char::from_digit(*cost, 10).unwrap_or('?'),
            CellType::Filler => '+',
        }
    }
}

/// Parsed maze description.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of rooms in a row.
    width: usize,

    /// Number of rooms in a column.
    length: usize,

    /// Number of coins available to open doors.
    coin_budget: u32,

    /// Cells, row by row. Always `2 * length - 1` rows of `2 * width - 1` cells.
    cells: Vec<Vec<CellType>>,
}

impl Grid {
    /// Parse the text description of a maze.
    ///
    /// # Errors
    ///
    /// The method returns an error if a header field is missing or is not a number, if the
    /// dimensions are zero, if the grid does not fit the dimensions, or if a connector
    /// character is unknown.
    /// Rows of rooms must hold all their rooms. Shorter rows of vertical connectors are
    /// completed with walls.
    pub fn parse(description: &str) -> Result<Self, MazeError> {
        let mut lines: Lines = description.lines();

        lines.next().ok_or(MazeError::MissingField("header"))?;
        let width: usize = parse_field(lines.next(), "width")?;
        let length: usize = parse_field(lines.next(), "length")?;
        let coin_budget: u32 = parse_field(lines.next(), "coins")?;

        if width == 0
            || length == 0
            || width > usize::MAX / 2
            || length > usize::MAX / 2
            || width.checked_mul(length).is_none()
        {
            return Err(MazeError::InvalidDimensions { width, length });
        }
        let num_rows: usize = 2 * length - 1;
        let num_cols: usize = 2 * width - 1;

        let mut rows: Vec<&str> = lines.map(str::trim_end).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.len() > num_rows {
            return Err(MazeError::GridTooLong {
                rows: rows.len(),
                expected: num_rows,
            });
        }
        if rows.len() < num_rows {
            return Err(MazeError::GridTooShort {
                rows: rows.len(),
                expected: num_rows,
            });
        }

        let mut cells: Vec<Vec<CellType>> = Vec::with_capacity(num_rows);
        for (y, row) in rows.iter().enumerate() {
            let row_length: usize = row.chars().count();
            if row_length > num_cols {
                return Err(MazeError::GridTooWide {
                    row: y,
                    columns: row_length,
                    expected: num_cols,
                });
            }

            if y % 2 == 0 && row_length < num_cols {
                return Err(MazeError::RowTooShort {
                    row: y,
                    columns: row_length,
                    expected: num_cols,
                });
            }

            let mut cols: Vec<CellType> = Vec::with_capacity(num_cols);
            for (x, c) in row.chars().enumerate() {
                cols.push(cell_type(c, x, y)?);
            }

            // Missing vertical connectors are walls
            for x in row_length..num_cols {
                cols.push(cell_type('w', x, y)?);
            }
            cells.push(cols);
        }

        let grid: Grid = Self {
            width,
            length,
            coin_budget,
            cells,
        };

        if log_enabled!(Level::Debug) {
            debug!(
                "Rooms: {} x {}  Coins: {}",
                grid.width, grid.length, grid.coin_budget
            );
            for row in &grid.cells {
                let s: String = row.iter().map(CellType::symbol).collect();
                debug!("{s}");
            }
        }
        Ok(grid)
    }

    /// Number of rooms in a row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rooms in a column.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of coins available to open doors.
    pub fn coin_budget(&self) -> u32 {
        self.coin_budget
    }

    /// Number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in the grid.
    pub fn num_cols(&self) -> usize {
        2 * self.width - 1
    }

    /// Get the cell at the given coordinates. Cells outside the grid are walls.
    pub fn get_cell(&self, x: usize, y: usize) -> CellType {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(CellType::Wall)
    }

    /// Iterate over the cells, row by row.
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator {
            grid: self,
            x: 0,
            y: 0,
        }
    }
}

/// Iterator over the grid cells.
pub struct GridIterator<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,
}

impl Iterator for GridIterator<'_> {
    type Item = (usize, usize, CellType);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.grid.num_cols() {
            self.x = 0;
            self.y += 1;
        }
        if self.y >= self.grid.num_rows() {
            return None;
        }

        let result: (usize, usize, CellType) =
            (self.x, self.y, self.grid.get_cell(self.x, self.y));
        self.x += 1;
        Some(result)
    }
}

/// Parse one of the numeric header lines.
fn parse_field<T: FromStr>(line: Option<&str>, field: &'static str) -> Result<T, MazeError> {
    let line: &str = line.ok_or(MazeError::MissingField(field))?;
    line.trim().parse::<T>().map_err(|_| MazeError::InvalidNumber {
        field,
        value: line.trim().to_string(),
    })
}

/// Return the type of the character at the given position.
fn cell_type(c: char, x: usize, y: usize) -> Result<CellType, MazeError> {
    match (y % 2, x % 2) {
        (0, 0) => Ok(match c {
            's' => CellType::Room(RoomType::Start),
            'x' => CellType::Room(RoomType::Exit),
            _ => CellType::Room(RoomType::Plain),
        }),
        (1, 1) => Ok(CellType::Filler),
        _ => match c {
            'w' => Ok(CellType::Wall),
            'c' => Ok(CellType::Corridor),
            _ => match c.to_digit(10) {
                Some(cost) => Ok(CellType::Door(cost)),
                None => Err(MazeError::InvalidConnector {
                    row: y,
                    column: x,
                    character: c,
                }),
            },
        },
    }
}

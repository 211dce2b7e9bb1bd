/*
solution.rs

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

//! Save and restore a maze solution.
//!
//! The saved object is a serialization of the [`Solution`] object in JSON format by using
//! [`serde`]. The maze itself is not saved, only its dimensions, the coin budget, and the path.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::maze::maze_parse::Maze;
use crate::maze::path::Path;

/// Result of a search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Name of the maze description file.
    pub maze: String,

    /// Number of rooms in a row.
    pub width: usize,

    /// Number of rooms in a column.
    pub length: usize,

    pub coin_budget: u32,

    /// Rooms from the starting room to the exit, or [`None`] if there is no path.
    pub path: Option<Path>,

    /// Coins spent along the path.
    pub coins_spent: Option<u32>,

    /// Time of the search.
    pub solved_at: DateTime<Local>,
}

impl Solution {
    /// Create a [`Solution`] object for the given maze and search result.
    pub fn new(
        maze_name: &str,
        maze: &Maze,
        path: Option<Path>,
        coins_spent: Option<u32>,
    ) -> Self {
        Self {
            maze: maze_name.to_string(),
            width: maze.width(),
            length: maze.length(),
            coin_budget: maze.coin_budget(),
            path,
            coins_spent,
            solved_at: Local::now(),
        }
    }
}

/// Object to save and restore a solution.
pub struct SaverSolution {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverSolution {
    /// Create a [`SaverSolution`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Solution file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`Solution`] object from the save file.
    ///
    /// Return None if the file does not exist.
    pub fn load_solution(&self) -> Result<Option<Solution>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let solution: Solution = serde_json::from_reader(reader)?;
        Ok(Some(solution))
    }

    /// Save the provided [`Solution`] object.
    pub fn save_solution(&self, solution: &Solution) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, solution)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        let mut p: PathBuf = env::temp_dir();
        p.push(format!("coinmaze-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn save_and_load() {
        let maze: Maze = "h\n2\n1\n3\ns3x\n".parse().unwrap();
        let path: Option<Path> = maze.solve();
        let solution: Solution = Solution::new("door.txt", &maze, path, Some(3));

        let file: PathBuf = temp_file("save_and_load.json");
        let saver: SaverSolution = SaverSolution::new(file.clone());
        saver.save_solution(&solution).unwrap();

        let text: String = fs::read_to_string(&file).unwrap();
        assert!(text.contains("\"coin_budget\": 3"));

        let loaded: Solution = saver.load_solution().unwrap().unwrap();
        fs::remove_file(&file).unwrap();
        assert_eq!(loaded.maze, "door.txt");
        assert_eq!((loaded.width, loaded.length), (2, 1));
        assert_eq!(loaded.path, Some(Path::from_vec(&[0, 1])));
        assert_eq!(loaded.coins_spent, Some(3));
        assert_eq!(loaded.solved_at, solution.solved_at);
    }

    #[test]
    fn no_path_is_saved_as_null() {
        let maze: Maze = "h\n2\n1\n2\ns3x\n".parse().unwrap();
        let solution: Solution = Solution::new("door.txt", &maze, maze.solve(), None);
        let json: String = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("\"path\":null"));
    }

    #[test]
    fn load_missing_file() {
        let saver: SaverSolution = SaverSolution::new(temp_file("missing.json"));
        assert!(saver.load_solution().unwrap().is_none());
    }
}

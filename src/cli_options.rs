/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Find a path through the maze described in `maze1.txt`:
//!
//! ```text
//! $ coinmaze maze1.txt
//! 0 -> 1 -> 5 -> 9 -> 10 -> 11
//! ```
//!
//! Print the result in JSON format, save it to a file, and print some statistics:
//!
//! ```text
//! $ coinmaze --format json --output solution.json --summary maze1.txt
//! ```

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;

use coinmaze::config::{COPYRIGHT_NOTICE, DEFAULT_LOG_LEVEL, PACKAGE_NAME, VERSION};
use coinmaze::maze::maze_parse::Maze;
use coinmaze::maze::path::Path;
use coinmaze::maze::solver::Solver;
use coinmaze::saver::solution::{SaverSolution, Solution};

/// Output format for the path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// List of rooms, such as `0 -> 1 -> 4`
    #[default]
    Text,

    /// Solution object, with the maze dimensions and the coins spent
    Json,
}

/// Find a path through a maze of corridors and doors with a limited number of coins.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Maze description file
    maze: PathBuf,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Save the solution to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Search without recursion (same result, better suited to large mazes)
    #[arg(short, long, default_value_t = false)]
    iterative: bool,

    /// Print the number of rooms connected to the starting room, whatever the coins
    #[arg(short, long, default_value_t = false)]
    reachable: bool,

    /// Print some statistics after the search
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL));
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("{PACKAGE_NAME} {VERSION}");

    //
    // Build the maze graph
    //
    let maze_name: String = args.maze.display().to_string();
    let maze: Maze = match Maze::from_file(&args.maze) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {maze_name}: {e}");
            return 1;
        }
    };

    //
    // Find the path
    //
    let mut solver: Solver = Solver::new(maze.graph(), maze.coin_budget());
    let path: Option<Path> = if args.iterative {
        solver.solve_iterative(maze.start(), maze.end())
    } else {
        solver.solve(maze.start(), maze.end())
    };

    // Verify that the path is consistent with the maze
    if let Some(p) = &path
        && !maze.is_valid_path(p)
    {
        eprintln!("Invalid path: {p}");
        panic!("Bug: the path does not fit the maze");
    }

    let solution: Solution = Solution::new(&maze_name, &maze, path, solver.coins_spent);

    //
    // Print the result
    //
    match args.format {
        OutputFormat::Text => match &solution.path {
            Some(p) => println!("{p}"),
            None => println!("No path"),
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&solution) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: cannot serialize the solution: {e}");
                return 1;
            }
        },
    }

    if let Some(output) = &args.output {
        let saver: SaverSolution = SaverSolution::new(output.clone());
        if let Err(e) = saver.save_solution(&solution) {
            eprintln!("Error: {}: {e}", output.display());
            return 1;
        }
        info!("Solution saved to {}", output.display());
    }

    // Extra information goes to stderr when stdout holds the JSON document
    let report = |s: &str| match args.format {
        OutputFormat::Text => println!("{s}"),
        OutputFormat::Json => eprintln!("{s}"),
    };

    if args.reachable {
        match maze.reachable_rooms() {
            Ok(n) => report(&format!("Reachable rooms: {n}")),
            Err(e) => {
                eprintln!("Error: {maze_name}: {e}");
                return 1;
            }
        }
    }

    if args.summary {
        let coins_spent: String = match solution.coins_spent {
            Some(c) => c.to_string(),
            None => "-".to_string(),
        };
        report(&format!(
            "
      rooms = {}
connections = {}
      coins = {}
coins spent = {}
 iterations = {}
   duration = {}s
  solved at = {}",
            maze.graph().num_vertexes(),
            maze.graph().num_edges(),
            maze.coin_budget(),
            coins_spent,
            solver.iteration,
            solver.duration,
            solution.solved_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    0
}

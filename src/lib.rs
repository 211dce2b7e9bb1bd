/*
lib.rs

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

//! Find a way through a maze of corridors and doors with a limited number of coins.
//!
//! See the [`maze`] module for the maze graph and the path finder, and the [`saver`] module to
//! save the results.

pub mod config;
pub mod maze;
pub mod saver;

/*
path.rs

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

//! Path through the maze.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Path object.
///
/// During the search, the path is the list of the rooms from the starting room to the room
/// being explored. Because rooms are pushed when entering them and popped when backtracking,
/// [`Path::contains`] only reports the rooms of the current branch.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of vertexes.
    path: Vec<usize>,

    /// Stores the visited status of the vertex.
    /// Instead of looking for the vertex in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Path {}

/// Only the ordered list is serialized.
impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.path.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let path: Vec<usize> = Vec::deserialize(deserializer)?;
        Ok(Self::from_vec(&path))
    }
}

/// Display the path as `0 -> 1 -> 4`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rooms: Vec<String> = self.path.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", rooms.join(" -> "))
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_vertexes),
            visited: HashSet::with_capacity(num_vertexes),
        }
    }

    /// Create a [`Path`] object from a slice.
    pub fn from_vec(path: &[usize]) -> Self {
        Self {
            path: path.to_vec(),
            visited: path.iter().copied().collect(),
        }
    }

    /// Add a vertex to the path.
    pub fn push(&mut self, vertex: usize) {
        self.path.push(vertex);
        self.visited.insert(vertex);
    }

    /// Remove the last vertex from the path.
    pub fn pop(&mut self) {
        if let Some(v) = self.path.pop() {
            self.visited.remove(&v);
        }
    }

    /// Get the number of vertexes in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the vertex is in the path or not.
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.contains(&vertex)
    }

    /// Whether a vertex appears more than once in the path.
    pub fn has_duplicates(&self) -> bool {
        self.visited.len() != self.path.len()
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<usize> {
        &self.path
    }

    /// Return the first vertex in the path.
    pub fn get_first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last vertex in the path.
    pub fn get_last(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_tracks_membership() {
        let mut p: Path = Path::new(4);
        p.push(3);
        p.push(1);
        assert!(p.contains(3) && p.contains(1));
        p.pop();
        assert!(!p.contains(1));
        assert_eq!(p.get(), &vec![3]);
        p.pop();
        p.pop();
        assert!(p.is_empty());
        assert_eq!(p.get_first(), None);
    }

    #[test]
    fn first_last_and_display() {
        let p: Path = Path::from_vec(&[0, 1, 4]);
        assert_eq!(p.get_first(), Some(0));
        assert_eq!(p.get_last(), Some(4));
        assert_eq!(p.to_string(), "0 -> 1 -> 4");
        assert!(!p.has_duplicates());
        assert!(Path::from_vec(&[0, 1, 0]).has_duplicates());
    }

    #[test]
    fn serialized_as_a_list() {
        let p: Path = Path::from_vec(&[2, 5, 8]);
        let json: String = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[2,5,8]");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(back.contains(5));
    }
}

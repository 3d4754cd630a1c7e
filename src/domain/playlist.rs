// SPDX-License-Identifier: MPL-2.0
//! Linear playlist.
//!
//! Entries keep insertion order and duplicates are allowed. The current
//! selection is either `None` or a valid index into the entries.

use std::path::{Path, PathBuf};

/// Ordered list of video paths with an optional current entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<PathBuf>,
    current: Option<usize>,
}

impl Playlist {
    /// Creates an empty playlist with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `paths` in the order given. The selection is left untouched.
    pub fn extend<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.entries.extend(paths);
    }

    /// Removes every entry and clears the selection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }

    /// Selects the entry at `index`. Returns its path, or `None` (and leaves
    /// the selection unchanged) when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&Path> {
        if index >= self.entries.len() {
            return None;
        }
        self.current = Some(index);
        Some(self.entries[index].as_path())
    }

    /// Moves the selection one entry forward. Returns the new index, or `None`
    /// when nothing is selected or the last entry is already selected.
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.current? + 1;
        if next < self.entries.len() {
            self.current = Some(next);
            Some(next)
        } else {
            None
        }
    }

    /// Index of the selected entry.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Path of the selected entry.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.current.map(|index| self.entries[index].as_path())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in playlist order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

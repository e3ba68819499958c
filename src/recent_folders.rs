// SPDX-License-Identifier: MPL-2.0
//! Bounded most-recently-used list of opened folders.
//!
//! The list is persisted through [`crate::config`] as `recent_dirs` and
//! rendered by the sidebar. Entries are distinct directory paths, most
//! recently opened first.

use std::path::{Path, PathBuf};

/// Maximum number of folders remembered across sessions.
pub const MAX_RECENT_FOLDERS: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentFolders {
    folders: Vec<PathBuf>,
}

impl RecentFolders {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a persisted list, deduplicating and enforcing the bound.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        let mut recent = Self::new();
        for path in paths.into_iter().rev() {
            recent.push(path);
        }
        recent
    }

    /// Records `folder` as the most recently used entry.
    ///
    /// An existing occurrence is moved to the front rather than duplicated;
    /// the list is truncated to [`MAX_RECENT_FOLDERS`].
    pub fn push(&mut self, folder: PathBuf) {
        self.folders.retain(|existing| existing != &folder);
        self.folders.insert(0, folder);
        self.folders.truncate(MAX_RECENT_FOLDERS);
    }

    /// Removes a folder from the list, if present.
    pub fn remove(&mut self, folder: &Path) {
        self.folders.retain(|existing| existing != folder);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.folders.iter().map(|p| p.as_path())
    }

    pub fn as_paths(&self) -> &[PathBuf] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str) -> PathBuf {
        PathBuf::from(format!("/photos/{name}"))
    }

    #[test]
    fn push_places_newest_entry_first() {
        let mut recent = RecentFolders::new();
        recent.push(folder("a"));
        recent.push(folder("b"));

        assert_eq!(recent.as_paths(), &[folder("b"), folder("a")]);
    }

    #[test]
    fn push_moves_existing_entry_to_front_without_duplicating() {
        let mut recent = RecentFolders::new();
        recent.push(folder("a"));
        recent.push(folder("b"));
        recent.push(folder("a"));

        assert_eq!(recent.as_paths(), &[folder("a"), folder("b")]);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn push_never_exceeds_the_bound() {
        let mut recent = RecentFolders::new();
        for i in 0..MAX_RECENT_FOLDERS + 5 {
            recent.push(folder(&format!("dir-{i}")));
        }

        assert_eq!(recent.len(), MAX_RECENT_FOLDERS);
        // Newest entry survives, oldest entries are dropped
        assert_eq!(recent.as_paths()[0], folder("dir-19"));
        assert!(!recent.as_paths().contains(&folder("dir-0")));
    }

    #[test]
    fn from_paths_preserves_order_and_bound() {
        let paths: Vec<PathBuf> = (0..MAX_RECENT_FOLDERS + 3)
            .map(|i| folder(&format!("dir-{i}")))
            .collect();
        let recent = RecentFolders::from_paths(paths.clone());

        assert_eq!(recent.len(), MAX_RECENT_FOLDERS);
        assert_eq!(recent.as_paths()[0], paths[0]);
    }

    #[test]
    fn from_paths_deduplicates_keeping_first_occurrence() {
        let recent =
            RecentFolders::from_paths(vec![folder("a"), folder("b"), folder("a"), folder("c")]);

        assert_eq!(recent.as_paths(), &[folder("a"), folder("b"), folder("c")]);
    }

    #[test]
    fn remove_deletes_matching_entry() {
        let mut recent = RecentFolders::new();
        recent.push(folder("a"));
        recent.push(folder("b"));
        recent.remove(&folder("a"));

        assert_eq!(recent.as_paths(), &[folder("b")]);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery session: the navigation and view-state model.
//!
//! [`GallerySession`] is the single source of truth for which image is
//! current, which of the three view modes is active, how the folder is
//! sorted, and which folders were recently opened. The UI layer forwards
//! each user gesture to exactly one operation here and re-renders from
//! [`GallerySession::snapshot`]; it never mutates this state directly.
//!
//! The session performs no I/O. Scanning, deletion, and persistence happen
//! in the app layer, which feeds the results into this state machine.

use crate::config::SortMethod;
use crate::recent_folders::RecentFolders;
use std::path::{Path, PathBuf};

/// The three interchangeable ways of looking at a loaded folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One image filling the viewport, with prev/next/delete controls.
    #[default]
    Single,
    /// Plain textual list of filenames.
    List,
    /// Thumbnail matrix with a magnified hover preview.
    Grid,
}

/// One entry of the rendered list/grid contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLabel {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

/// Render-ready state derived after every mutation and consumed identically
/// by all views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// `"i+1 / N"` in Single mode, `"N images"` otherwise, empty when no
    /// folder content is loaded.
    pub counter: String,
    /// Basename of the current image, if any.
    pub filename: Option<String>,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_delete: bool,
    pub entries: Vec<EntryLabel>,
}

/// Owns the ordered image list, the shared selection, the active view mode,
/// and the recent-folder history.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySession {
    images: Vec<PathBuf>,
    current_index: Option<usize>,
    current_folder: Option<PathBuf>,
    view_mode: ViewMode,
    sort_method: SortMethod,
    recent: RecentFolders,
    /// Grid-only transient magnification target. Never affects selection.
    hover_preview: Option<usize>,
}

impl GallerySession {
    /// Creates a session with state restored from persisted settings.
    pub fn new(sort_method: SortMethod, recent: RecentFolders) -> Self {
        Self {
            images: Vec::new(),
            current_index: None,
            current_folder: None,
            view_mode: ViewMode::default(),
            sort_method,
            recent,
            hover_preview: None,
        }
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Path of the currently selected image, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.images.get(idx))
            .map(|p| p.as_path())
    }

    pub fn current_folder(&self) -> Option<&Path> {
        self.current_folder.as_deref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn sort_method(&self) -> SortMethod {
        self.sort_method
    }

    pub fn recent(&self) -> &RecentFolders {
        &self.recent
    }

    /// Path of the hovered grid thumbnail, if any.
    pub fn hover_preview_path(&self) -> Option<&Path> {
        self.hover_preview
            .and_then(|idx| self.images.get(idx))
            .map(|p| p.as_path())
    }

    /// Replaces the image list with a freshly scanned folder.
    ///
    /// The selection resets to the first image (or nothing when the folder
    /// holds no images). When `add_to_recent` is set the folder moves to the
    /// front of the recent list; re-sort reloads pass `false` so sorting
    /// never perturbs recent-folder order.
    pub fn load_images(&mut self, folder: PathBuf, entries: Vec<PathBuf>, add_to_recent: bool) {
        if add_to_recent {
            self.recent.push(folder.clone());
        }
        self.current_index = if entries.is_empty() { None } else { Some(0) };
        self.images = entries;
        self.current_folder = Some(folder);
        self.hover_preview = None;
    }

    /// Records a new sort method.
    ///
    /// Returns `true` when a folder is loaded and the caller must rescan and
    /// reload (with `add_to_recent = false`).
    pub fn set_sort_method(&mut self, sort_method: SortMethod) -> bool {
        self.sort_method = sort_method;
        self.current_folder.is_some()
    }

    /// Switches the active view mode. Selection, images, and sort method are
    /// untouched; the magnified preview is cleared when leaving Grid.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if view_mode != ViewMode::Grid {
            self.hover_preview = None;
        }
        self.view_mode = view_mode;
    }

    /// Selects the image at `index` and switches to Single view.
    ///
    /// Out-of-bounds indices are rejected as a no-op; `current_index` never
    /// leaves bounds through this path.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = Some(index);
        self.set_view_mode(ViewMode::Single);
        true
    }

    /// Steps the selection forward by one. No wraparound: at the last image
    /// this is a no-op. Returns whether the selection moved.
    pub fn next_image(&mut self) -> bool {
        match self.current_index {
            Some(idx) if idx + 1 < self.images.len() => {
                self.current_index = Some(idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps the selection back by one. No wraparound: at the first image
    /// this is a no-op. Returns whether the selection moved.
    pub fn prev_image(&mut self) -> bool {
        match self.current_index {
            Some(idx) if idx > 0 => {
                self.current_index = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Marks a grid thumbnail as the magnified preview target.
    ///
    /// Only meaningful in Grid mode; ignored elsewhere and for invalid
    /// indices. Never touches the selection.
    pub fn hover_enter(&mut self, index: usize) {
        if self.view_mode == ViewMode::Grid && index < self.images.len() {
            self.hover_preview = Some(index);
        }
    }

    /// Clears the magnified preview target entirely.
    pub fn hover_leave(&mut self) {
        self.hover_preview = None;
    }

    /// Removes the current entry after its file was successfully deleted.
    ///
    /// Deleting the last element clamps the selection to the new tail;
    /// otherwise the entry that shifts into the freed slot becomes current.
    /// An emptied list clears the selection. Returns the removed path.
    ///
    /// The caller must only invoke this once the filesystem deletion
    /// succeeded; a failed deletion must leave the session untouched.
    pub fn remove_current(&mut self) -> Option<PathBuf> {
        let idx = self.current_index?;
        let removed = self.images.remove(idx);

        self.current_index = if self.images.is_empty() {
            None
        } else if idx == self.images.len() {
            Some(self.images.len() - 1)
        } else {
            Some(idx)
        };
        self.hover_preview = None;

        Some(removed)
    }

    /// Derives the render-ready state all views consume.
    pub fn snapshot(&self) -> ViewSnapshot {
        let total = self.images.len();

        let counter = if total == 0 {
            String::new()
        } else {
            match (self.view_mode, self.current_index) {
                (ViewMode::Single, Some(idx)) => format!("{} / {}", idx + 1, total),
                _ => format!("{} images", total),
            }
        };

        let filename = self.current_path().and_then(basename);

        let entries = self
            .images
            .iter()
            .enumerate()
            .map(|(index, path)| EntryLabel {
                index,
                name: basename(path).unwrap_or_else(|| path.display().to_string()),
                path: path.clone(),
            })
            .collect();

        ViewSnapshot {
            counter,
            filename,
            can_prev: matches!(self.current_index, Some(idx) if idx > 0),
            can_next: matches!(self.current_index, Some(idx) if idx + 1 < total),
            can_delete: total > 0,
            entries,
        }
    }
}

fn basename(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

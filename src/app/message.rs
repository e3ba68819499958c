// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.
//!
//! Each user gesture maps to exactly one message, and each message maps to
//! exactly one gallery-session operation in `App::update`; the panes never
//! carry navigation or deletion logic themselves.

use crate::config::SortMethod;
use crate::error::Error;
use crate::gallery::ViewMode;
use crate::media::ImageData;
use iced::keyboard;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the system folder picker.
    OpenFolderDialog,
    /// Result of the folder picker; `None` means the user cancelled.
    FolderSelected(Option<PathBuf>),
    /// A recent-folder sidebar entry was clicked.
    OpenRecent(PathBuf),
    SetViewMode(ViewMode),
    SortMethodSelected(SortMethod),
    /// A list row or grid tile was clicked.
    SelectImage(usize),
    NextImage,
    PrevImage,
    /// The cursor entered a grid tile.
    HoverEntered(usize),
    /// The cursor left a grid tile.
    HoverLeft,
    /// The delete button was pressed; asks for confirmation first.
    DeleteRequested,
    /// Outcome of the delete confirmation dialog for `path`.
    DeleteConfirmed { path: PathBuf, confirmed: bool },
    /// Result of decoding the image at `path` for the Single view.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    KeyPressed(keyboard::Key),
    WindowResized(iced::Size),
    /// Window close was requested (Escape or the window's close button).
    CloseRequested,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional directory to load on startup, bypassing the picker.
    pub folder: Option<String>,
}

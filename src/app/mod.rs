// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the session and views.
//!
//! The `App` struct wires the gallery session to the iced runtime and owns
//! every side effect: folder scanning, image decoding, settings persistence,
//! the folder picker, and the delete confirmation dialog. Each message maps
//! to exactly one session operation; after every mutation the render-ready
//! snapshot is re-derived and consumed by all panes alike.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::directory_scanner;
use crate::gallery::{GallerySession, ViewMode, ViewSnapshot};
use crate::media::{self, ImageData};
use crate::recent_folders::RecentFolders;
use iced::{keyboard, window, Element, Size, Subscription, Task, Theme};
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root iced application state.
pub struct App {
    session: GallerySession,
    /// Render-ready state derived after the last mutation.
    snapshot: ViewSnapshot,
    /// Decoded image for the Single view, when loading succeeded.
    current_image: Option<ImageData>,
    /// Decode failure for the current image, shown as a blank pane.
    load_error: Option<String>,
    /// Transient user-visible notice (scan/delete/settings failures).
    status: Option<String>,
    window_size: Size,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced wants a Fn closure for boot, but flags must move into App exactly
    // once; stash them in a RefCell<Option<_>> and take() on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot ran twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let session = GallerySession::new(config::SortMethod::default(), RecentFolders::new());
        let snapshot = session.snapshot();
        Self {
            session,
            snapshot,
            current_image: None,
            load_error: None,
            status: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Initializes application state from persisted settings and optionally
    /// loads the directory given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        match config::load() {
            Ok(cfg) => {
                let sort_method = cfg.sort_method.unwrap_or_default();
                app.session =
                    GallerySession::new(sort_method, RecentFolders::from_paths(cfg.recent_dirs));
                app.snapshot = app.session.snapshot();
            }
            Err(err) => {
                app.status = Some(format!("Settings could not be read: {err}"));
            }
        }

        let task = match flags.folder {
            Some(folder) => {
                let path = PathBuf::from(folder);
                if path.is_dir() {
                    app.load_folder(path, true)
                } else {
                    Task::none()
                }
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self
            .session
            .current_folder()
            .and_then(|f| f.file_name())
            .and_then(|n| n.to_str())
        {
            Some(name) => format!("{name} - Iced Gallery"),
            None => "Iced Gallery".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolderDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select Image Folder")
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderSelected,
            ),
            Message::FolderSelected(Some(folder)) => self.load_folder(folder, true),
            Message::FolderSelected(None) => Task::none(),
            Message::OpenRecent(folder) => self.load_folder(folder, true),
            Message::SetViewMode(mode) => {
                self.session.set_view_mode(mode);
                self.snapshot = self.session.snapshot();
                if mode == ViewMode::Single
                    && self.current_image.is_none()
                    && self.load_error.is_none()
                {
                    self.load_current_image()
                } else {
                    Task::none()
                }
            }
            Message::SortMethodSelected(sort_method) => {
                let needs_reload = self.session.set_sort_method(sort_method);
                self.persist_settings();
                if needs_reload {
                    // Re-sorting reloads the folder without touching the
                    // recent-folder order.
                    match self.session.current_folder().map(Path::to_path_buf) {
                        Some(folder) => self.load_folder(folder, false),
                        None => Task::none(),
                    }
                } else {
                    Task::none()
                }
            }
            Message::SelectImage(index) => {
                if self.session.select(index) {
                    self.snapshot = self.session.snapshot();
                    self.load_current_image()
                } else {
                    Task::none()
                }
            }
            Message::NextImage => {
                if self.session.next_image() {
                    self.snapshot = self.session.snapshot();
                    self.load_current_image()
                } else {
                    Task::none()
                }
            }
            Message::PrevImage => {
                if self.session.prev_image() {
                    self.snapshot = self.session.snapshot();
                    self.load_current_image()
                } else {
                    Task::none()
                }
            }
            Message::HoverEntered(index) => {
                self.session.hover_enter(index);
                Task::none()
            }
            Message::HoverLeft => {
                self.session.hover_leave();
                Task::none()
            }
            Message::DeleteRequested => {
                let Some(path) = self.session.current_path().map(Path::to_path_buf) else {
                    return Task::none();
                };
                let filename = display_name(&path);
                Task::perform(
                    async move {
                        let answer = rfd::AsyncMessageDialog::new()
                            .set_level(rfd::MessageLevel::Warning)
                            .set_title("Delete image")
                            .set_description(format!(
                                "Delete \"{filename}\"? This cannot be undone."
                            ))
                            .set_buttons(rfd::MessageButtons::YesNo)
                            .show()
                            .await;
                        let confirmed = matches!(answer, rfd::MessageDialogResult::Yes);
                        (path, confirmed)
                    },
                    |(path, confirmed)| Message::DeleteConfirmed { path, confirmed },
                )
            }
            Message::DeleteConfirmed { path, confirmed } => {
                self.handle_delete_confirmed(path, confirmed)
            }
            Message::ImageLoaded { path, result } => {
                // Drop results for images the user already navigated away from
                if self.session.current_path() == Some(path.as_path()) {
                    match result {
                        Ok(data) => {
                            self.current_image = Some(data);
                            self.load_error = None;
                        }
                        Err(err) => {
                            self.current_image = None;
                            self.load_error = Some(err.to_string());
                        }
                    }
                }
                Task::none()
            }
            Message::KeyPressed(key) => self.handle_key(key),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::CloseRequested => window::latest().and_then(window::close),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            session: &self.session,
            snapshot: &self.snapshot,
            current_image: self.current_image.as_ref(),
            load_error: self.load_error.as_deref(),
            status: self.status.as_deref(),
            window_size: self.window_size,
        })
    }

    /// Scans `folder` and replaces the session contents with the result.
    ///
    /// Scan failures leave the session untouched and surface in the status
    /// line; an empty folder loads normally and renders the empty state.
    fn load_folder(&mut self, folder: PathBuf, add_to_recent: bool) -> Task<Message> {
        match directory_scanner::scan_folder(&folder, self.session.sort_method()) {
            Ok(entries) => {
                self.session.load_images(folder, entries, add_to_recent);
                if add_to_recent {
                    self.persist_settings();
                }
                self.status = None;
                self.snapshot = self.session.snapshot();
                self.load_current_image()
            }
            Err(err) => {
                self.status = Some(format!("Could not open {}: {err}", folder.display()));
                Task::none()
            }
        }
    }

    /// Kicks off decoding of the current image for the Single view.
    fn load_current_image(&mut self) -> Task<Message> {
        self.current_image = None;
        self.load_error = None;

        let Some(path) = self.session.current_path().map(Path::to_path_buf) else {
            return Task::none();
        };

        Task::perform(
            async move {
                let result = media::load_image(&path);
                (path, result)
            },
            |(path, result)| Message::ImageLoaded { path, result },
        )
    }

    /// Deletes the confirmed file and, only on success, removes its entry.
    ///
    /// A failed deletion leaves `images` and the selection untouched and
    /// reports the error in the status line.
    fn handle_delete_confirmed(&mut self, path: PathBuf, confirmed: bool) -> Task<Message> {
        if !confirmed {
            return Task::none();
        }
        // The selection may have moved while the dialog was open
        if self.session.current_path() != Some(path.as_path()) {
            return Task::none();
        }

        match std::fs::remove_file(&path) {
            Ok(()) => {
                self.session.remove_current();
                self.status = Some(format!("Deleted {}", display_name(&path)));
                self.snapshot = self.session.snapshot();
                self.load_current_image()
            }
            Err(err) => {
                self.status = Some(format!("Could not delete {}: {err}", display_name(&path)));
                Task::none()
            }
        }
    }

    fn handle_key(&mut self, key: keyboard::Key) -> Task<Message> {
        let single = self.session.view_mode() == ViewMode::Single;
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.update(Message::CloseRequested)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) if single => {
                self.update(Message::PrevImage)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) if single => {
                self.update(Message::NextImage)
            }
            keyboard::Key::Character(ref c) if single && c.eq_ignore_ascii_case("a") => {
                self.update(Message::PrevImage)
            }
            keyboard::Key::Character(ref c) if single && c.eq_ignore_ascii_case("d") => {
                self.update(Message::NextImage)
            }
            _ => Task::none(),
        }
    }

    /// Writes sort method and recent folders to `settings.toml`.
    fn persist_settings(&mut self) {
        let cfg = config::Config {
            recent_dirs: self.session.recent().as_paths().to_vec(),
            sort_method: Some(self.session.sort_method()),
        };
        if let Err(err) = config::save(&cfg) {
            eprintln!("Failed to save settings: {err}");
            self.status = Some(format!("Settings could not be saved: {err}"));
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortMethod;
    use crate::error::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn create_image(dir: &Path, name: &str, bytes: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![0u8; bytes]).expect("failed to create test file");
        path
    }

    #[test]
    fn default_app_starts_empty() {
        let app = App::default();
        assert!(app.session.is_empty());
        assert!(app.snapshot.counter.is_empty());
        assert!(!app.snapshot.can_delete);
    }

    #[test]
    fn load_folder_selects_first_image_and_derives_snapshot() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "b.jpg", 10);
        create_image(temp_dir.path(), "a.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        assert_eq!(app.session.len(), 2);
        assert_eq!(app.session.current_index(), Some(0));
        assert_eq!(app.snapshot.counter, "1 / 2");
        assert_eq!(app.snapshot.filename.as_deref(), Some("a.jpg"));
        assert!(app.status.is_none());
    }

    #[test]
    fn load_folder_missing_directory_reports_error_and_keeps_state() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);
        let _task = app.load_folder(temp_dir.path().join("missing"), false);

        assert!(app.status.is_some());
        assert_eq!(app.session.len(), 1, "failed load must not clear the session");
    }

    #[test]
    fn empty_folder_loads_with_disabled_controls() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        assert!(app.session.is_empty());
        assert!(!app.snapshot.can_prev);
        assert!(!app.snapshot.can_next);
        assert!(!app.snapshot.can_delete);
        assert!(app.snapshot.counter.is_empty());
    }

    #[test]
    fn image_loaded_for_stale_path_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);
        let stale = temp_dir.path().join("gone.jpg");

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::ImageLoaded {
            path: stale,
            result: Err(Error::Image("bad".into())),
        });

        assert!(app.load_error.is_none(), "stale result must not surface");
    }

    #[test]
    fn image_decode_failure_keeps_entry_and_reports_blank() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_image(temp_dir.path(), "a.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::ImageLoaded {
            path,
            result: Err(Error::Image("not an image".into())),
        });

        assert!(app.load_error.is_some());
        assert!(app.current_image.is_none());
        assert_eq!(app.session.len(), 1, "broken file stays in the list");
        assert_eq!(app.snapshot.filename.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn delete_confirmed_removes_file_and_entry() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::DeleteConfirmed {
            path: first.clone(),
            confirmed: true,
        });

        assert!(!first.exists(), "file must be deleted from disk");
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.session.current_index(), Some(0));
        assert_eq!(app.snapshot.filename.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn delete_declined_changes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_image(temp_dir.path(), "a.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::DeleteConfirmed {
            path: first.clone(),
            confirmed: false,
        });

        assert!(first.exists());
        assert_eq!(app.session.len(), 1);
    }

    #[test]
    fn delete_failure_rolls_back_nothing_and_reports() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_image(temp_dir.path(), "a.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        // The file disappears out from under us before the deletion runs
        fs::remove_file(&first).expect("failed to remove file");

        let _task = app.update(Message::DeleteConfirmed {
            path: first,
            confirmed: true,
        });

        assert!(app.status.as_deref().is_some_and(|s| s.contains("Could not delete")));
        assert_eq!(app.session.len(), 1, "failed delete must not mutate the list");
        assert_eq!(app.session.current_index(), Some(0));
    }

    #[test]
    fn delete_confirmation_for_changed_selection_is_dropped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);
        let _task = app.update(Message::NextImage);

        let _task = app.update(Message::DeleteConfirmed {
            path: first.clone(),
            confirmed: true,
        });

        assert!(first.exists(), "stale confirmation must not delete");
        assert_eq!(app.session.len(), 2);
    }

    #[test]
    fn arrow_keys_navigate_only_in_single_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::KeyPressed(keyboard::Key::Named(
            keyboard::key::Named::ArrowRight,
        )));
        assert_eq!(app.session.current_index(), Some(1));

        let _task = app.update(Message::SetViewMode(ViewMode::List));
        let _task = app.update(Message::KeyPressed(keyboard::Key::Named(
            keyboard::key::Named::ArrowLeft,
        )));
        assert_eq!(app.session.current_index(), Some(1), "list mode ignores arrows");
    }

    #[test]
    fn escape_requests_close_without_touching_state() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);
        let _task = app.update(Message::NextImage);

        // Yields the window-close task; the session must stay intact
        let _task = app.update(Message::KeyPressed(keyboard::Key::Named(
            keyboard::key::Named::Escape,
        )));

        assert_eq!(app.session.len(), 2);
        assert_eq!(app.session.current_index(), Some(1));
    }

    #[test]
    fn character_keys_navigate_in_single_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);

        let _task = app.update(Message::KeyPressed(keyboard::Key::Character("d".into())));
        assert_eq!(app.session.current_index(), Some(1));

        let _task = app.update(Message::KeyPressed(keyboard::Key::Character("a".into())));
        assert_eq!(app.session.current_index(), Some(0));
    }

    #[test]
    fn view_mode_switch_preserves_selection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_image(temp_dir.path(), "a.jpg", 10);
        create_image(temp_dir.path(), "b.jpg", 10);

        let mut app = App::default();
        let _task = app.load_folder(temp_dir.path().to_path_buf(), false);
        let _task = app.update(Message::NextImage);

        for mode in [ViewMode::Grid, ViewMode::List, ViewMode::Single] {
            let _task = app.update(Message::SetViewMode(mode));
            assert_eq!(app.session.current_index(), Some(1));
        }
    }

    #[test]
    fn sort_change_without_folder_only_records_method() {
        let mut app = App::default();
        let needs_reload = app.session.set_sort_method(SortMethod::SizeSmallest);
        assert!(!needs_reload);
        assert_eq!(app.session.sort_method(), SortMethod::SizeSmallest);
    }
}

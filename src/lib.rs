// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a minimalist folder image gallery built with the Iced
//! GUI framework.
//!
//! It scans a folder for supported images and presents them in three view
//! modes with sorting, a recent-folder list, and deletion from disk. All
//! navigation state lives in [`gallery::GallerySession`]; the `app` module
//! owns every side effect.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.3.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod gallery;
pub mod media;
pub mod recent_folders;
pub mod ui;

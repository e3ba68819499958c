// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a folder for supported image formats, filters them,
//! and sorts them according to the configured sort method.

use crate::config::SortMethod;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Scans a folder for supported image files and sorts them.
///
/// Returns an error if the folder cannot be read. An empty result is not an
/// error; the caller decides how to surface it.
pub fn scan_folder(folder: &Path, sort_method: SortMethod) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_method);

    Ok(image_files)
}

/// Sorts a list of image file paths according to the specified sort method.
///
/// The sort is stable, so files with equal keys keep their relative order.
/// Files whose metadata cannot be read sort as if they had an epoch
/// modification time and zero size; they are never dropped from the list.
pub fn sort_image_files(image_files: &mut [PathBuf], sort_method: SortMethod) {
    match sort_method {
        SortMethod::NameAsc => {
            image_files.sort_by(|a, b| basename_key(a).cmp(&basename_key(b)));
        }
        SortMethod::NameDesc => {
            image_files.sort_by(|a, b| basename_key(b).cmp(&basename_key(a)));
        }
        SortMethod::DateNewest => {
            image_files.sort_by(|a, b| modified_time(b).cmp(&modified_time(a)));
        }
        SortMethod::DateOldest => {
            image_files.sort_by(|a, b| modified_time(a).cmp(&modified_time(b)));
        }
        SortMethod::SizeLargest => {
            image_files.sort_by(|a, b| file_size(b).cmp(&file_size(a)));
        }
        SortMethod::SizeSmallest => {
            image_files.sort_by(|a, b| file_size(a).cmp(&file_size(b)));
        }
    }
}

fn basename_key(path: &Path) -> std::ffi::OsString {
    path.file_name()
        .map(|name| name.to_ascii_lowercase())
        .unwrap_or_default()
}

fn modified_time(path: &Path) -> SystemTime {
    path.metadata()
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn file_size(path: &Path) -> u64 {
    path.metadata().map(|m| m.len()).unwrap_or(0)
}

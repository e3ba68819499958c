// SPDX-License-Identifier: MPL-2.0
//! Image format support and loading.
//!
//! This module owns the allow-list of supported image formats and the
//! synchronous decode path used by the gallery pane.

pub mod image;

use std::path::Path;

pub use image::{load_image, ImageData};

/// Supported image file extensions (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif",
];

/// Checks whether a path has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

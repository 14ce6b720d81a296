//! Input discovery for the CLI.
//!
//! Expands the mixed file/directory arguments of `veil simulate` and
//! `veil reveal` into a flat list of image paths.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions recognised as decodable images when scanning directories.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Check whether a path has a recognised image extension.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Expand input arguments into a flat list of image files.
///
/// Explicit files pass through untouched (the decoder reports anything
/// unreadable); directories are walked recursively and filtered to
/// recognised image extensions, in sorted order.
pub fn collect_images(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_dir() {
                    continue;
                }
                if is_image_path(path) {
                    found.push(path.to_path_buf());
                }
            }
        } else {
            found.push(input.clone());
        }
    }

    found
}

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Matched literally; `.Png` and friends are not images here.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "PNG", "JPG", "JPEG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Missing,
    Empty,
    Found(Vec<PathBuf>),
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Lists the images directly inside `dir`, in directory enumeration order.
pub fn discover_images(dir: &Path) -> Discovery {
    if !dir.is_dir() {
        return Discovery::Missing;
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(path) {
            images.push(path.to_path_buf());
        }
    }

    if images.is_empty() {
        Discovery::Empty
    } else {
        Discovery::Found(images)
    }
}

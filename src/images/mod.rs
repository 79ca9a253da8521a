//! # Item Image Resolution
//!
//! Maps an image reference taken from a record (a bare filename such as
//! `metal_parts.png`, or a full URL pointing at the upstream CDN) to a decoded
//! image found under the local data root.
//!
//! Lookup walks a fixed list of directories in priority order and returns the
//! first file that both exists and decodes. Every failure mode (blank input, no
//! match, unreadable or corrupt file) collapses to `None`; artwork is
//! decorative and callers render a placeholder.
//!
//! ```rust,no_run
//! use tracker_overlay::images::ImageResolver;
//!
//! let resolver = ImageResolver::new("./data");
//! if let Some(img) = resolver.resolve("https://cdn.example.com/items/metal_parts.png") {
//!     println!("{}x{}", img.width(), img.height());
//! }
//! ```

use image::DynamicImage;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Directories searched under the data root, highest priority first.
pub const CANDIDATE_DIRS: [&str; 5] = [
    "images/items",
    "items/images",
    "images/workshop",
    "images",
    "items",
];

/// Extract the filename to look up from an image reference.
///
/// Absolute URLs contribute only their final, percent-decoded path segment.
/// Separators that appear after decoding are not honored: only the part after
/// the last `/` or `\` is kept, and `.` or `..` yields `None`. Anything else is
/// used verbatim. Blank input yields `None`.
pub fn candidate_name(reference: &str) -> Option<String> {
    if reference.trim().is_empty() {
        return None;
    }
    match Url::parse(reference) {
        Ok(url) if !url.cannot_be_a_base() => {
            let segment = url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|s| !s.is_empty())?;
            let decoded = urlencoding::decode(segment)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| segment.to_string());
            file_name_only(&decoded)
        }
        _ => Some(reference.to_string()),
    }
}

fn file_name_only(decoded: &str) -> Option<String> {
    let name = decoded.rsplit(['/', '\\']).next().unwrap_or(decoded);
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct ImageResolver {
    data_root: PathBuf,
}

impl ImageResolver {
    pub fn new<P: Into<PathBuf>>(data_root: P) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Paths that would be tried for `reference`, in order. Empty for blank input.
    pub fn candidate_paths(&self, reference: &str) -> Vec<PathBuf> {
        match candidate_name(reference) {
            Some(name) => CANDIDATE_DIRS
                .iter()
                .map(|dir| self.data_root.join(dir).join(&name))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve an optional reference, as found on a record field.
    pub fn resolve_opt(&self, reference: Option<&str>) -> Option<DynamicImage> {
        reference.and_then(|r| self.resolve(r))
    }

    /// Resolve `reference` to the first candidate that exists and decodes.
    pub fn resolve(&self, reference: &str) -> Option<DynamicImage> {
        self.locate(reference).map(|(_, img)| img)
    }

    /// Like [`resolve`](Self::resolve) but also reports which file matched.
    pub fn locate(&self, reference: &str) -> Option<(PathBuf, DynamicImage)> {
        for path in self.candidate_paths(reference) {
            if !path.is_file() {
                continue;
            }
            if let Some(img) = load_fully(&path) {
                return Some((path, img));
            }
        }
        debug!("no image found for '{}'", reference.escape_debug());
        None
    }
}

/// Read the whole file, then decode from memory, so no handle outlives the call.
fn load_fully(path: &Path) -> Option<DynamicImage> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!("skipping unreadable image {}: {}", path.display(), e);
            return None;
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            debug!("skipping undecodable image {}: {}", path.display(), e);
            None
        }
    }
}

//! Test utilities & fixtures.
//! Provides access to the static game data documents under `tests/test-data-int`.

use std::path::{Path, PathBuf};

/// Return the path to the static integration test fixture directory.
/// Kept small & deterministic. Tests should copy to a temp dir if they mutate.
#[allow(dead_code)]
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data-int")
}

/// Return a writable copy (temp dir) of the fixture documents.
#[allow(dead_code)]
pub fn writable_fixture() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = fixture_root();
    for doc in ["items.json", "quests.json", "projects.json", "hideoutModules.json"] {
        std::fs::copy(src.join(doc), tmp.path().join(doc)).unwrap();
    }
    tmp
}

/// Write a solid-color PNG of the given size, creating parent directories.
#[allow(dead_code)]
pub fn write_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

//! Shared test utilities: fixture images and config files on disk.

use crate::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a `width`x`height` gradient image; the format follows the extension.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

/// Pixel dimensions of an image on disk. Panics if it cannot be read.
pub fn image_size(path: &Path) -> (u32, u32) {
    image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("cannot read dimensions of {}: {e}", path.display()))
}

/// Write a config file into the `configs/` directory next to `settings.sources`
/// (the layout [`Settings::rooted_at`] produces).
pub fn write_config(settings: &Settings, name: &str, json: &str) -> PathBuf {
    let dir = settings.sources.parent().unwrap().join("configs");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

//! PNG export with one pixel per map cell

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{MapError, Result};
use crate::spatial::Map;
use crate::spatial::tiles::ColorCategory;

/// RGBA colour used for a colour category
pub const fn palette(color: ColorCategory) -> [u8; 4] {
    match color {
        ColorCategory::None => [0, 0, 0, 0],
        ColorCategory::Blue => [28, 48, 112, 255],
        ColorCategory::White => [224, 224, 224, 255],
        ColorCategory::Yellow => [232, 196, 64, 255],
        ColorCategory::Red => [184, 48, 40, 255],
    }
}

/// Render the map into an image, one pixel per tile
pub fn render_map(map: &Map) -> RgbaImage {
    let mut img = ImageBuffer::new(map.width() as u32, map.height() as u32);

    for (x, y, tile) in map.grid().indexed_tiles() {
        img.put_pixel(x as u32, y as u32, Rgba(palette(tile.color())));
    }

    img
}

/// Export the map as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map: &Map, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_map(map)
        .save(output_path)
        .map_err(|e| MapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

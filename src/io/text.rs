use std::path::Path;

use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::grid::TileGrid;
use crate::spatial::{Map, TileKind};

/// Write the map as glyph text, one line per row
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory or the file cannot be written
pub fn export_map_as_text(map: &Map, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, map.to_string()).map_err(|e| MapError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write map text",
        source: e,
    })
}

/// Parse glyph text back into a tile grid
///
/// Lines must all have the same length. Trailing newlines are ignored.
///
/// # Errors
///
/// Returns `InvalidParameter` for ragged lines or unknown glyphs
pub fn parse_grid(text: &str) -> Result<TileGrid> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.first().map_or(0, |line| line.chars().count());
    let mut grid = TileGrid::new(width, lines.len());

    for (y, line) in lines.iter().enumerate() {
        if line.chars().count() != width {
            return Err(invalid_parameter(
                "text",
                &format!("line {y}"),
                &format!("expected {width} glyphs"),
            ));
        }
        for (x, glyph) in line.chars().enumerate() {
            let tile = TileKind::from_glyph(glyph).ok_or_else(|| {
                invalid_parameter(
                    "text",
                    &glyph,
                    &format!("unknown glyph at ({x}, {y})"),
                )
            })?;
            grid.set(x as i32, y as i32, tile);
        }
    }

    Ok(grid)
}

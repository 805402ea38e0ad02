//! Fixtures for generated atlas images and label tables.
//!
//! Every tile of a generated atlas is filled with [`tile_color`] of its
//! position, so tests can tell which tile a pixel came from.

use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Fill colour of tile `(row, col)` in generated atlases
pub fn tile_color(row: usize, col: usize) -> Rgba<u8> {
    Rgba([(row * 30) as u8, (col * 30) as u8, 128, 255])
}

/// Atlas of `rows` x `cols` tiles, each `tile_w` x `tile_h` pixels
pub fn atlas_image(rows: usize, cols: usize, tile_w: u32, tile_h: u32) -> RgbaImage {
    RgbaImage::from_fn(cols as u32 * tile_w, rows as u32 * tile_h, |x, y| {
        tile_color((y / tile_h) as usize, (x / tile_w) as usize)
    })
}

pub fn write_atlas(path: &Path, rows: usize, cols: usize, tile_w: u32, tile_h: u32) -> Result<()> {
    atlas_image(rows, cols, tile_w, tile_h).save(path)?;
    Ok(())
}

/// Header-framed label table with cells named `r{row}c{col}`
pub fn label_table(rows: usize, cols: usize, delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut out = String::new();

    let mut header = vec!["level".to_string()];
    header.extend((0..cols).map(|c| format!("emotion{}", c)));
    out.push_str(&header.join(&sep));
    out.push('\n');

    for r in 0..rows {
        let mut row = vec![format!("intensity{}", r)];
        row.extend((0..cols).map(|c| format!("r{}c{}", r, c)));
        out.push_str(&row.join(&sep));
        out.push('\n');
    }
    out
}

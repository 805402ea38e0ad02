//! Custom assertions for eyegrid-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Label grid shape checks on `labels --format json`
//! - Atlas geometry checks on `inspect --format json`

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `labels` JSON describes a `rows` x `cols` grid with matching cell arrays.
pub fn assert_label_grid(json: &Value, rows: usize, cols: usize) -> Result<()> {
    let cells = json["cells"]
        .as_array()
        .context("Expected 'cells' array in JSON")?;

    if json["rows"] != rows || json["cols"] != cols {
        anyhow::bail!(
            "Expected {}x{} grid, got {}x{}",
            rows,
            cols,
            json["rows"],
            json["cols"]
        );
    }

    if cells.len() != rows {
        anyhow::bail!("Expected {} cell rows, got {}", rows, cells.len());
    }

    for (i, row) in cells.iter().enumerate() {
        let len = row
            .as_array()
            .with_context(|| format!("Cell row {} is not an array", i))?
            .len();
        if len != cols {
            anyhow::bail!("Cell row {} has {} cells, expected {}", i, len, cols);
        }
    }

    Ok(())
}

/// Assert the tile size reported by `inspect` JSON.
pub fn assert_tile_size(json: &Value, width: u64, height: u64) -> Result<()> {
    let w = json["tile_width"]
        .as_u64()
        .context("Expected 'tile_width' in JSON")?;
    let h = json["tile_height"]
        .as_u64()
        .context("Expected 'tile_height' in JSON")?;

    if (w, h) != (width, height) {
        anyhow::bail!("Expected tile {}x{}, got {}x{}", width, height, w, h);
    }
    Ok(())
}

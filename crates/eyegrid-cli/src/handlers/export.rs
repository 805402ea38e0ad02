use crate::types::OutputFormat;
use anyhow::{Context, Result};
use eyegrid_core::Cursor;
use eyegrid_runtime::{Config, Session};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct ExportView {
    out_dir: PathBuf,
    tiles: usize,
    manifest: PathBuf,
}

pub fn tile_file_name(cursor: Cursor) -> String {
    format!("r{}_c{}.png", cursor.row(), cursor.col())
}

pub fn handle(config: &Config, out_dir: &Path, format: OutputFormat) -> Result<()> {
    let session = Session::load(config)?;
    let view = export_tiles(&session, out_dir)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => println!(
            "Exported {} tiles to {}",
            view.tiles,
            view.out_dir.display()
        ),
    }
    Ok(())
}

fn export_tiles(session: &Session, out_dir: &Path) -> Result<ExportView> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let manifest = out_dir.join("manifest.csv");
    let mut wtr = csv::Writer::from_path(&manifest)
        .with_context(|| format!("Failed to create {}", manifest.display()))?;
    wtr.write_record(["row", "col", "intensity", "emotion", "label", "file"])?;

    let shape = session.atlas().shape();
    for cursor in shape.cursors() {
        let name = tile_file_name(cursor);
        let path = out_dir.join(&name);
        session
            .atlas()
            .tile(cursor)
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let entry = session.labels().lookup(cursor);
        wtr.write_record([
            cursor.row().to_string().as_str(),
            cursor.col().to_string().as_str(),
            entry.intensity,
            entry.emotion,
            entry.label,
            name.as_str(),
        ])?;
        tracing::debug!(cursor = %cursor, file = %name, "exported tile");
    }
    wtr.flush()?;

    tracing::info!(tiles = shape.cell_count(), dir = %out_dir.display(), "export finished");
    Ok(ExportView {
        out_dir: out_dir.to_path_buf(),
        tiles: shape.cell_count(),
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyegrid_core::{GridShape, LabelTable, TileAtlas};
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn test_export_writes_tiles_and_manifest() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let shape = GridShape::REFERENCE;
        let image = RgbaImage::from_fn(21, 14, |x, _| Rgba([(x / 3) as u8, 0, 0, 255]));
        let atlas = TileAtlas::from_image(DynamicImage::ImageRgba8(image), shape, false)?;
        let session = Session::new(atlas, LabelTable::builtin(), true)?;

        let view = export_tiles(&session, dir.path())?;
        assert_eq!(view.tiles, 49);

        let tile = image::open(dir.path().join("r3_c4.png"))?.to_rgba8();
        assert_eq!(tile.dimensions(), (3, 2));
        assert_eq!(*tile.get_pixel(0, 0), Rgba([4, 0, 0, 255]));

        let mut rdr = csv::Reader::from_path(&view.manifest)?;
        let records: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>()?;
        assert_eq!(records.len(), 49);
        assert_eq!(
            records[1].iter().collect::<Vec<_>>(),
            ["0", "1", "Faint", "Happy", "Faint Happy", "r0_c1.png"]
        );
        Ok(())
    }
}

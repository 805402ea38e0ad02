use crate::types::OutputFormat;
use anyhow::{Context, Result};
use eyegrid_core::AtlasGeometry;
use eyegrid_runtime::Config;
use eyegrid_runtime::session::load_atlas;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct InspectView {
    path: PathBuf,
    grayscale: bool,
    #[serde(flatten)]
    geometry: AtlasGeometry,
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let atlas = load_atlas(config, config.shape()?).context("Failed to load atlas")?;
    let view = InspectView {
        path: config.atlas_path().unwrap_or_default(),
        grayscale: config.atlas.grayscale,
        geometry: atlas.geometry(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => print!("{}", format_plain(&view)),
    }
    Ok(())
}

fn format_plain(view: &InspectView) -> String {
    let g = &view.geometry;
    let mut out = String::new();
    out.push_str(&format!("atlas      {}\n", view.path.display()));
    out.push_str(&format!("size       {}x{}\n", g.width, g.height));
    out.push_str(&format!("grid       {}x{} (rows x cols)\n", g.rows, g.cols));
    out.push_str(&format!("tile       {}x{}\n", g.tile_width, g.tile_height));
    out.push_str(&format!(
        "discarded  {} px right, {} px bottom\n",
        g.discarded_x, g.discarded_y
    ));
    out.push_str(&format!(
        "mode       {}\n",
        if view.grayscale { "grayscale" } else { "color" }
    ));
    out
}

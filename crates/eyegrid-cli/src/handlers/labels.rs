use crate::types::OutputFormat;
use anyhow::Result;
use eyegrid_core::LabelTable;
use eyegrid_runtime::Config;
use eyegrid_runtime::session::load_labels;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct LabelsView<'a> {
    rows: usize,
    cols: usize,
    corner: &'a str,
    col_headers: &'a [String],
    row_headers: Vec<&'a str>,
    cells: Vec<&'a [String]>,
}

impl<'a> LabelsView<'a> {
    fn new(table: &'a LabelTable) -> Self {
        let shape = table.shape();
        Self {
            rows: shape.rows(),
            cols: shape.cols(),
            corner: table.corner(),
            col_headers: table.col_headers(),
            row_headers: table.row_headers().collect(),
            cells: (0..shape.rows()).map(|r| table.data_row(r)).collect(),
        }
    }
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let table = load_labels(config, config.shape()?)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&LabelsView::new(&table))?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", format_table(&table, color));
        }
    }
    Ok(())
}

/// Aligned grid; header row and header column are bold when `color` is set
pub(crate) fn format_table(table: &LabelTable, color: bool) -> String {
    let rows = table.rows();
    let width_count = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut widths = vec![0usize; width_count];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (r, row) in rows.iter().enumerate() {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                line.push_str("  ");
            }
            let padded = format!("{:<width$}", cell, width = widths[c]);
            if color && (r == 0 || c == 0) {
                line.push_str(&padded.bold().to_string());
            } else {
                line.push_str(&padded);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

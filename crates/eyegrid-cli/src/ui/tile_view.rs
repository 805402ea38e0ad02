//! Tile View Component
//!
//! Draws a tile with half-block characters (two pixels per cell, top pixel
//! as foreground, bottom pixel as background) and overlays its label on the
//! last line, bottom-left.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const UPPER_HALF: char = '▀';

pub struct TileView<'a> {
    tile: &'a RgbaImage,
    label: &'a str,
}

impl<'a> TileView<'a> {
    pub fn new(tile: &'a RgbaImage, label: &'a str) -> Self {
        Self { tile, label }
    }
}

/// Largest size with the tile's aspect ratio inside `max_w` x `max_h`
pub fn fit(tile_w: u32, tile_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if tile_w == 0 || tile_h == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    let scale = f64::min(
        max_w as f64 / tile_w as f64,
        max_h as f64 / tile_h as f64,
    );
    let w = ((tile_w as f64 * scale).floor() as u32).clamp(1, max_w);
    let h = ((tile_h as f64 * scale).floor() as u32).clamp(1, max_h);
    (w, h)
}

fn to_color(px: &Rgba<u8>) -> Color {
    Color::Rgb(px[0], px[1], px[2])
}

impl<'a> Widget for TileView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (tile_w, tile_h) = self.tile.dimensions();
        let (w, h) = fit(
            tile_w,
            tile_h,
            area.width as u32,
            area.height as u32 * 2,
        );
        if w == 0 || h == 0 {
            return;
        }

        let scaled = imageops::resize(self.tile, w, h, FilterType::Nearest);
        let cell_rows = h.div_ceil(2) as u16;
        let left = area.x + (area.width - w as u16) / 2;
        let top = area.y + (area.height - cell_rows) / 2;

        for cy in 0..cell_rows {
            for cx in 0..w as u16 {
                let upper = scaled.get_pixel(cx as u32, cy as u32 * 2);
                let lower_y = cy as u32 * 2 + 1;
                let bg = if lower_y < h {
                    to_color(scaled.get_pixel(cx as u32, lower_y))
                } else {
                    Color::Reset
                };
                if let Some(cell) = buf.cell_mut((left + cx, top + cy)) {
                    cell.set_char(UPPER_HALF).set_fg(to_color(upper)).set_bg(bg);
                }
            }
        }

        let label_y = top + cell_rows - 1;
        let label_x = left + u16::from(w > 2);
        let max_width = (w as u16).saturating_sub(label_x - left) as usize;
        buf.set_stringn(
            label_x,
            label_y,
            self.label,
            max_width,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        assert_eq!(fit(64, 32, 80, 48), (80, 40));
        assert_eq!(fit(64, 32, 40, 48), (40, 20));
        assert_eq!(fit(10, 10, 20, 6), (6, 6));
        assert_eq!(fit(10, 10, 0, 6), (0, 0));
    }

    #[test]
    fn test_render_uses_half_blocks() {
        // 2x2 tile: red over blue in both columns
        let tile = RgbaImage::from_fn(2, 2, |_, y| {
            if y == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        TileView::new(&tile, "").render(area, &mut buf);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_label_is_overlaid_on_last_line() {
        let tile = RgbaImage::from_pixel(8, 4, Rgba([10, 10, 10, 255]));
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        TileView::new(&tile, "Happy").render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "H");
        assert_eq!(buf[(5, 1)].symbol(), "y");
        assert_eq!(buf[(1, 1)].fg, Color::Green);
        // Background keeps the pixel colour underneath
        assert_eq!(buf[(1, 1)].bg, Color::Rgb(10, 10, 10));
        assert_eq!(buf[(0, 0)].symbol(), "▀");
    }
}

use crate::grid::{Cursor, GridShape};
use crate::{Error, Result};
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use std::path::Path;

/// A single bitmap partitioned into a fixed grid of equally sized tiles
#[derive(Debug, Clone)]
pub struct TileAtlas {
    image: RgbaImage,
    shape: GridShape,
    tile_width: u32,
    tile_height: u32,
}

/// Pixel layout of an atlas over its grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtlasGeometry {
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    pub cols: usize,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Pixels past the last tile column, never shown
    pub discarded_x: u32,
    /// Pixels past the last tile row, never shown
    pub discarded_y: u32,
}

impl TileAtlas {
    /// Partition an already decoded image. With `grayscale` the bitmap is
    /// reduced to luma before slicing.
    pub fn from_image(image: DynamicImage, shape: GridShape, grayscale: bool) -> Result<Self> {
        let image = if grayscale {
            image.grayscale().to_rgba8()
        } else {
            image.to_rgba8()
        };
        let (width, height) = image.dimensions();

        let cols = u32::try_from(shape.cols()).unwrap_or(u32::MAX);
        let rows = u32::try_from(shape.rows()).unwrap_or(u32::MAX);
        let tile_width = width / cols;
        let tile_height = height / rows;

        if tile_width == 0 || tile_height == 0 {
            return Err(Error::AtlasTooSmall {
                width,
                height,
                rows: shape.rows(),
                cols: shape.cols(),
            });
        }

        let atlas = Self {
            image,
            shape,
            tile_width,
            tile_height,
        };

        let geometry = atlas.geometry();
        if geometry.discarded_x > 0 || geometry.discarded_y > 0 {
            tracing::warn!(
                width,
                height,
                grid = %shape,
                discarded_x = geometry.discarded_x,
                discarded_y = geometry.discarded_y,
                "atlas size is not a multiple of the grid; trailing pixels are ignored"
            );
        }

        Ok(atlas)
    }

    /// Decode an atlas image file (PNG or JPEG)
    pub fn open(path: &Path, shape: GridShape, grayscale: bool) -> Result<Self> {
        let image = image::open(path).map_err(|err| match err {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other),
        })?;
        let atlas = Self::from_image(image, shape, grayscale)?;
        tracing::info!(
            path = %path.display(),
            tile_width = atlas.tile_width,
            tile_height = atlas.tile_height,
            "loaded tile atlas"
        );
        Ok(atlas)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    pub fn geometry(&self) -> AtlasGeometry {
        let (width, height) = self.image.dimensions();
        AtlasGeometry {
            width,
            height,
            rows: self.shape.rows(),
            cols: self.shape.cols(),
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            discarded_x: width - self.tile_width * self.shape.cols() as u32,
            discarded_y: height - self.tile_height * self.shape.rows() as u32,
        }
    }

    /// Copy out the tile under `cursor`. The returned buffer is independent
    /// of the atlas and may be mutated freely.
    ///
    /// # Panics
    ///
    /// Panics if the cursor lies outside the atlas grid.
    pub fn tile(&self, cursor: Cursor) -> RgbaImage {
        assert!(
            self.shape.contains(cursor.row(), cursor.col()),
            "cursor {} outside {} atlas",
            cursor,
            self.shape
        );
        self.crop(cursor.row(), cursor.col())
    }

    /// Checked tile extraction by raw indices
    pub fn get(&self, row: usize, col: usize) -> Result<RgbaImage> {
        let cursor = self.shape.cursor(row, col)?;
        Ok(self.crop(cursor.row(), cursor.col()))
    }

    fn crop(&self, row: usize, col: usize) -> RgbaImage {
        let x = col as u32 * self.tile_width;
        let y = row as u32 * self.tile_height;
        image::imageops::crop_imm(&self.image, x, y, self.tile_width, self.tile_height).to_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Each tile is filled with a colour encoding its (row, col)
    fn striped(shape: GridShape, tile_w: u32, tile_h: u32, extra: u32) -> DynamicImage {
        let width = tile_w * shape.cols() as u32 + extra;
        let height = tile_h * shape.rows() as u32 + extra;
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let col = (x / tile_w) as u8;
            let row = (y / tile_h) as u8;
            Rgba([row * 10, col * 10, 200, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_tile_extracts_its_own_region() {
        let shape = GridShape::new(3, 4).unwrap();
        let atlas = TileAtlas::from_image(striped(shape, 5, 6, 0), shape, false).unwrap();
        assert_eq!(atlas.tile_size(), (5, 6));

        for cursor in shape.cursors() {
            let tile = atlas.tile(cursor);
            assert_eq!(tile.dimensions(), (5, 6));
            let expected = Rgba([cursor.row() as u8 * 10, cursor.col() as u8 * 10, 200, 255]);
            assert!(tile.pixels().all(|p| *p == expected), "tile {}", cursor);
        }
    }

    #[test]
    fn test_remainder_pixels_are_discarded() {
        let shape = GridShape::new(2, 2).unwrap();
        let atlas = TileAtlas::from_image(striped(shape, 4, 4, 3), shape, false).unwrap();
        let geometry = atlas.geometry();

        assert_eq!((geometry.width, geometry.height), (11, 11));
        assert_eq!((geometry.tile_width, geometry.tile_height), (5, 5));
        assert_eq!((geometry.discarded_x, geometry.discarded_y), (1, 1));
    }

    #[test]
    fn test_tiles_are_independent_copies() {
        let shape = GridShape::new(1, 2).unwrap();
        let atlas = TileAtlas::from_image(striped(shape, 3, 3, 0), shape, false).unwrap();
        let cursor = shape.origin();

        let mut tile = atlas.tile(cursor);
        for p in tile.pixels_mut() {
            *p = Rgba([1, 2, 3, 4]);
        }

        let fresh = atlas.tile(cursor);
        assert_eq!(*fresh.get_pixel(0, 0), Rgba([0, 0, 200, 255]));
    }

    #[test]
    fn test_grayscale_equalizes_channels() {
        let shape = GridShape::new(1, 1).unwrap();
        let atlas = TileAtlas::from_image(striped(shape, 2, 2, 0), shape, true).unwrap();
        let tile = atlas.tile(shape.origin());
        let Rgba([r, g, b, _]) = *tile.get_pixel(0, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_atlas_smaller_than_grid() {
        let shape = GridShape::REFERENCE;
        let tiny = DynamicImage::ImageRgba8(RgbaImage::new(6, 20));
        assert!(matches!(
            TileAtlas::from_image(tiny, shape, false),
            Err(Error::AtlasTooSmall { width: 6, .. })
        ));
    }

    #[test]
    fn test_checked_get_rejects_out_of_range() {
        let shape = GridShape::new(2, 2).unwrap();
        let atlas = TileAtlas::from_image(striped(shape, 2, 2, 0), shape, false).unwrap();
        assert!(atlas.get(1, 1).is_ok());
        assert!(matches!(
            atlas.get(2, 1),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_open_round_trips_png() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("atlas.png");
        let shape = GridShape::new(2, 3).unwrap();
        striped(shape, 4, 4, 0).save(&path)?;

        let atlas = TileAtlas::open(&path, shape, false)?;
        assert_eq!(atlas.geometry().width, 12);
        assert_eq!(*atlas.get(1, 2)?.get_pixel(0, 0), Rgba([10, 20, 200, 255]));
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let shape = GridShape::REFERENCE;
        assert!(matches!(
            TileAtlas::open(Path::new("/nonexistent/atlas.png"), shape, true),
            Err(Error::Io(_))
        ));
    }
}

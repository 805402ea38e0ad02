use crate::config::Config;
use crate::{Error, Result};
use eyegrid_core::{
    Cursor, GridShape, InputEvent, LabelTable, NavigationState, PlaybackMode, TileAtlas,
};
use image::RgbaImage;

/// One rendered step: the tile under the cursor and its labels
#[derive(Debug, Clone)]
pub struct Frame {
    pub cursor: Cursor,
    pub mode: PlaybackMode,
    pub tile: RgbaImage,
    pub label: String,
    pub intensity: String,
    pub emotion: String,
}

/// Loaded atlas and labels plus the navigation state that walks them.
///
/// Atlas and labels are read-only once the session exists; all cursor
/// mutation goes through [`Session::handle`].
#[derive(Debug)]
pub struct Session {
    atlas: TileAtlas,
    labels: LabelTable,
    nav: NavigationState,
}

impl Session {
    pub fn new(atlas: TileAtlas, labels: LabelTable, autoplay: bool) -> Result<Self> {
        if atlas.shape() != labels.shape() {
            return Err(Error::Config(format!(
                "atlas grid {} does not match label grid {}",
                atlas.shape(),
                labels.shape()
            )));
        }
        let nav = NavigationState::new(atlas.shape(), autoplay);
        Ok(Self { atlas, labels, nav })
    }

    /// Load atlas and labels named by the configuration. Any failure here is
    /// fatal for the session.
    pub fn load(config: &Config) -> Result<Self> {
        config.validate()?;
        let shape = config.shape()?;
        let labels = load_labels(config, shape)?;
        let atlas = load_atlas(config, shape)?;
        Self::new(atlas, labels, config.playback.autoplay)
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Resolve the current cursor to its tile and labels
    pub fn frame(&self) -> Frame {
        let cursor = self.nav.cursor();
        let entry = self.labels.lookup(cursor);
        Frame {
            cursor,
            mode: self.nav.mode(),
            tile: self.atlas.tile(cursor),
            label: entry.label.to_string(),
            intensity: entry.intensity.to_string(),
            emotion: entry.emotion.to_string(),
        }
    }

    /// Feed one event. Returns `false` when the session should end.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let before = self.nav.cursor();
        let running = self.nav.apply(event);
        if running {
            tracing::debug!(
                ?event,
                from = %before,
                to = %self.nav.cursor(),
                mode = %self.nav.mode(),
                "navigation step"
            );
        }
        running
    }
}

/// Label table from the configured file, or the built-in set when none is set
pub fn load_labels(config: &Config, shape: GridShape) -> Result<LabelTable> {
    match config.labels_path() {
        Some(path) => Ok(LabelTable::open(&path, config.delimiter()?, shape)?),
        None if shape == GridShape::REFERENCE => Ok(LabelTable::builtin()),
        None => Err(Error::Config(format!(
            "built-in labels only cover a {} grid; set labels.path for {}",
            GridShape::REFERENCE,
            shape
        ))),
    }
}

pub fn load_atlas(config: &Config, shape: GridShape) -> Result<TileAtlas> {
    let path = config.atlas_path().ok_or_else(|| {
        Error::Config("no atlas image configured (use --atlas or atlas.path)".to_string())
    })?;
    Ok(TileAtlas::open(&path, shape, config.atlas.grayscale)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};
    use std::path::PathBuf;

    fn atlas(shape: GridShape) -> TileAtlas {
        let img = RgbaImage::from_fn(shape.cols() as u32 * 2, shape.rows() as u32 * 2, |x, y| {
            Rgba([(y / 2) as u8, (x / 2) as u8, 0, 255])
        });
        TileAtlas::from_image(DynamicImage::ImageRgba8(img), shape, false).unwrap()
    }

    #[test]
    fn test_frame_tracks_cursor() {
        let shape = GridShape::REFERENCE;
        let mut session = Session::new(atlas(shape), LabelTable::builtin(), true).unwrap();

        let frame = session.frame();
        assert_eq!((frame.cursor.row(), frame.cursor.col()), (0, 0));
        assert_eq!(frame.label, "Faint Neutral");
        assert_eq!(frame.mode, PlaybackMode::Autoplay);

        assert!(session.handle(InputEvent::MoveUp));
        assert!(session.handle(InputEvent::MoveLeft));
        let frame = session.frame();
        assert_eq!((frame.cursor.row(), frame.cursor.col()), (6, 6));
        assert_eq!(frame.label, "Extreme Sleepy");
        assert_eq!(frame.intensity, "Extreme");
        assert_eq!(frame.emotion, "Sleepy");
        assert_eq!(*frame.tile.get_pixel(0, 0), Rgba([6, 6, 0, 255]));

        assert!(!session.handle(InputEvent::Quit));
    }

    #[test]
    fn test_mismatched_grids_are_rejected() {
        let shape = GridShape::new(2, 2).unwrap();
        let err = Session::new(atlas(shape), LabelTable::builtin(), true).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builtin_labels_need_reference_grid() {
        let mut config = Config::default();
        config.grid.rows = 3;
        let shape = config.shape().unwrap();
        assert!(matches!(load_labels(&config, shape), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_atlas_path() {
        let config = Config::default();
        assert!(matches!(Session::load(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let shape = GridShape::new(1, 2).unwrap();

        let atlas_path = dir.path().join("atlas.png");
        RgbaImage::from_pixel(8, 4, Rgba([9, 9, 9, 255]))
            .save(&atlas_path)
            .map_err(eyegrid_core::Error::from)?;
        let labels_path = dir.path().join("labels.txt");
        std::fs::write(&labels_path, "lvl;a;b\nlow;x;y\n")?;

        let mut config = Config::default();
        config.grid.rows = shape.rows();
        config.grid.cols = shape.cols();
        config.atlas.path = Some(atlas_path);
        config.labels.path = Some(labels_path);
        config.labels.delimiter = ';';
        config.playback.autoplay = false;

        let mut session = Session::load(&config)?;
        assert_eq!(session.atlas().tile_size(), (4, 4));
        assert!(!session.navigation().autoplay());

        session.handle(InputEvent::MoveRight);
        assert_eq!(session.frame().label, "y");
        Ok(())
    }

    #[test]
    fn test_shape_mismatch_in_label_file_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let labels_path = dir.path().join("labels.csv");
        std::fs::write(&labels_path, "h,a\nr,x\n")?;

        let mut config = Config::default();
        config.labels.path = Some(labels_path);
        config.atlas.path = Some(PathBuf::from("/unused.png"));

        assert!(matches!(
            Session::load(&config),
            Err(Error::Core(eyegrid_core::Error::ShapeMismatch { .. }))
        ));
        Ok(())
    }
}

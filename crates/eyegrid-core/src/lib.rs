// Core layer: grid geometry, navigation policy, label and tile lookup.
// Nothing here touches a terminal or a clock; the runtime drives it.

pub mod atlas;
mod builtin;
pub mod error;
pub mod grid;
pub mod labels;
pub mod navigation;

pub use atlas::{AtlasGeometry, TileAtlas};
pub use error::{Error, Result};
pub use grid::{Cursor, GridShape};
pub use labels::{LabelEntry, LabelTable};
pub use navigation::{InputEvent, NavigationState, PlaybackMode, Step};

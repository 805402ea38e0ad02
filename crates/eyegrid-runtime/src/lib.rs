pub mod config;
pub mod error;
pub mod playback;
pub mod session;

pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use playback::{EventSource, FrameSink, PlaybackLoop, PlaybackSummary};
pub use session::{Frame, Session};

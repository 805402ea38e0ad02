//! Frame/input cadence around a [`Session`].
//!
//! Each iteration renders the current frame, then waits for one event. The
//! wait is bounded by the playback delay only while autoplay is on; when it
//! elapses the source reports [`InputEvent::Timeout`]. Inputs with no
//! navigation meaning redraw the frame without restarting the delay.

use crate::session::{Frame, Session};
use crate::Result;
use eyegrid_core::{Cursor, InputEvent};
use std::time::{Duration, Instant};

/// Blocking supplier of input events
pub trait EventSource {
    /// Wait for the next event. `None` waits indefinitely; on expiry the
    /// source returns `InputEvent::Timeout`.
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<InputEvent>;
}

/// Presents frames to the operator
pub trait FrameSink {
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Distinct steps rendered, excluding redraws
    pub frames: usize,
    pub last_cursor: Cursor,
}

pub struct PlaybackLoop {
    delay: Duration,
}

impl PlaybackLoop {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Drive the session until a `Quit` event arrives.
    pub fn run<S, R>(
        &self,
        session: &mut Session,
        source: &mut S,
        sink: &mut R,
    ) -> Result<PlaybackSummary>
    where
        S: EventSource,
        R: FrameSink,
    {
        let mut frames = 0;

        loop {
            let frame = session.frame();
            sink.render(&frame)?;
            frames += 1;

            let deadline = session
                .navigation()
                .autoplay()
                .then(|| Instant::now() + self.delay);

            let event = loop {
                let timeout = deadline.map(|d| d.saturating_duration_since(Instant::now()));
                match source.next_event(timeout)? {
                    InputEvent::None => sink.render(&frame)?,
                    event => break event,
                }
            };

            if !session.handle(event) {
                break;
            }
        }

        let summary = PlaybackSummary {
            frames,
            last_cursor: session.navigation().cursor(),
        };
        tracing::info!(
            frames = summary.frames,
            cursor = %summary.last_cursor,
            "playback finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyegrid_core::{GridShape, LabelTable, PlaybackMode, TileAtlas};
    use image::{DynamicImage, RgbaImage};
    use std::collections::VecDeque;

    /// Replays a fixed script, recording the timeout it was asked to honour
    struct Scripted {
        events: VecDeque<InputEvent>,
        timeouts: Vec<Option<Duration>>,
    }

    impl Scripted {
        fn new(events: &[InputEvent]) -> Self {
            Self {
                events: events.iter().copied().collect(),
                timeouts: Vec::new(),
            }
        }
    }

    impl EventSource for Scripted {
        fn next_event(&mut self, timeout: Option<Duration>) -> Result<InputEvent> {
            self.timeouts.push(timeout);
            Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, usize, String, PlaybackMode)>,
    }

    impl FrameSink for Recorder {
        fn render(&mut self, frame: &Frame) -> Result<()> {
            self.frames.push((
                frame.cursor.row(),
                frame.cursor.col(),
                frame.label.clone(),
                frame.mode,
            ));
            Ok(())
        }
    }

    fn session(autoplay: bool) -> Session {
        let shape = GridShape::REFERENCE;
        let image = DynamicImage::ImageRgba8(RgbaImage::new(14, 14));
        let atlas = TileAtlas::from_image(image, shape, true).unwrap();
        Session::new(atlas, LabelTable::builtin(), autoplay).unwrap()
    }

    #[test]
    fn test_slideshow_renders_raster_order() {
        let mut session = session(true);
        let mut source = Scripted::new(&[InputEvent::Timeout; 7]);
        let mut sink = Recorder::default();

        let summary = PlaybackLoop::new(Duration::from_millis(600))
            .run(&mut session, &mut source, &mut sink)
            .unwrap();

        let cells: Vec<(usize, usize)> = sink.frames.iter().map(|f| (f.0, f.1)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0)]
        );
        assert_eq!(sink.frames[1].2, "Faint Happy");
        assert_eq!(summary.frames, 8);
        assert_eq!((summary.last_cursor.row(), summary.last_cursor.col()), (1, 0));
    }

    #[test]
    fn test_manual_mode_waits_without_timeout() {
        let mut session = session(false);
        let mut source = Scripted::new(&[InputEvent::MoveDown, InputEvent::Timeout]);
        let mut sink = Recorder::default();

        PlaybackLoop::new(Duration::from_millis(600))
            .run(&mut session, &mut source, &mut sink)
            .unwrap();

        assert!(source.timeouts.iter().all(Option::is_none));
        let cells: Vec<(usize, usize)> = sink.frames.iter().map(|f| (f.0, f.1)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (1, 0)]);
    }

    #[test]
    fn test_autoplay_wait_is_bounded_by_delay() {
        let mut session = session(true);
        let mut source = Scripted::new(&[InputEvent::ToggleAutoplay]);
        let mut sink = Recorder::default();
        let delay = Duration::from_millis(600);

        PlaybackLoop::new(delay)
            .run(&mut session, &mut source, &mut sink)
            .unwrap();

        let first = source.timeouts[0].expect("autoplay wait must be bounded");
        assert!(first <= delay);
        // After the toggle the loop waits without a bound
        assert_eq!(source.timeouts[1], None);
        assert_eq!(sink.frames[1].3, PlaybackMode::Manual);
        assert_eq!((sink.frames[1].0, sink.frames[1].1), (0, 0));
    }

    #[test]
    fn test_none_event_redraws_without_stepping() {
        let mut session = session(true);
        let mut source = Scripted::new(&[InputEvent::None, InputEvent::None, InputEvent::Timeout]);
        let mut sink = Recorder::default();

        let summary = PlaybackLoop::new(Duration::from_millis(600))
            .run(&mut session, &mut source, &mut sink)
            .unwrap();

        let cells: Vec<(usize, usize)> = sink.frames.iter().map(|f| (f.0, f.1)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 0), (0, 0), (0, 1)]);
        assert_eq!(summary.frames, 2);
    }

    #[test]
    fn test_key_during_autoplay_moves_once() {
        let mut session = session(true);
        let mut source = Scripted::new(&[InputEvent::MoveRight]);
        let mut sink = Recorder::default();

        let summary = PlaybackLoop::new(Duration::from_millis(600))
            .run(&mut session, &mut source, &mut sink)
            .unwrap();

        assert_eq!((summary.last_cursor.row(), summary.last_cursor.col()), (0, 1));
    }
}

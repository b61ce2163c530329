//! TrackingDemo: the per-frame loop tying source, tracker, annotator and display together.

use std::time::Instant;

use log::{debug, info};

use crate::config::{DemoConfig, InitialRegion, SourceSpec};
use crate::error::Result;
use crate::frame::Canvas;
use crate::tracker::{TrackerSession, TrackingStrategy};

use super::detector::{CircleDetector, FeatureAnnotator};
use super::display::{DisplaySink, KeyAction, KeyWait};
use super::overlay;
use super::source::FrameSource;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The source ran out of frames
    EndOfStream,
    /// Escape or `q` was pressed
    UserQuit,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames that went through a tracker update, excluding the first frame
    pub tracked_frames: u64,
    /// Updates that failed to relocate the target
    pub failures: u64,
    pub stop: StopReason,
}

/// Process exit status for a finished run: `0` on success, `1` on any error.
pub fn exit_status<E>(result: &std::result::Result<RunSummary, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// The tracking demo: one tracker session, an optional circle annotator and a display.
///
/// Single-threaded. Every frame is read, tracked, annotated, drawn and shown
/// before the next one is read.
pub struct TrackingDemo<T, D, W> {
    config: DemoConfig,
    session: TrackerSession<T>,
    annotator: Option<FeatureAnnotator<D>>,
    display: W,
}

impl<T, D, W> TrackingDemo<T, D, W> {
    /// Create a demo from its parts.
    ///
    /// The circle annotator is only kept when `config.annotate_circles` is set.
    pub fn new(config: DemoConfig, tracker: T, detector: D, display: W) -> Self {
        let annotator = config
            .annotate_circles
            .then(|| FeatureAnnotator::new(detector, config.markers.clone()));
        Self {
            config,
            session: TrackerSession::new(tracker),
            annotator,
            display,
        }
    }

    /// Get a reference to the tracker session.
    pub fn session(&self) -> &TrackerSession<T> {
        &self.session
    }

    /// Get a reference to the display.
    pub fn display(&self) -> &W {
        &self.display
    }

    /// Open the configured source with `open` and run until end-of-stream or quit.
    ///
    /// Nothing is shown and the tracker is not touched if opening fails. The
    /// display is closed and the source dropped before returning, on success
    /// and on error alike.
    pub fn run<S, O>(&mut self, open: O) -> Result<RunSummary>
    where
        O: FnOnce(&SourceSpec) -> Result<S>,
        S: FrameSource,
        S::Frame: Canvas,
        T: TrackingStrategy<S::Frame>,
        D: CircleDetector<S::Frame>,
        W: DisplaySink<S::Frame>,
    {
        let mut source = open(&self.config.source)?;
        info!("opened {}", self.config.source);

        let outcome = self.drive(&mut source);
        let closed = self.display.close();
        drop(source);

        let summary = outcome?;
        closed?;
        info!(
            "stopped ({:?}) after {} frames, {} tracking failures",
            summary.stop, summary.tracked_frames, summary.failures
        );
        Ok(summary)
    }

    fn drive<S>(&mut self, source: &mut S) -> Result<RunSummary>
    where
        S: FrameSource,
        S::Frame: Canvas,
        T: TrackingStrategy<S::Frame>,
        D: CircleDetector<S::Frame>,
        W: DisplaySink<S::Frame>,
    {
        let Some(mut first) = source.read()? else {
            info!("source produced no frames");
            return Ok(self.summary(0, StopReason::EndOfStream));
        };

        let region = match self.config.initial_region {
            InitialRegion::Fixed(region) => region,
            InitialRegion::Select => self.display.select_region(&first)?,
        };
        self.session.init(&first, region)?;

        let region = self.session.region();
        overlay::draw_initial_region(&mut first, &region, &self.config.overlay)?;
        self.display.present(&first)?;
        info!("waiting for a key press to confirm the target");
        self.display.wait_key(KeyWait::Indefinitely)?;
        drop(first);

        let poll = KeyWait::Poll(self.config.poll_interval);
        let mut tracked_frames = 0;
        let stop = loop {
            let Some(mut frame) = source.read()? else {
                break StopReason::EndOfStream;
            };
            tracked_frames += 1;

            let started = Instant::now();
            let update = self.session.update(&frame)?;
            let fps = overlay::fps_from_elapsed(started.elapsed());

            if let Some(annotator) = &self.annotator {
                let circles = annotator.annotate(&mut frame)?;
                debug!("frame {}: {} circles", tracked_frames, circles.len());
            }

            overlay::draw_status(&mut frame, &update, fps, &self.config.overlay)?;
            self.display.present(&frame)?;

            let key = self.display.wait_key(poll)?;
            if KeyAction::from_key(key) == KeyAction::Quit {
                break StopReason::UserQuit;
            }
        };

        Ok(self.summary(tracked_frames, stop))
    }

    fn summary(&self, tracked_frames: u64, stop: StopReason) -> RunSummary {
        RunSummary {
            tracked_frames,
            failures: self.session.failures(),
            stop,
        }
    }
}

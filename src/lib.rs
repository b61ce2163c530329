//! Single-object tracking demo.
//!
//! Reads frames from a video file or capture device, follows one target with a
//! kernelized correlation filter tracker, highlights circular features and shows
//! the result in a window.
//!
//! The loop in [`integration::TrackingDemo`] is generic over its frame source,
//! tracking strategy, circle detector and display, so it runs against in-memory
//! fakes in tests. OpenCV implementations are enabled with the `opencv-backend`
//! feature.

pub mod config;
pub mod error;
pub mod frame;
pub mod integration;
pub mod tracker;

pub use config::{CircleParams, DemoConfig, InitialRegion, SourceSpec};
pub use error::{Error, Result};
pub use frame::{Canvas, Color, Extent, Point, Raster, Stroke};
pub use integration::{
    Circle, CircleDetector, DisplaySink, FeatureAnnotator, FrameSource, KeyAction, KeyWait,
    RunSummary, StopReason, TrackingDemo,
};
pub use tracker::{Rect, SessionState, TrackUpdate, TrackerSession, TrackingStrategy};

//! Integration module connecting frame sources, trackers, detectors and displays.
//!
//! This module provides the traits the demo loop is generic over and the loop
//! itself. OpenCV implementations of every trait live in [`opencv_backend`]
//! behind the `opencv-backend` feature.

mod detector;
mod display;
mod overlay;
mod pipeline;
mod source;

pub use detector::{Circle, CircleDetector, FeatureAnnotator, MarkerStyle, draw_markers};
pub use display::{DisplaySink, KEY_ESCAPE, KEY_QUIT, KeyAction, KeyWait};
pub use overlay::{
    OverlayStyle, draw_initial_region, draw_status, fps_from_elapsed, fps_label,
};
pub use pipeline::{RunSummary, StopReason, TrackingDemo, exit_status};
pub use source::FrameSource;

#[cfg(feature = "opencv-backend")]
pub mod opencv_backend;

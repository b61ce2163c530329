//! OpenCV backend for the tracking demo.
//!
//! Provides a `VideoCapture` frame source, the KCF tracker, a Hough circle
//! detector, a highgui window, and [`Canvas`](crate::frame::Canvas) for `Mat`.
//!
//! # Example
//!
//! ```ignore
//! use port_tracker::DemoConfig;
//! use port_tracker::integration::opencv_backend;
//!
//! let summary = opencv_backend::run(DemoConfig::default().with_device(0))?;
//! println!("tracked {} frames", summary.tracked_frames);
//! ```

mod canvas;
mod capture;
mod highgui;
mod hough;
mod kcf;

pub use capture::VideoSource;
pub use highgui::HighGuiDisplay;
pub use hough::HoughCircles;
pub use kcf::KcfTracker;

use crate::config::DemoConfig;
use crate::error::Result;

use super::{RunSummary, TrackingDemo};

/// The demo wired to OpenCV.
pub type OpenCvDemo = TrackingDemo<KcfTracker, HoughCircles, HighGuiDisplay>;

/// Build the OpenCV demo for `config`.
pub fn demo(config: DemoConfig) -> Result<OpenCvDemo> {
    let tracker = KcfTracker::new()?;
    let detector = HoughCircles::new(config.circles.clone());
    let display = HighGuiDisplay::new(config.window_title.clone());
    Ok(TrackingDemo::new(config, tracker, detector, display))
}

/// Run the OpenCV demo for `config` to completion.
pub fn run(config: DemoConfig) -> Result<RunSummary> {
    demo(config)?.run(VideoSource::open)
}

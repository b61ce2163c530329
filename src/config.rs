//! Demo configuration.
//!
//! Everything the demo needs to know before the first frame: where frames come
//! from, where the target starts, and how the overlay looks. There is no CLI;
//! edit [`DemoConfig::default`] or use the `with_*` methods.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::integration::{MarkerStyle, OverlayStyle};
use crate::tracker::Rect;

/// Capture device used when switching to live video.
pub const DEFAULT_DEVICE_INDEX: i32 = 1;

/// Video file played by default, relative to the working directory.
pub const DEFAULT_VIDEO: &str = "refuel_port.mp4";

/// Where frames come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    /// A video file decoded frame by frame
    File(PathBuf),
    /// A live capture device by index
    Device(i32),
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Device(index) => write!(f, "device #{}", index),
        }
    }
}

/// How the target's starting region is chosen on the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialRegion {
    /// A fixed rectangle, tuned for the default video
    Fixed(Rect),
    /// Let the user drag a rectangle on the first frame
    Select,
}

/// Hough circle detector parameters.
///
/// Tuned for the demo's fixed camera distance; nothing adapts at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleParams {
    /// Gaussian kernel side, odd
    pub blur_kernel: i32,
    pub blur_sigma: f64,
    /// Inverse accumulator resolution
    pub dp: f64,
    /// Minimum center distance is `rows / min_dist_divisor`
    pub min_dist_divisor: i32,
    /// Upper Canny threshold
    pub canny_threshold: f64,
    /// Accumulator votes needed to accept a circle
    pub accumulator_threshold: f64,
    pub min_radius: i32,
    /// Zero leaves the radius unbounded
    pub max_radius: i32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            blur_sigma: 2.0,
            dp: 1.0,
            min_dist_divisor: 8,
            canny_threshold: 80.0,
            accumulator_threshold: 55.0,
            min_radius: 0,
            max_radius: 0,
        }
    }
}

impl CircleParams {
    /// Minimum distance between circle centers for a frame with `rows` rows.
    pub fn min_dist(&self, rows: i32) -> f64 {
        (rows / self.min_dist_divisor.max(1)).max(1) as f64
    }
}

/// Configuration for the tracking demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub source: SourceSpec,
    pub initial_region: InitialRegion,
    pub window_title: String,
    /// Key poll per frame; also paces the loop
    pub poll_interval: Duration,
    /// Highlight circular features on every frame
    pub annotate_circles: bool,
    pub circles: CircleParams,
    pub markers: MarkerStyle,
    pub overlay: OverlayStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: SourceSpec::File(PathBuf::from(DEFAULT_VIDEO)),
            initial_region: InitialRegion::Fixed(Rect::new(760.0, 400.0, 270.0, 200.0)),
            window_title: "Port_Tracker".to_string(),
            poll_interval: Duration::from_millis(1),
            annotate_circles: true,
            circles: CircleParams::default(),
            markers: MarkerStyle::default(),
            overlay: OverlayStyle::default(),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read frames from a video file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = SourceSpec::File(path.into());
        self
    }

    /// Read frames from a live capture device.
    pub fn with_device(mut self, index: i32) -> Self {
        self.source = SourceSpec::Device(index);
        self
    }

    /// Start tracking from a fixed region.
    pub fn with_region(mut self, region: Rect) -> Self {
        self.initial_region = InitialRegion::Fixed(region);
        self
    }

    /// Ask the user to select the region on the first frame.
    pub fn with_region_selection(mut self) -> Self {
        self.initial_region = InitialRegion::Select;
        self
    }

    pub fn with_circle_annotation(mut self, enabled: bool) -> Self {
        self.annotate_circles = enabled;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.source, SourceSpec::File(PathBuf::from("refuel_port.mp4")));
        assert_eq!(
            config.initial_region,
            InitialRegion::Fixed(Rect::new(760.0, 400.0, 270.0, 200.0))
        );
        assert_eq!(config.window_title, "Port_Tracker");
        assert_eq!(config.poll_interval, Duration::from_millis(1));
        assert!(config.annotate_circles);
    }

    #[test]
    fn test_builder() {
        let config = DemoConfig::new()
            .with_device(DEFAULT_DEVICE_INDEX)
            .with_region_selection()
            .with_circle_annotation(false);

        assert_eq!(config.source, SourceSpec::Device(1));
        assert_eq!(config.initial_region, InitialRegion::Select);
        assert!(!config.annotate_circles);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(SourceSpec::Device(2).to_string(), "device #2");
        assert_eq!(
            SourceSpec::File(PathBuf::from("clip.mp4")).to_string(),
            "file clip.mp4"
        );
    }

    #[test]
    fn test_min_dist() {
        let params = CircleParams::default();
        assert_eq!(params.min_dist(1080), 135.0);
        assert_eq!(params.min_dist(4), 1.0);
    }
}

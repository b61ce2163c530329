//! `VideoCapture` frame source.

use log::debug;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::config::SourceSpec;
use crate::error::{Error, Result};
use crate::integration::FrameSource;

/// Frames decoded from a video file or grabbed from a capture device.
///
/// The capture is released when the source is dropped.
pub struct VideoSource {
    capture: VideoCapture,
}

impl VideoSource {
    /// Open `spec` with whichever capture backend OpenCV picks.
    ///
    /// Fails with [`Error::SourceUnavailable`] if the file or device cannot be opened.
    pub fn open(spec: &SourceSpec) -> Result<Self> {
        let unavailable = || Error::SourceUnavailable(spec.to_string());

        let capture = match spec {
            SourceSpec::File(path) => {
                VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)
            }
            SourceSpec::Device(index) => VideoCapture::new(*index, videoio::CAP_ANY),
        };
        let capture = match capture {
            Ok(capture) => capture,
            Err(err) => {
                debug!("capture backend rejected {}: {}", spec, err);
                return Err(unavailable());
            }
        };
        if !capture.is_opened().unwrap_or(false) {
            return Err(unavailable());
        }

        Ok(Self { capture })
    }
}

impl FrameSource for VideoSource {
    type Frame = Mat;

    fn read(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}

impl Drop for VideoSource {
    fn drop(&mut self) {
        if let Err(err) = self.capture.release() {
            debug!("failed to release capture: {}", err);
        }
    }
}

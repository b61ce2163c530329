//! OpenCV kernelized correlation filter tracker.

use opencv::core::{self, Mat, Ptr};
use opencv::prelude::*;
use opencv::tracking::{TrackerKCF, TrackerKCF_Params};

use crate::error::Result;
use crate::tracker::{Rect, TrackingStrategy};

use super::canvas::{from_cv_rect, to_cv_rect};

/// KCF tracker with OpenCV's default parameters.
pub struct KcfTracker {
    inner: Ptr<TrackerKCF>,
    last: core::Rect,
}

impl KcfTracker {
    pub fn new() -> Result<Self> {
        let params = TrackerKCF_Params::default()?;
        Ok(Self {
            inner: TrackerKCF::create(params)?,
            last: core::Rect::default(),
        })
    }
}

impl TrackingStrategy<Mat> for KcfTracker {
    fn init(&mut self, frame: &Mat, region: Rect) -> Result<()> {
        let bbox = to_cv_rect(&region);
        self.inner.init(frame, bbox)?;
        self.last = bbox;
        Ok(())
    }

    fn update(&mut self, frame: &Mat) -> Result<Option<Rect>> {
        let mut bbox = self.last;
        if !self.inner.update(frame, &mut bbox)? {
            return Ok(None);
        }
        self.last = bbox;
        Ok(Some(from_cv_rect(bbox)))
    }

    fn name(&self) -> &str {
        "KCF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Raster;
    use crate::tracker::TrackerSession;
    use opencv::core::Scalar;
    use opencv::imgproc;

    /// Gray background with a checkered square whose top-left corner is at (x, y).
    fn frame_with_patch(x: i32, y: i32) -> Mat {
        let mut mat =
            Mat::new_rows_cols_with_default(240, 320, core::CV_8UC3, Scalar::all(90.0)).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let shade = if (row + col) % 2 == 0 { 250.0 } else { 10.0 };
                imgproc::rectangle(
                    &mut mat,
                    core::Rect::new(x + col * 10, y + row * 10, 10, 10),
                    Scalar::all(shade),
                    imgproc::FILLED,
                    imgproc::LINE_8,
                    0,
                )
                .unwrap();
            }
        }
        mat
    }

    #[test]
    fn test_session_with_kcf() {
        let mut session = TrackerSession::new(KcfTracker::new().unwrap());
        let first = frame_with_patch(100, 80);
        session
            .init(&first, Rect::new(100.0, 80.0, 40.0, 40.0))
            .unwrap();

        let mut successes = 0;
        for step in 1..=5 {
            let frame = frame_with_patch(100 + step * 2, 80 + step);
            let update = session.update(&frame).unwrap();
            if update.success {
                successes += 1;
                assert!(update.region.is_within(frame.extent()));
            }
        }
        assert_eq!(session.updates(), 5);
        assert!(successes > 0);
        // The patch drifted right by 10px over the run.
        assert!(session.region().x > 100.0);
    }
}

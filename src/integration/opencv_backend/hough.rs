//! Hough gradient circle detector.

use opencv::core::{self, Mat, Vec3f, Vector};
use opencv::imgproc;
use opencv::prelude::*;

use crate::config::CircleParams;
use crate::error::Result;
use crate::integration::{Circle, CircleDetector};

/// Finds circles via grayscale, Gaussian blur and the Hough gradient transform.
#[derive(Debug, Clone, Default)]
pub struct HoughCircles {
    params: CircleParams,
}

impl HoughCircles {
    pub fn new(params: CircleParams) -> Self {
        Self { params }
    }

    fn grayscale(frame: &Mat) -> Result<Mat> {
        if frame.channels() == 1 {
            return Ok(frame.try_clone()?);
        }
        let mut gray = Mat::default();
        imgproc::cvt_color_def(frame, &mut gray, imgproc::COLOR_BGR2GRAY)?;
        Ok(gray)
    }
}

impl CircleDetector<Mat> for HoughCircles {
    fn detect(&self, frame: &Mat) -> Result<Vec<Circle>> {
        let gray = Self::grayscale(frame)?;

        let kernel = self.params.blur_kernel;
        let mut blurred = Mat::default();
        imgproc::gaussian_blur_def(
            &gray,
            &mut blurred,
            core::Size::new(kernel, kernel),
            self.params.blur_sigma,
        )?;

        let mut found = Vector::<Vec3f>::new();
        imgproc::hough_circles(
            &blurred,
            &mut found,
            imgproc::HOUGH_GRADIENT,
            self.params.dp,
            self.params.min_dist(blurred.rows()),
            self.params.canny_threshold,
            self.params.accumulator_threshold,
            self.params.min_radius,
            self.params.max_radius,
        )?;

        Ok(found
            .iter()
            .map(|c| Circle::new(c[0], c[1], c[2]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::{FeatureAnnotator, MarkerStyle};
    use opencv::core::Scalar;

    fn disc_frame() -> Mat {
        let mut mat =
            Mat::new_rows_cols_with_default(240, 320, core::CV_8UC3, Scalar::all(0.0)).unwrap();
        imgproc::circle(
            &mut mat,
            core::Point::new(160, 120),
            40,
            Scalar::all(255.0),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )
        .unwrap();
        mat
    }

    #[test]
    fn test_annotate_twice_is_identical() {
        let annotator = FeatureAnnotator::new(HoughCircles::default(), MarkerStyle::default());
        let input = disc_frame();

        let mut first = input.try_clone().unwrap();
        let mut second = input.try_clone().unwrap();
        let circles_first = annotator.annotate(&mut first).unwrap();
        let circles_second = annotator.annotate(&mut second).unwrap();

        assert_eq!(circles_first, circles_second);
        assert_eq!(first.data_bytes().unwrap(), second.data_bytes().unwrap());
    }

    #[test]
    fn test_blank_frame_has_no_circles() {
        let blank =
            Mat::new_rows_cols_with_default(240, 320, core::CV_8UC3, Scalar::all(0.0)).unwrap();
        let detector = HoughCircles::new(CircleParams::default());
        assert!(detector.detect(&blank).unwrap().is_empty());
    }
}

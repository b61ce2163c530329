//! Circle detection and the stateless feature annotator built on it.

use crate::error::Result;
use crate::frame::{Canvas, Color, Point, Stroke};

/// One detected circular feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x coordinate
    pub x: f32,
    /// Center y coordinate
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Center rounded to the nearest pixel.
    pub fn center(&self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// Trait for circle detection backends.
///
/// `detect` takes `&self`: a detector holds parameters, never per-frame state.
pub trait CircleDetector<F> {
    fn detect(&self, frame: &F) -> Result<Vec<Circle>>;
}

/// How detected circles are marked on the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub center_radius: i32,
    pub center_color: Color,
    pub outline_color: Color,
    pub outline_width: i32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            center_radius: 3,
            center_color: Color::bgr(0, 225, 0),
            outline_color: Color::bgr(0, 0, 255),
            outline_width: 3,
        }
    }
}

/// Detects circles and draws a center dot and outline for each, in place.
pub struct FeatureAnnotator<D> {
    detector: D,
    style: MarkerStyle,
}

impl<D> FeatureAnnotator<D> {
    pub fn new(detector: D, style: MarkerStyle) -> Self {
        Self { detector, style }
    }

    /// Detect circles in `frame` and draw their markers onto it.
    ///
    /// # Returns
    /// The circles that were drawn.
    pub fn annotate<F>(&self, frame: &mut F) -> Result<Vec<Circle>>
    where
        F: Canvas,
        D: CircleDetector<F>,
    {
        let circles = self.detector.detect(frame)?;
        draw_markers(frame, &circles, &self.style)?;
        Ok(circles)
    }
}

/// Draw a filled center dot and an outline for every circle.
pub fn draw_markers<C: Canvas>(
    canvas: &mut C,
    circles: &[Circle],
    style: &MarkerStyle,
) -> Result<()> {
    for circle in circles {
        let center = circle.center();
        canvas.draw_circle(
            center,
            style.center_radius,
            style.center_color,
            Stroke::Filled,
        )?;
        canvas.draw_circle(
            center,
            circle.radius.round() as i32,
            style.outline_color,
            Stroke::Width(style.outline_width),
        )?;
    }
    Ok(())
}

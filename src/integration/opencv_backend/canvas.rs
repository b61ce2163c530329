//! `Mat` as a drawing surface.

use opencv::core::{self, Mat, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::error::Result;
use crate::frame::{Canvas, Color, Extent, Point, Raster, Stroke};
use crate::tracker::Rect;

pub(super) fn to_scalar(color: Color) -> Scalar {
    Scalar::new(
        f64::from(color.blue),
        f64::from(color.green),
        f64::from(color.red),
        0.0,
    )
}

pub(super) fn to_point(point: Point) -> core::Point {
    core::Point::new(point.x, point.y)
}

/// Round a region to whole pixels.
///
/// Corners are rounded, not sizes, so a region inside the frame stays inside it.
pub(super) fn to_cv_rect(region: &Rect) -> core::Rect {
    let [x1, y1, x2, y2] = region.to_tlbr().map(|v| v.round() as i32);
    core::Rect::new(x1, y1, x2 - x1, y2 - y1)
}

pub(super) fn from_cv_rect(rect: core::Rect) -> Rect {
    Rect::new(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

impl Raster for Mat {
    fn extent(&self) -> Extent {
        Extent::new(self.cols(), self.rows())
    }
}

impl Canvas for Mat {
    fn draw_rect(&mut self, region: &Rect, color: Color, stroke: Stroke) -> Result<()> {
        imgproc::rectangle(
            self,
            to_cv_rect(region),
            to_scalar(color),
            stroke.thickness(),
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        stroke: Stroke,
    ) -> Result<()> {
        imgproc::circle(
            self,
            to_point(center),
            radius,
            to_scalar(color),
            stroke.thickness(),
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        scale: f64,
        color: Color,
        thickness: i32,
    ) -> Result<()> {
        imgproc::put_text(
            self,
            text,
            to_point(origin),
            imgproc::FONT_HERSHEY_SIMPLEX,
            scale,
            to_scalar(color),
            thickness,
            imgproc::LINE_8,
            false,
        )?;
        Ok(())
    }
}

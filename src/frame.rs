//! Frame geometry and the drawing surface the overlay renders onto.

use crate::error::Result;
use crate::tracker::Rect;

/// Frame width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The whole frame as a region.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// Integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Color in blue, green, red channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Color {
    #[inline]
    pub const fn bgr(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }
}

/// How a shape outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Filled,
    Width(i32),
}

impl Stroke {
    /// Thickness value in OpenCV's convention, where a negative value fills.
    #[inline]
    pub fn thickness(self) -> i32 {
        match self {
            Stroke::Filled => -1,
            Stroke::Width(width) => width,
        }
    }
}

/// Anything with a pixel extent.
pub trait Raster {
    fn extent(&self) -> Extent;
}

/// A frame that can be drawn on in place.
pub trait Canvas: Raster {
    fn draw_rect(&mut self, region: &Rect, color: Color, stroke: Stroke) -> Result<()>;

    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        stroke: Stroke,
    ) -> Result<()>;

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        scale: f64,
        color: Color,
        thickness: i32,
    ) -> Result<()>;
}

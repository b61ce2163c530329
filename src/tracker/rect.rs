use crate::frame::Extent;

/// Bounding region in frame coordinates.
///
/// Stored as TLWH: top-left x, top-left y, width, height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the region
    pub width: f32,
    /// Height of the region
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// A region with no positive area covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlapping part of two regions, or an empty region at the origin.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let [ax1, ay1, ax2, ay2] = self.to_tlbr();
        let [bx1, by1, bx2, by2] = other.to_tlbr();

        let x1 = ax1.max(bx1);
        let y1 = ay1.max(by1);
        let x2 = ax2.min(bx2);
        let y2 = ay2.min(by2);

        if x2 > x1 && y2 > y1 {
            Rect::from_tlbr(x1, y1, x2, y2)
        } else {
            Rect::default()
        }
    }

    /// Clip the region to `[0, width] x [0, height]`.
    pub fn clip_to(&self, extent: Extent) -> Rect {
        self.intersect(&extent.bounds())
    }

    /// Whether the region lies entirely inside a frame of the given extent.
    pub fn is_within(&self, extent: Extent) -> bool {
        let [x1, y1, x2, y2] = self.to_tlbr();
        x1 >= 0.0 && y1 >= 0.0 && x2 <= extent.width as f32 && y2 <= extent.height as f32
    }
}

//! Trait for single-object tracking algorithms.

use crate::error::Result;
use crate::tracker::Rect;

/// Trait for single-object tracking algorithms.
///
/// Implement this trait to drive any tracker from a [`TrackerSession`](super::TrackerSession).
/// The session owns sequencing and frame-bounds checks; a strategy only has to
/// learn the target and relocate it.
///
/// # Example
///
/// ```ignore
/// use port_tracker::{Rect, Result, TrackingStrategy};
///
/// struct StandStill(Rect);
///
/// impl<F> TrackingStrategy<F> for StandStill {
///     fn init(&mut self, _frame: &F, region: Rect) -> Result<()> {
///         self.0 = region;
///         Ok(())
///     }
///
///     fn update(&mut self, _frame: &F) -> Result<Option<Rect>> {
///         Ok(Some(self.0))
///     }
/// }
/// ```
pub trait TrackingStrategy<F> {
    /// Register the target appearance found at `region` in `frame`.
    fn init(&mut self, frame: &F, region: Rect) -> Result<()>;

    /// Relocate the target in `frame`.
    ///
    /// # Returns
    /// The estimated region, or `None` when the target could not be found
    /// with confidence.
    fn update(&mut self, frame: &F) -> Result<Option<Rect>>;

    /// Short name used in log lines.
    fn name(&self) -> &str {
        "tracker"
    }
}

impl<F, T: TrackingStrategy<F> + ?Sized> TrackingStrategy<F> for Box<T> {
    fn init(&mut self, frame: &F, region: Rect) -> Result<()> {
        (**self).init(frame, region)
    }

    fn update(&mut self, frame: &F) -> Result<Option<Rect>> {
        (**self).update(frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

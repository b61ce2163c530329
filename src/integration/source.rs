//! Trait for sequential frame suppliers.

use crate::error::Result;

/// Trait for sequential frame suppliers: a decoded video file or a live device.
///
/// Opening is left to the implementation, since it is the only fallible
/// step that ends the program.
pub trait FrameSource {
    /// Frame type produced by this source.
    type Frame;

    /// Read the next frame.
    ///
    /// # Returns
    /// `None` once the stream is exhausted. End-of-stream is not an error.
    fn read(&mut self) -> Result<Option<Self::Frame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    type Frame = S::Frame;

    fn read(&mut self) -> Result<Option<Self::Frame>> {
        (**self).read()
    }
}

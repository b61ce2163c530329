//! Error type shared by the library.

use thiserror::Error;

use crate::tracker::Rect;

/// Errors raised while running the tracking demo.
///
/// Tracking failure is deliberately absent: a lost target is reported through
/// [`TrackUpdate::success`](crate::tracker::TrackUpdate) and the loop keeps going.
#[derive(Debug, Error)]
pub enum Error {
    /// The video file or capture device could not be opened.
    #[error("video source {0} could not be opened")]
    SourceUnavailable(String),

    /// `init` was called on a session that already holds a target.
    #[error("tracker session is already initialized")]
    AlreadyInitialized,

    /// `update` was called before `init`.
    #[error("tracker session has not been initialized")]
    NotInitialized,

    /// The initial region has no area inside the first frame.
    #[error("initial region {0:?} does not overlap the frame")]
    InvalidRegion(Rect),

    #[cfg(feature = "opencv-backend")]
    #[error("opencv: {0}")]
    OpenCv(#[from] opencv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

mod rect;
mod session;
mod session_state;
mod strategy;

pub use rect::Rect;
pub use session::{TrackUpdate, TrackerSession};
pub use session_state::SessionState;
pub use strategy::TrackingStrategy;

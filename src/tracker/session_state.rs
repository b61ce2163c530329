/// Lifecycle of a tracker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No target registered yet
    #[default]
    Uninitialized,
    /// Target appearance registered, no update run yet
    Initialized,
    /// At least one update has run
    Tracking,
}

//! Display sink and keyboard handling.

use std::time::Duration;

use crate::error::Result;
use crate::tracker::Rect;

/// Key code reported for the Escape key.
pub const KEY_ESCAPE: i32 = 27;

/// Key code reported for the letter `q`.
pub const KEY_QUIT: i32 = 'q' as i32;

/// How long to wait for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWait {
    /// Block until any key is pressed
    Indefinitely,
    /// Wait at most this long
    Poll(Duration),
}

impl KeyWait {
    /// Delay in highgui's convention: `0` blocks, anything else is milliseconds.
    pub fn as_millis(self) -> i32 {
        match self {
            KeyWait::Indefinitely => 0,
            KeyWait::Poll(delay) => delay.as_millis().clamp(1, i32::MAX as u128) as i32,
        }
    }
}

/// What the loop does after polling the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

impl KeyAction {
    /// Escape and `q` quit; any other key or no key continues.
    pub fn from_key(key: Option<i32>) -> Self {
        match key {
            Some(KEY_ESCAPE) | Some(KEY_QUIT) => KeyAction::Quit,
            _ => KeyAction::Continue,
        }
    }
}

/// Trait for the window frames are presented in.
pub trait DisplaySink<F> {
    /// Show `frame`, replacing whatever was shown before.
    fn present(&mut self, frame: &F) -> Result<()>;

    /// Wait for a key press.
    ///
    /// # Returns
    /// The key code, or `None` if the wait elapsed without a press.
    fn wait_key(&mut self, wait: KeyWait) -> Result<Option<i32>>;

    /// Let the user drag the target region on `frame`.
    fn select_region(&mut self, frame: &F) -> Result<Rect>;

    /// Release the window.
    fn close(&mut self) -> Result<()>;
}

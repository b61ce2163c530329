//! highgui window used as the display sink.

use log::debug;
use opencv::core::Mat;
use opencv::highgui;

use crate::error::Result;
use crate::integration::{DisplaySink, KeyWait};
use crate::tracker::Rect;

use super::canvas::from_cv_rect;

/// A named highgui window. The window appears on the first `present`.
pub struct HighGuiDisplay {
    title: String,
    shown: bool,
}

impl HighGuiDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shown: false,
        }
    }
}

impl DisplaySink<Mat> for HighGuiDisplay {
    fn present(&mut self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.title, frame)?;
        self.shown = true;
        Ok(())
    }

    fn wait_key(&mut self, wait: KeyWait) -> Result<Option<i32>> {
        let key = highgui::wait_key(wait.as_millis())?;
        Ok((key >= 0).then_some(key))
    }

    fn select_region(&mut self, frame: &Mat) -> Result<Rect> {
        let selected = highgui::select_roi_def(&self.title, frame)?;
        self.shown = true;
        debug!("selected {:?}", selected);
        Ok(from_cv_rect(selected))
    }

    fn close(&mut self) -> Result<()> {
        if self.shown {
            highgui::destroy_all_windows()?;
            self.shown = false;
        }
        Ok(())
    }
}

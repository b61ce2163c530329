//! Region box and diagnostic text drawn on every frame.

use std::time::Duration;

use crate::error::Result;
use crate::frame::{Canvas, Color, Point, Stroke};
use crate::tracker::{Rect, TrackUpdate};

/// Text, colors and positions of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub banner: String,
    pub target_label: String,
    pub failure_message: String,
    pub banner_origin: Point,
    pub fps_origin: Point,
    pub failure_origin: Point,
    /// Region shown on the first frame while waiting for confirmation
    pub initial_color: Color,
    pub tracked_color: Color,
    pub lost_color: Color,
    pub label_color: Color,
    pub hud_color: Color,
    pub box_width: i32,
    /// Line width of the last-known region after a failed update
    pub lost_box_width: i32,
    pub text_width: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            banner: "PORT TRACKER".to_string(),
            target_label: "Refueling Port".to_string(),
            failure_message: "Tracking failure detected".to_string(),
            banner_origin: Point::new(100, 20),
            fps_origin: Point::new(200, 50),
            failure_origin: Point::new(200, 80),
            initial_color: Color::bgr(255, 0, 0),
            tracked_color: Color::bgr(0, 255, 0),
            lost_color: Color::bgr(0, 0, 255),
            label_color: Color::bgr(255, 0, 0),
            hud_color: Color::bgr(255, 170, 50),
            box_width: 2,
            lost_box_width: 1,
            text_width: 2,
        }
    }
}

/// Frames per second implied by one tracker update taking `elapsed`.
pub fn fps_from_elapsed(elapsed: Duration) -> f64 {
    let seconds = elapsed.as_secs_f64();
    if seconds > 0.0 { 1.0 / seconds } else { 0.0 }
}

/// FPS readout, truncated to a whole number.
pub fn fps_label(fps: f64) -> String {
    format!("FPS : {}", fps as i64)
}

/// Draw the region the user is asked to confirm.
pub fn draw_initial_region<C: Canvas>(
    canvas: &mut C,
    region: &Rect,
    style: &OverlayStyle,
) -> Result<()> {
    canvas.draw_rect(region, style.initial_color, Stroke::Width(style.box_width))
}

/// Draw the tracking result plus banner and FPS readout.
pub fn draw_status<C: Canvas>(
    canvas: &mut C,
    update: &TrackUpdate,
    fps: f64,
    style: &OverlayStyle,
) -> Result<()> {
    if update.success {
        canvas.draw_rect(
            &update.region,
            style.tracked_color,
            Stroke::Width(style.box_width),
        )?;
        let anchor = Point::new(update.region.x as i32, update.region.y as i32);
        canvas.draw_text(
            &style.target_label,
            anchor,
            0.75,
            style.label_color,
            style.text_width,
        )?;
    } else {
        canvas.draw_rect(
            &update.region,
            style.lost_color,
            Stroke::Width(style.lost_box_width),
        )?;
        canvas.draw_text(
            &style.failure_message,
            style.failure_origin,
            1.0,
            style.lost_color,
            style.text_width,
        )?;
    }

    canvas.draw_text(
        &style.banner,
        style.banner_origin,
        0.75,
        style.hud_color,
        style.text_width,
    )?;
    canvas.draw_text(
        &fps_label(fps),
        style.fps_origin,
        1.0,
        style.hud_color,
        style.text_width,
    )
}

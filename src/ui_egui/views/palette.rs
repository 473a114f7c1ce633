//! Color handling for the time grid and blocks.

use egui::Color32;

use crate::models::event::BlockStatus;

/// Grid colors derived from the active egui visuals.
pub struct TimeGridPalette {
    pub canvas_bg: Color32,
    pub hour_line: Color32,
    pub quarter_line: Color32,
    pub hour_label: Color32,
    pub now_line: Color32,
}

impl TimeGridPalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        let visuals = ui.visuals();
        Self {
            canvas_bg: visuals.extreme_bg_color,
            hour_line: visuals.widgets.noninteractive.bg_stroke.color,
            quarter_line: visuals.widgets.noninteractive.bg_stroke.color.gamma_multiply(0.4),
            hour_label: Color32::GRAY,
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }
}

/// Parse a hex color string to Color32.
///
/// Accepts "#RRGGBB" or "RRGGBB"; returns `None` for anything else.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Fallback block color when the event carries none.
pub fn status_color(status: BlockStatus) -> Color32 {
    match status {
        BlockStatus::Planned => Color32::from_rgb(100, 150, 200),
        BlockStatus::InProgress => Color32::from_rgb(208, 135, 112),
        BlockStatus::Done => Color32::from_rgb(120, 140, 120),
    }
}

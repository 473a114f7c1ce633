//! Time grid rendering for day-column calendar views.
//!
//! Paints the 24-hour canvas (hour lines, labels, column separators, the
//! current-time indicator) and places block rects through the interaction
//! core's coordinate mapper.

use chrono::{Datelike, Local, Timelike};
use egui::{Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::TimeGridPalette;
use crate::interaction::grid::{DayColumnLayout, GridScale, MINUTES_PER_DAY};
use crate::utils::time::day_label;

pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Compute the column layout for the available width.
pub fn layout_for(available_width: f32, day_count: usize) -> DayColumnLayout {
    let columns_width = (available_width - TIME_LABEL_WIDTH).max(0.0);
    let column_width =
        (columns_width / day_count as f32 - COLUMN_SPACING).max(40.0);
    DayColumnLayout {
        label_width: TIME_LABEL_WIDTH,
        column_width,
        spacing: COLUMN_SPACING,
        day_count,
    }
}

/// Pixel rect of a block within the grid canvas.
pub fn block_rect(
    grid_rect: Rect,
    layout: &DayColumnLayout,
    scale: GridScale,
    column: usize,
    start_minutes: i32,
    duration_minutes: i32,
) -> Rect {
    let x = grid_rect.left() + layout.x_for_day(column);
    let y = grid_rect.top() + scale.minutes_to_pixels(start_minutes);
    Rect::from_min_size(
        Pos2::new(x, y),
        Vec2::new(
            layout.column_width,
            scale.minutes_to_pixels(duration_minutes),
        ),
    )
}

/// Draw the day-label header row above the grid.
pub fn render_day_header(ui: &mut egui::Ui, layout: &DayColumnLayout, days: &[usize]) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(layout.total_width(), HEADER_HEIGHT),
        Sense::hover(),
    );
    let today = Local::now().weekday().num_days_from_monday() as usize;
    for (column, day) in days.iter().enumerate() {
        let x = rect.left() + layout.x_for_day(column) + layout.column_width / 2.0;
        let text = day_label(*day);
        let color = if *day == today {
            ui.visuals().strong_text_color()
        } else {
            ui.visuals().text_color()
        };
        ui.painter().text(
            Pos2::new(x, rect.center().y),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(13.0),
            color,
        );
    }
}

/// Allocate and paint the 24-hour canvas. Returns the canvas rect the
/// block layer positions against.
pub fn render_time_grid(
    ui: &mut egui::Ui,
    layout: &DayColumnLayout,
    scale: GridScale,
    palette: &TimeGridPalette,
) -> Rect {
    let canvas_height = scale.minutes_to_pixels(MINUTES_PER_DAY);
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(layout.total_width(), canvas_height),
        Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.canvas_bg);

    let grid_left = rect.left() + layout.label_width + layout.spacing;
    let grid_right = rect.left() + layout.total_width();

    // Hour lines with labels, quarter lines in between
    for hour in 0..24 {
        let y = rect.top() + scale.minutes_to_pixels(hour * 60);
        painter.line_segment(
            [Pos2::new(grid_left, y), Pos2::new(grid_right, y)],
            Stroke::new(1.0, palette.hour_line),
        );
        painter.text(
            Pos2::new(rect.left() + layout.label_width - 5.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{hour:02}:00"),
            egui::FontId::proportional(12.0),
            palette.hour_label,
        );
        for quarter in 1..4 {
            let qy = rect.top() + scale.minutes_to_pixels(hour * 60 + quarter * 15);
            painter.line_segment(
                [Pos2::new(grid_left, qy), Pos2::new(grid_right, qy)],
                Stroke::new(0.5, palette.quarter_line),
            );
        }
    }

    // Column separators
    for column in 0..layout.day_count {
        let x = rect.left() + layout.x_for_day(column) - layout.spacing / 2.0;
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, palette.hour_line),
        );
    }

    rect
}

/// Draw the current time indicator line across today's column, when today
/// is among the visible days.
pub fn draw_current_time_indicator(
    ui: &egui::Ui,
    grid_rect: Rect,
    layout: &DayColumnLayout,
    scale: GridScale,
    days: &[usize],
    palette: &TimeGridPalette,
) {
    let now = Local::now();
    let today = now.weekday().num_days_from_monday() as usize;
    let Some(column) = days.iter().position(|d| *d == today) else {
        return;
    };

    let minute_of_day = (now.hour() * 60 + now.minute()) as i32;
    let y = grid_rect.top() + scale.minutes_to_pixels(minute_of_day);
    let x_start = grid_rect.left() + layout.x_for_day(column);
    let x_end = x_start + layout.column_width;

    let painter = ui.painter();
    painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
    painter.line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_end, y)],
        Stroke::new(2.0, palette.now_line),
    );
}

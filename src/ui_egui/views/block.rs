//! Block rendering.
//!
//! Paints a single time block: colored background with accent bar, title,
//! time range caption, and task badge. Done blocks are dimmed for visual
//! distinction. Mid-gesture blocks take their geometry from the resize
//! preview, so `start`/`duration` are passed in rather than read off the
//! event.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use super::palette::{parse_color, status_color};
use crate::models::event::{BlockStatus, CalendarEvent};
use crate::utils::time::{format_duration, format_minutes};

/// Paint a block into `rect`.
pub fn paint_block(
    ui: &mut egui::Ui,
    rect: Rect,
    event: &CalendarEvent,
    start_minutes: i32,
    duration_minutes: i32,
    is_active: bool,
    is_selected: bool,
) {
    let base_color = event
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or_else(|| status_color(event.status));

    let fill = if event.status == BlockStatus::Done {
        Color32::from_rgba_unmultiplied(
            (base_color.r() as f32 * 0.4) as u8,
            (base_color.g() as f32 * 0.4) as u8,
            (base_color.b() as f32 * 0.4) as u8,
            140,
        )
    } else {
        base_color
    };

    let painter = ui.painter();
    painter.rect_filled(rect.shrink(1.0), 3.0, fill);

    // Accent bar on the left
    let bar = Rect::from_min_size(
        Pos2::new(rect.left() + 1.0, rect.top() + 1.0),
        Vec2::new(4.0, rect.height() - 2.0),
    );
    painter.rect_filled(bar, 2.0, fill.linear_multiply(0.7));

    if is_active || is_selected {
        let stroke_color = if is_active {
            ui.visuals().strong_text_color()
        } else {
            base_color.gamma_multiply(1.4)
        };
        painter.rect_stroke(rect.shrink(0.5), 3.0, Stroke::new(1.5, stroke_color));
    }

    let text_color = if event.status == BlockStatus::Done {
        Color32::from_rgba_unmultiplied(255, 255, 255, 180)
    } else {
        Color32::WHITE
    };
    let text_left = bar.right() + 5.0;
    let text_width = (rect.right() - 4.0 - text_left).max(0.0);

    // Time range caption, then the title below it when there is room
    let caption = format!(
        "{} - {} ({})",
        format_minutes(start_minutes),
        format_minutes(start_minutes + duration_minutes),
        format_duration(duration_minutes),
    );
    painter.text(
        Pos2::new(text_left, rect.top() + 3.0),
        egui::Align2::LEFT_TOP,
        caption,
        egui::FontId::proportional(10.0),
        text_color,
    );

    if rect.height() >= 30.0 {
        let job = egui::text::LayoutJob::simple(
            event.title.clone(),
            egui::FontId::proportional(13.0),
            text_color,
            text_width,
        );
        let galley = ui.fonts(|f| f.layout_job(job));
        ui.painter()
            .galley(Pos2::new(text_left, rect.top() + 16.0), galley, text_color);
    }

    if event.task_count > 0 && rect.height() >= 48.0 {
        let badge = format!(
            "{} task{}",
            event.task_count,
            if event.task_count == 1 { "" } else { "s" }
        );
        ui.painter().text(
            Pos2::new(text_left, rect.bottom() - 4.0),
            egui::Align2::LEFT_BOTTOM,
            badge,
            egui::FontId::proportional(10.0),
            text_color.gamma_multiply(0.8),
        );
    }
}

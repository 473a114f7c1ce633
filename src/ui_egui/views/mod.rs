//! Calendar views: the time grid, day/week layouts, and block rendering.
//!
//! The views are the host side of the resize contract: they feed pointer
//! events into [`BlockResizeState`], render each frame from the ephemeral
//! preview, and report the committed pair upward when a gesture ends.

pub mod block;
pub mod day_view;
pub mod palette;
pub mod time_grid;
pub mod week_view;

use egui::CursorIcon;

use crate::interaction::grid::{DayColumnLayout, GridScale};
use crate::interaction::resize::{ResizeConfig, ResizeHost};
use crate::models::event::CalendarEvent;
use crate::ui_egui::resize::{draw_handle, BlockResizeState, HandleRects};

use self::block::paint_block;
use self::time_grid::block_rect;

/// Final values of a completed gesture, for the app to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedResize {
    pub event_id: u64,
    pub start_minutes: i32,
    pub duration_minutes: i32,
}

/// Result of block interactions in views.
#[derive(Default)]
pub struct ViewInteractionResult {
    /// Gesture that ended this frame and should be committed
    pub committed: Option<CommittedResize>,
    /// Block that was clicked
    pub selected: Option<u64>,
}

/// Per-frame host for the resize callbacks: records the ephemeral pair and
/// whether the gesture ended. The block layer drains it into the
/// interaction result after the event loop.
#[derive(Default)]
struct GestureSink {
    last: Option<(i32, i32)>,
    ended: bool,
}

impl ResizeHost for GestureSink {
    fn on_resize(&mut self, start_minutes: i32, duration_minutes: i32) {
        self.last = Some((start_minutes, duration_minutes));
    }

    fn on_resize_end(&mut self) {
        self.ended = true;
    }
}

/// Render every block for the visible day columns and run the resize
/// gesture wiring.
///
/// `days` maps column position to day-of-week index (the week view passes
/// 0..=6, the day view a single pinned day).
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_block_layer(
    ui: &mut egui::Ui,
    grid_rect: egui::Rect,
    layout: &DayColumnLayout,
    scale: GridScale,
    days: &[usize],
    events: &[CalendarEvent],
    resize: &mut BlockResizeState,
    config: ResizeConfig,
    selected: Option<u64>,
) -> ViewInteractionResult {
    let mut result = ViewInteractionResult::default();
    let mut sink = GestureSink::default();
    let cancel_requested = ui.input(|i| i.key_pressed(egui::Key::Escape));

    for event in events {
        let Some(column) = days.iter().position(|d| *d == event.day_index as usize) else {
            continue;
        };

        // Mid-gesture blocks render from the ephemeral preview, never from
        // the canonical values.
        let (start, duration) = resize
            .preview_for(event.id)
            .unwrap_or((event.start_minutes, event.duration_minutes));
        let rect = block_rect(grid_rect, layout, scale, column, start, duration);
        let is_active = resize.active_event() == Some(event.id);

        let response = ui.interact(
            rect,
            egui::Id::new(("time-block", event.id)),
            egui::Sense::click_and_drag(),
        );

        paint_block(
            ui,
            rect,
            event,
            start,
            duration,
            is_active,
            selected == Some(event.id),
        );

        let handles = HandleRects::for_block(rect);
        let hover_edge = response.hover_pos().and_then(|pos| handles.hit_test(pos));
        let shown_edge = if is_active {
            resize.active_edge()
        } else {
            hover_edge
        };
        if let Some(edge) = shown_edge {
            draw_handle(ui, rect, edge, ui.visuals().strong_text_color());
            ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
        }

        if response.clicked() {
            result.selected = Some(event.id);
        }

        // Arm on pointer-down at a handle; ignored while any gesture is
        // active (single session rule).
        if !resize.is_resizing() && response.drag_started() {
            if let (Some(pos), Some(edge)) = (response.interact_pointer_pos(), hover_edge) {
                resize.begin(event, edge, pos.y, config);
            }
        }

        if is_active {
            if cancel_requested {
                // Escape maps to pointer-cancel: identical to pointer-up.
                finish_gesture(resize, event.id, &mut sink, &mut result);
            } else if response.drag_stopped() {
                finish_gesture(resize, event.id, &mut sink, &mut result);
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    resize.update(pos.y, &mut sink);
                }
            }
        }
    }

    // A gesture whose block left the visible set (the view switched
    // mid-drag) would never see its terminal event; release it here so
    // the block cannot become permanently unresponsive.
    if let Some(active_id) = resize.active_event() {
        let visible = events
            .iter()
            .any(|e| e.id == active_id && days.contains(&(e.day_index as usize)));
        if !visible {
            finish_gesture(resize, active_id, &mut sink, &mut result);
        }
    }

    result
}

fn finish_gesture(
    resize: &mut BlockResizeState,
    event_id: u64,
    sink: &mut GestureSink,
    result: &mut ViewInteractionResult,
) {
    // Prefer an emission from this frame; fall back to the controller's
    // preview when the final frame had no move event.
    let preview = sink.last.or_else(|| resize.preview_for(event_id));
    resize.finish(sink);
    if sink.ended {
        if let Some((start_minutes, duration_minutes)) = preview {
            result.committed = Some(CommittedResize {
                event_id,
                start_minutes,
                duration_minutes,
            });
        }
    }
}

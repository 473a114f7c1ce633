// Block Resize Wiring
//
// Connects egui pointer events to the interaction-core resize controller.
// - HandleRects: top/bottom hit zones on a block
// - BlockResizeState: the one active gesture, routed to its owning block
//   for the whole drag even when the pointer leaves the handle

use egui::{Pos2, Rect, Vec2};

use crate::interaction::grid::MINUTES_PER_DAY;
use crate::interaction::resize::{ResizeConfig, ResizeController, ResizeEdge, ResizeHost};
use crate::models::event::CalendarEvent;

/// Height of the resize hit zone at each edge of a block
pub const HANDLE_ZONE: f32 = 8.0;
/// Width of the painted handle bar
pub const HANDLE_BAR_WIDTH: f32 = 28.0;

/// Top/bottom hit zones for a block rect.
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleRects {
    /// Hit zones span the full width of the block for easy grabbing.
    /// Small blocks split into halves so both edges stay reachable.
    pub fn for_block(block_rect: Rect) -> Self {
        let zone = if block_rect.height() < 2.0 * HANDLE_ZONE {
            block_rect.height() / 2.0
        } else {
            HANDLE_ZONE
        };
        Self {
            top: Rect::from_min_size(
                block_rect.left_top(),
                Vec2::new(block_rect.width(), zone),
            ),
            bottom: Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.bottom() - zone),
                Vec2::new(block_rect.width(), zone),
            ),
        }
    }

    /// Which edge a point hits, if any. Top wins when the zones coincide.
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeEdge> {
        if self.top.contains(pos) {
            Some(ResizeEdge::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }
}

/// Draw a small grab bar at the hovered or active edge.
pub fn draw_handle(ui: &egui::Ui, block_rect: Rect, edge: ResizeEdge, color: egui::Color32) {
    let y = match edge {
        ResizeEdge::Top => block_rect.top() + 3.0,
        ResizeEdge::Bottom => block_rect.bottom() - 3.0,
    };
    let center_x = block_rect.center().x;
    let half = HANDLE_BAR_WIDTH.min(block_rect.width() * 0.6) / 2.0;
    ui.painter().line_segment(
        [Pos2::new(center_x - half, y), Pos2::new(center_x + half, y)],
        egui::Stroke::new(3.0, color),
    );
}

/// The single active resize gesture, if any.
///
/// egui delivers drag updates to the widget that started the drag
/// regardless of pointer position, and this state pins the gesture to the
/// owning block id for the whole drag. Together that is the exclusive
/// pointer delivery the controller requires. Sessions on different blocks
/// are independent: each gesture gets a fresh controller.
#[derive(Default)]
pub struct BlockResizeState {
    active: Option<ActiveResize>,
}

struct ActiveResize {
    event_id: u64,
    controller: ResizeController,
}

impl BlockResizeState {
    /// Arm a gesture on a block edge. Ignored (returns false) while
    /// another gesture is active, or when the block's current values are
    /// not a valid anchor under `config` (duration below the floor, or a
    /// midnight-crossing span with the flag off). The floor constrains
    /// gestures, not pre-existing data: a block shorter than a configured
    /// floor renders normally, it just cannot be grabbed.
    pub fn begin(
        &mut self,
        event: &CalendarEvent,
        edge: ResizeEdge,
        pointer_y: f32,
        config: ResizeConfig,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }
        let spans_midnight = event.end_minutes() > MINUTES_PER_DAY;
        if event.duration_minutes < config.min_duration
            || (!config.allow_cross_midnight && spans_midnight)
        {
            log::debug!(
                "resize begin refused: block {} not a valid anchor under the current config",
                event.id
            );
            return false;
        }
        let mut controller = ResizeController::new(config);
        let armed = controller.pointer_down(
            edge,
            event.start_minutes,
            event.duration_minutes,
            pointer_y,
        );
        debug_assert!(armed, "fresh controller must accept pointer_down");
        self.active = Some(ActiveResize {
            event_id: event.id,
            controller,
        });
        log::debug!("resize begin: block {} edge {:?}", event.id, edge);
        true
    }

    /// Feed a pointer-move to the active gesture.
    pub fn update(&mut self, pointer_y: f32, host: &mut dyn ResizeHost) {
        if let Some(active) = &mut self.active {
            active.controller.pointer_move(pointer_y, host);
        }
    }

    /// Terminate the gesture (pointer-up and pointer-cancel are the same
    /// path); the session is released unconditionally.
    pub fn finish(&mut self, host: &mut dyn ResizeHost) {
        if let Some(mut active) = self.active.take() {
            active.controller.pointer_up(host);
            log::debug!("resize end: block {}", active.event_id);
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the block owning the active gesture.
    pub fn active_event(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.event_id)
    }

    pub fn active_edge(&self) -> Option<ResizeEdge> {
        self.active.as_ref().and_then(|a| a.controller.active_edge())
    }

    /// Ephemeral render values for a block, when it owns the gesture.
    pub fn preview_for(&self, event_id: u64) -> Option<(i32, i32)> {
        self.active
            .as_ref()
            .filter(|a| a.event_id == event_id)
            .and_then(|a| a.controller.last_preview())
    }
}

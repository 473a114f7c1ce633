//! Block resize state machine.
//!
//! Turns continuous pointer movement into discrete, snapped, clamped
//! `(start_minutes, duration_minutes)` updates for a single calendar block.
//!
//! The controller owns only the ephemeral gesture state (the anchor captured
//! at pointer-down). The host view owns the canonical event values and is
//! told about every candidate pair through [`ResizeHost::on_resize`]; at
//! gesture end it receives [`ResizeHost::on_resize_end`] and commits the
//! last pair it saw. Pointer-up and pointer-cancel are handled identically;
//! a revert-on-cancel policy, if ever wanted, belongs in the host.
//!
//! All deltas are computed against the anchor, never incrementally from the
//! previous frame, so repeated snapping cannot accumulate drift.

use super::grid::{snap_to_interval, GridScale, MINUTES_PER_DAY};

/// Which boundary of the block is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top edge - adjusts start time, bottom edge stays fixed
    Top,
    /// Bottom edge - adjusts duration, start stays fixed
    Bottom,
}

/// Static configuration for a resize controller.
#[derive(Clone, Copy, Debug)]
pub struct ResizeConfig {
    /// Vertical grid scale used to translate pixel deltas.
    pub pixels_per_minute: f32,
    /// Granularity (minutes) dragged values are rounded to.
    pub snap_interval: i32,
    /// Smallest duration a gesture may produce.
    pub min_duration: i32,
    /// When true the `[0, 1440 - min_duration]` start bound and the
    /// end-of-day cap are lifted and blocks may span past midnight.
    pub allow_cross_midnight: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            // 30px slots at 15-minute granularity
            pixels_per_minute: 2.0,
            snap_interval: 15,
            min_duration: 15,
            allow_cross_midnight: false,
        }
    }
}

impl ResizeConfig {
    fn validate(&self) {
        assert!(
            self.pixels_per_minute > 0.0,
            "pixels_per_minute must be positive"
        );
        assert!(self.snap_interval >= 1, "snap_interval must be >= 1");
        assert!(self.min_duration >= 1, "min_duration must be >= 1");
    }
}

/// Host side of the resize contract.
///
/// `on_resize` fires on every pointer-move frame with a candidate pair the
/// host should use as ephemeral render state. `on_resize_end` fires exactly
/// once per gesture (up or cancel); the host commits the last candidate it
/// received.
pub trait ResizeHost {
    fn on_resize(&mut self, start_minutes: i32, duration_minutes: i32);
    fn on_resize_end(&mut self);
}

/// Anchor snapshot captured at pointer-down.
#[derive(Clone, Copy, Debug)]
struct ResizeSession {
    edge: ResizeEdge,
    anchor_start: i32,
    anchor_duration: i32,
    anchor_pointer_y: f32,
}

/// Per-block interaction state machine: `Idle -> Resizing(edge) -> Idle`.
///
/// Exactly one session exists at a time; a pointer-down while a session is
/// active is ignored (deterministic, documented on [`pointer_down`]).
/// Controllers for different blocks share no state and are fully
/// independent.
///
/// [`pointer_down`]: Self::pointer_down
#[derive(Debug)]
pub struct ResizeController {
    config: ResizeConfig,
    scale: GridScale,
    session: Option<ResizeSession>,
    last_preview: Option<(i32, i32)>,
}

impl ResizeController {
    pub fn new(config: ResizeConfig) -> Self {
        config.validate();
        let scale = GridScale::new(config.pixels_per_minute);
        Self {
            config,
            scale,
            session: None,
            last_preview: None,
        }
    }

    /// True while a gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// The edge being dragged, if a gesture is in progress.
    pub fn active_edge(&self) -> Option<ResizeEdge> {
        self.session.map(|s| s.edge)
    }

    /// The last pair emitted this gesture, for rendering.
    pub fn last_preview(&self) -> Option<(i32, i32)> {
        self.last_preview
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Arm a session: `Idle -> Resizing(edge)`.
    ///
    /// Captures the anchor snapshot. Returns `false` without side effects
    /// when a session is already active: a second pointer-down on the same
    /// block is ignored, never tracked as a concurrent session.
    ///
    /// A malformed anchor is a programming error and asserts.
    pub fn pointer_down(
        &mut self,
        edge: ResizeEdge,
        anchor_start: i32,
        anchor_duration: i32,
        pointer_y: f32,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        assert!(
            (0..MINUTES_PER_DAY).contains(&anchor_start),
            "anchor start {anchor_start} out of range"
        );
        // A block below the floor outside a gesture violates the host's
        // invariant; treat it as a programming error.
        assert!(
            anchor_duration >= self.config.min_duration,
            "anchor duration {anchor_duration} below the configured floor"
        );
        if !self.config.allow_cross_midnight {
            assert!(
                anchor_start + anchor_duration <= MINUTES_PER_DAY,
                "anchor spans past midnight with cross-midnight disabled"
            );
        }
        self.session = Some(ResizeSession {
            edge,
            anchor_start,
            anchor_duration,
            anchor_pointer_y: pointer_y,
        });
        self.last_preview = Some((anchor_start, anchor_duration));
        true
    }

    /// Process a pointer-move: `Resizing -> Resizing`.
    ///
    /// Emits `host.on_resize` with the snapped, clamped candidate pair on
    /// every call while a session is active, including zero-delta no-ops.
    /// Ignored while idle.
    pub fn pointer_move(&mut self, pointer_y: f32, host: &mut dyn ResizeHost) {
        let Some(session) = self.session else {
            return;
        };
        let pixel_delta = pointer_y - session.anchor_pointer_y;
        let raw_delta = self.scale.pixel_delta_to_minute_delta(pixel_delta);
        let snapped_delta = snap_to_interval(raw_delta, self.config.snap_interval);

        let (start, duration) = self.apply_edge(&session, snapped_delta);
        self.last_preview = Some((start, duration));
        host.on_resize(start, duration);
    }

    /// Finish the gesture: `Resizing -> Idle`.
    ///
    /// Emits `host.on_resize_end` exactly once. Ignored while idle.
    pub fn pointer_up(&mut self, host: &mut dyn ResizeHost) {
        if self.session.take().is_some() {
            host.on_resize_end();
        }
    }

    /// Identical to [`pointer_up`](Self::pointer_up): the controller does
    /// not distinguish a drop from an aborted gesture.
    pub fn pointer_cancel(&mut self, host: &mut dyn ResizeHost) {
        self.pointer_up(host);
    }

    /// Edge semantics, then floor clamp, then day bounds.
    ///
    /// Top edge: the bottom edge (`anchor_start + anchor_duration`) stays
    /// fixed through every clamp, so duration is derived from the fixed end
    /// rather than snapped independently. Bottom edge: start is emitted
    /// verbatim.
    fn apply_edge(&self, session: &ResizeSession, snapped_delta: i32) -> (i32, i32) {
        let min = self.config.min_duration;
        match session.edge {
            ResizeEdge::Bottom => {
                let start = session.anchor_start;
                let mut duration = session.anchor_duration + snapped_delta;
                if duration < min {
                    duration = min;
                }
                if !self.config.allow_cross_midnight {
                    duration = duration.min(MINUTES_PER_DAY - start);
                }
                (start, duration)
            }
            ResizeEdge::Top => {
                let fixed_end = session.anchor_start + session.anchor_duration;
                let mut start = session.anchor_start + snapped_delta;
                let mut duration = fixed_end - start;
                if duration < min {
                    // Floor wins; the bottom edge never moves.
                    duration = min;
                    start = fixed_end - min;
                }
                if !self.config.allow_cross_midnight {
                    let max_start = MINUTES_PER_DAY - min;
                    if start < 0 {
                        start = 0;
                        duration = fixed_end;
                    } else if start > max_start {
                        start = max_start;
                        duration = fixed_end - start;
                    }
                }
                (start, duration)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every emission so tests can assert on the exact stream.
    #[derive(Default)]
    struct RecordingHost {
        resizes: Vec<(i32, i32)>,
        ended: usize,
    }

    impl ResizeHost for RecordingHost {
        fn on_resize(&mut self, start_minutes: i32, duration_minutes: i32) {
            self.resizes.push((start_minutes, duration_minutes));
        }

        fn on_resize_end(&mut self) {
            self.ended += 1;
        }
    }

    fn controller() -> ResizeController {
        ResizeController::new(ResizeConfig {
            pixels_per_minute: 1.0,
            snap_interval: 15,
            min_duration: 15,
            allow_cross_midnight: false,
        })
    }

    #[test]
    fn test_zero_movement_is_idempotent() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        assert!(ctl.pointer_down(ResizeEdge::Bottom, 540, 60, 100.0));
        ctl.pointer_move(100.0, &mut host);
        // no-op emission is still sent, and equals the anchor exactly
        assert_eq!(host.resizes, vec![(540, 60)]);
    }

    #[test]
    fn test_bottom_edge_grows_duration_keeps_start() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Bottom, 540, 60, 0.0);
        // +47px -> raw 47 -> snapped 45
        ctl.pointer_move(47.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(540, 105)));
    }

    #[test]
    fn test_top_edge_keeps_bottom_fixed() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Top, 540, 60, 0.0);
        // +50px -> snapped 45 -> start 585, duration 15 (exactly at floor)
        ctl.pointer_move(50.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(585, 15)));
    }

    #[test]
    fn test_top_edge_floor_clamp_saturates() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Top, 540, 60, 0.0);
        // +70px -> snapped 75 -> candidate duration -15 -> clamp to floor,
        // start recomputed so the bottom edge stays at 600
        ctl.pointer_move(70.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(585, 15)));
    }

    #[test]
    fn test_top_edge_clamped_at_midnight() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Top, 60, 60, 0.0);
        ctl.pointer_move(-500.0, &mut host);
        // start clamps at 0 and the bottom edge (120) stays fixed
        assert_eq!(host.resizes.last(), Some(&(0, 120)));
    }

    #[test]
    fn test_bottom_edge_capped_at_day_end() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Bottom, 1380, 30, 0.0);
        ctl.pointer_move(500.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(1380, 60)));
    }

    #[test]
    fn test_bottom_edge_floor_clamp() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Bottom, 540, 60, 0.0);
        ctl.pointer_move(-300.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(540, 15)));
    }

    #[test]
    fn test_cross_midnight_flag_lifts_day_end_cap() {
        let mut ctl = ResizeController::new(ResizeConfig {
            allow_cross_midnight: true,
            pixels_per_minute: 1.0,
            ..ResizeConfig::default()
        });
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Bottom, 1380, 30, 0.0);
        ctl.pointer_move(90.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(1380, 120)));
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        assert!(ctl.pointer_down(ResizeEdge::Bottom, 540, 60, 0.0));
        assert!(!ctl.pointer_down(ResizeEdge::Top, 300, 30, 10.0));
        // the original anchor is still in effect
        ctl.pointer_move(15.0, &mut host);
        assert_eq!(host.resizes.last(), Some(&(540, 75)));
        assert_eq!(ctl.active_edge(), Some(ResizeEdge::Bottom));
    }

    #[test]
    fn test_up_and_cancel_are_identical_and_release() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_down(ResizeEdge::Bottom, 540, 60, 0.0);
        ctl.pointer_up(&mut host);
        assert_eq!(host.ended, 1);
        assert!(!ctl.is_resizing());

        ctl.pointer_down(ResizeEdge::Top, 540, 60, 0.0);
        ctl.pointer_cancel(&mut host);
        assert_eq!(host.ended, 2);
        assert!(!ctl.is_resizing());

        // terminal events while idle emit nothing
        ctl.pointer_up(&mut host);
        ctl.pointer_cancel(&mut host);
        assert_eq!(host.ended, 2);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        ctl.pointer_move(50.0, &mut host);
        assert!(host.resizes.is_empty());
    }

    #[test]
    fn test_status_accessors() {
        let mut ctl = controller();
        let mut host = RecordingHost::default();
        assert!(!ctl.is_resizing());
        assert_eq!(ctl.active_edge(), None);
        ctl.pointer_down(ResizeEdge::Top, 540, 60, 0.0);
        assert!(ctl.is_resizing());
        assert_eq!(ctl.active_edge(), Some(ResizeEdge::Top));
        ctl.pointer_move(50.0, &mut host);
        assert_eq!(ctl.last_preview(), Some((585, 15)));
        ctl.pointer_up(&mut host);
        assert_eq!(ctl.active_edge(), None);
    }

    #[test]
    #[should_panic(expected = "anchor start")]
    fn test_malformed_anchor_asserts() {
        let mut ctl = controller();
        ctl.pointer_down(ResizeEdge::Top, 2000, 60, 0.0);
    }
}

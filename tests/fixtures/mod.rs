// Test fixtures - reusable gesture-test helpers
// Provides consistent anchors, configs, and a recording host across test files

use superos_calendar::interaction::resize::{ResizeConfig, ResizeController, ResizeHost};

/// Records every callback so tests can assert on the exact emission stream.
#[derive(Default)]
pub struct RecordingHost {
    pub resizes: Vec<(i32, i32)>,
    pub ended: usize,
}

impl ResizeHost for RecordingHost {
    fn on_resize(&mut self, start_minutes: i32, duration_minutes: i32) {
        self.resizes.push((start_minutes, duration_minutes));
    }

    fn on_resize_end(&mut self) {
        self.ended += 1;
    }
}

/// Configs used across the gesture tests
pub mod configs {
    use super::*;

    /// 1 px/min with 15-minute snap and floor, no cross-midnight spans;
    /// pixel deltas read directly as minute deltas
    pub fn one_px_per_minute() -> ResizeConfig {
        ResizeConfig {
            pixels_per_minute: 1.0,
            snap_interval: 15,
            min_duration: 15,
            allow_cross_midnight: false,
        }
    }

    /// Coarse snapping with a larger floor
    pub fn coarse() -> ResizeConfig {
        ResizeConfig {
            pixels_per_minute: 2.0,
            snap_interval: 30,
            min_duration: 30,
            allow_cross_midnight: false,
        }
    }
}

/// Anchors used across the gesture tests
pub mod anchors {
    /// 9:00 for one hour
    pub const NINE_AM_ONE_HOUR: (i32, i32) = (540, 60);
    /// 23:00 for 30 minutes - close to the day-end bound
    pub const LATE_EVENING: (i32, i32) = (1380, 30);
}

pub fn controller(config: ResizeConfig) -> ResizeController {
    ResizeController::new(config)
}

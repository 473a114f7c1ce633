// Settings module
// Startup configuration for the prototype; loaded once, never written back

use serde::{Deserialize, Serialize};

/// Application settings with documented defaults.
///
/// The grid fields feed the resize core's `ResizeConfig`; the rest drive
/// the shell (view selection, analytics panel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "Day" or "Week"
    pub current_view: String,
    /// Vertical grid scale; 2.0 renders a 15-minute slot as 30px
    pub pixels_per_minute: f32,
    /// Granularity (minutes) dragged values snap to
    pub snap_interval_minutes: i32,
    /// Smallest duration a resize may produce
    pub min_duration_minutes: i32,
    /// Lift the day-bound clamps so blocks may span past midnight
    pub allow_cross_midnight: bool,
    pub show_analytics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_view: "Week".to_string(),
            pixels_per_minute: 2.0,
            snap_interval_minutes: 15,
            min_duration_minutes: 15,
            allow_cross_midnight: false,
            show_analytics: true,
        }
    }
}

impl Settings {
    /// Validate the grid configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.pixels_per_minute <= 0.0 {
            return Err("pixels_per_minute must be positive".to_string());
        }
        if self.snap_interval_minutes < 1 {
            return Err("snap_interval_minutes must be >= 1".to_string());
        }
        if self.min_duration_minutes < 1 {
            return Err("min_duration_minutes must be >= 1".to_string());
        }
        Ok(())
    }
}

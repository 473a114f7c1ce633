//! Time-grid coordinate mapping.
//!
//! Stateless conversion between pixel offsets inside a calendar viewport and
//! calendar time values (minute-of-day, durations, day columns). The views
//! place and size blocks exclusively through this module; nothing here knows
//! about egui or rendering.

/// Minutes in a single day column.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Vertical scale of the time grid.
///
/// A non-positive scale is a programming error, not a recoverable condition,
/// so construction asserts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridScale {
    pixels_per_minute: f32,
}

impl GridScale {
    pub fn new(pixels_per_minute: f32) -> Self {
        assert!(
            pixels_per_minute > 0.0,
            "pixels_per_minute must be positive, got {pixels_per_minute}"
        );
        Self { pixels_per_minute }
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.pixels_per_minute
    }

    /// Vertical pixel offset for a minute-of-day (or a duration in minutes).
    pub fn minutes_to_pixels(&self, minutes: i32) -> f32 {
        minutes as f32 * self.pixels_per_minute
    }

    /// Nearest minute value for a vertical pixel offset.
    ///
    /// Rounds (half away from zero) rather than truncating so small
    /// movements do not systematically bias toward zero.
    pub fn pixels_to_minutes(&self, pixels: f32) -> i32 {
        (pixels / self.pixels_per_minute).round() as i32
    }

    /// Minute delta for a pixel delta. Same rounding rule as
    /// [`pixels_to_minutes`](Self::pixels_to_minutes); deltas and absolute
    /// offsets map identically because the scale is linear.
    pub fn pixel_delta_to_minute_delta(&self, pixel_delta: f32) -> i32 {
        self.pixels_to_minutes(pixel_delta)
    }
}

/// Snap a minute value to the nearest multiple of `interval`.
///
/// Ties round half away from zero. `f64::round` implements exactly that
/// rule, which the tests pin.
pub fn snap_to_interval(value: i32, interval: i32) -> i32 {
    assert!(interval >= 1, "snap interval must be >= 1, got {interval}");
    ((value as f64 / interval as f64).round() as i32) * interval
}

/// Horizontal layout of day columns in a week-style grid.
#[derive(Clone, Copy, Debug)]
pub struct DayColumnLayout {
    /// Width of the time-label gutter on the left.
    pub label_width: f32,
    /// Width of one day column.
    pub column_width: f32,
    /// Gap between adjacent columns.
    pub spacing: f32,
    /// Number of day columns (7 for a week view, 1 for a day view).
    pub day_count: usize,
}

impl DayColumnLayout {
    /// Left x offset of a day column, relative to the grid origin.
    pub fn x_for_day(&self, day: usize) -> f32 {
        assert!(day < self.day_count, "day {day} out of {} columns", self.day_count);
        self.label_width + self.spacing + day as f32 * (self.column_width + self.spacing)
    }

    /// Day column under an x offset, if any. The label gutter and the
    /// spacing strips between columns hit nothing.
    pub fn day_at_x(&self, x: f32) -> Option<usize> {
        for day in 0..self.day_count {
            let left = self.x_for_day(day);
            if x >= left && x < left + self.column_width {
                return Some(day);
            }
        }
        None
    }

    /// Total width of the grid including the label gutter.
    pub fn total_width(&self) -> f32 {
        self.label_width
            + self.spacing
            + self.day_count as f32 * self.column_width
            + self.day_count.saturating_sub(1) as f32 * self.spacing
    }
}

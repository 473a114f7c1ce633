// Event module
// Calendar block model for the fixture-driven time-blocking prototype

use serde::{Deserialize, Serialize};

use crate::interaction::grid::MINUTES_PER_DAY;

/// Workflow status of a block, carried through the resize core unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockStatus {
    Planned,
    InProgress,
    Done,
}

/// A scheduled time block on the calendar.
///
/// Times are minutes since midnight within a day-of-week column; the
/// prototype schedules a fixture week, not real dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier, unique within the active event set
    pub id: u64,
    pub title: String,
    /// Day-of-week column, 0 = Monday
    pub day_index: u8,
    /// Minutes since midnight, 0..=1439
    pub start_minutes: i32,
    /// Always positive; at least the configured floor outside a gesture
    pub duration_minutes: i32,
    /// Hex color string (e.g. "#4A90D9"), opaque to the resize core
    pub color: Option<String>,
    pub status: BlockStatus,
    /// Number of tasks attached to the block
    pub task_count: u32,
}

impl CalendarEvent {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        day_index: u8,
        start_minutes: i32,
        duration_minutes: i32,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            title: title.into(),
            day_index,
            start_minutes,
            duration_minutes,
            color: None,
            status: BlockStatus::Planned,
            task_count: 0,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the block's geometry and attributes
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Block title cannot be empty".to_string());
        }
        if self.day_index > 6 {
            return Err(format!("Day index {} out of range 0..=6", self.day_index));
        }
        if !(0..MINUTES_PER_DAY).contains(&self.start_minutes) {
            return Err(format!(
                "Start {} out of range 0..=1439",
                self.start_minutes
            ));
        }
        if self.duration_minutes <= 0 {
            return Err("Duration must be positive".to_string());
        }
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }
        Ok(())
    }

    /// Bottom edge of the block in minutes since midnight
    pub fn end_minutes(&self) -> i32 {
        self.start_minutes + self.duration_minutes
    }

    /// True when two blocks occupy overlapping time on the same day
    pub fn overlaps(&self, other: &CalendarEvent) -> bool {
        self.day_index == other.day_index
            && self.start_minutes < other.end_minutes()
            && other.start_minutes < self.end_minutes()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_status(mut self, status: BlockStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_task_count(mut self, task_count: u32) -> Self {
        self.task_count = task_count;
        self
    }
}

//! Time-allocation summary for the analytics panel.
//!
//! Pure aggregation over the in-memory event list; the panel renders the
//! result as plain labeled rows.

use crate::models::event::{BlockStatus, CalendarEvent};

/// Aggregated schedule statistics for the visible week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSummary {
    pub total_minutes: i32,
    pub planned_minutes: i32,
    pub in_progress_minutes: i32,
    pub done_minutes: i32,
    /// Scheduled minutes per day-of-week column (Monday = 0)
    pub minutes_per_day: [i32; 7],
    pub block_count: usize,
    pub task_count: u32,
}

impl WeekSummary {
    /// Share of scheduled time already done, 0.0..=1.0.
    pub fn done_ratio(&self) -> f32 {
        if self.total_minutes == 0 {
            0.0
        } else {
            self.done_minutes as f32 / self.total_minutes as f32
        }
    }
}

/// Summarize the event list.
pub fn summarize(events: &[CalendarEvent]) -> WeekSummary {
    let mut summary = WeekSummary {
        block_count: events.len(),
        ..WeekSummary::default()
    };
    for event in events {
        let minutes = event.duration_minutes;
        summary.total_minutes += minutes;
        match event.status {
            BlockStatus::Planned => summary.planned_minutes += minutes,
            BlockStatus::InProgress => summary.in_progress_minutes += minutes,
            BlockStatus::Done => summary.done_minutes += minutes,
        }
        if let Some(slot) = summary.minutes_per_day.get_mut(event.day_index as usize) {
            *slot += minutes;
        }
        summary.task_count += event.task_count;
    }
    summary
}

/// The day column (Monday = 0) carrying the most scheduled time, if any
/// time is scheduled at all.
pub fn busiest_day(summary: &WeekSummary) -> Option<usize> {
    summary
        .minutes_per_day
        .iter()
        .enumerate()
        .filter(|(_, m)| **m > 0)
        .max_by_key(|(_, m)| **m)
        .map(|(day, _)| day)
}

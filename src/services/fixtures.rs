//! Demo fixture data.
//!
//! The prototype has no persistence; the calendar is seeded with a
//! deterministic demo week so every launch shows the same schedule. All
//! fixture times are aligned to the default 15-minute snap interval.

use crate::models::event::{BlockStatus, CalendarEvent};

/// Build the demo week. Day 0 is Monday.
pub fn demo_week() -> Vec<CalendarEvent> {
    let block = |id, title: &str, day, start, duration, color: &str| {
        CalendarEvent::new(id, title, day, start, duration)
            .expect("fixture event must be valid")
            .with_color(color)
    };

    vec![
        block(1, "Morning planning", 0, 510, 30, "#7E9CD8")
            .with_status(BlockStatus::Done),
        block(2, "Deep work: parser rewrite", 0, 540, 120, "#4A90D9")
            .with_status(BlockStatus::InProgress)
            .with_task_count(4),
        block(3, "Lunch", 0, 720, 60, "#A3BE8C"),
        block(4, "Code review", 0, 840, 45, "#D08770").with_task_count(2),
        block(5, "Standup", 1, 570, 15, "#7E9CD8"),
        block(6, "Design doc", 1, 600, 90, "#4A90D9").with_task_count(3),
        block(7, "1:1 with Sam", 1, 900, 30, "#B48EAD"),
        block(8, "Deep work: resize engine", 2, 540, 150, "#4A90D9")
            .with_task_count(5),
        block(9, "Gym", 2, 1050, 60, "#A3BE8C"),
        block(10, "Sprint planning", 3, 600, 60, "#D08770"),
        block(11, "Bug triage", 3, 780, 45, "#BF616A").with_task_count(7),
        block(12, "Writing", 4, 540, 90, "#B48EAD"),
        block(13, "Demo prep", 4, 870, 60, "#D08770")
            .with_status(BlockStatus::InProgress),
        block(14, "Week review", 4, 960, 30, "#7E9CD8"),
        block(15, "Groceries", 5, 660, 45, "#A3BE8C"),
        block(16, "Reading", 6, 900, 90, "#B48EAD"),
    ]
}

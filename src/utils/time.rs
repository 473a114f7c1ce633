//! Pure time formatting helpers for labels and tooltips.

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Format a minute-of-day as "HH:MM".
pub fn format_minutes(minutes: i32) -> String {
    let minutes = minutes.rem_euclid(1440);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a duration in minutes as "2h 30m" / "45m" / "3h".
pub fn format_duration(minutes: i32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Short label for a day-of-week column (Monday = 0).
pub fn day_label(day_index: usize) -> &'static str {
    DAY_LABELS.get(day_index).copied().unwrap_or("?")
}

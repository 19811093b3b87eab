//! Weekday index to wallpaper file stem.

use chrono::{Datelike, Local, Weekday};

/// File stems indexed by days from Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Today's weekday according to the local clock.
pub fn today() -> Weekday {
    Local::now().weekday()
}

/// Lowercase English name used as the wallpaper file stem.
pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_sunday() as usize]
}

/// Parse a `--day` argument such as `wednesday` or `Wed`.
pub fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| format!("unknown weekday `{value}`"))
}

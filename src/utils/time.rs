use std::fmt::Display;

use chrono::{DateTime, Duration, NaiveTime, TimeZone};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// This is the standard way of converting a date to a day key in timetable.
pub fn date_key<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format(DATE_FORMAT).to_string()
}

/// Formats an interval as zero-padded 24-hour `HH:MM - HH:MM`.
pub fn format_time_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{} - {}", start.format(TIME_FORMAT), end.format(TIME_FORMAT))
}

/// Returns start of the next day. [None] if midnight doesn't exist in the zone.
pub fn next_day_start<Tz: TimeZone>(date: DateTime<Tz>) -> Option<DateTime<Tz>> {
    (date + Duration::days(1)).with_time(NaiveTime::MIN).earliest()
}

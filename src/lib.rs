//! Turns a detailed time tracking report into a time table: entries grouped by calendar day,
//! with formatted time ranges and the display color of their project.
//!

pub mod cli;
pub mod report;
pub mod timetable;
pub mod utils;

use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::ValueEnum;

use crate::{timetable::TimeTableWeek, utils::color::css_to_colour};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

const SWATCH: &str = "██";

pub fn write_week(
    week: &TimeTableWeek,
    format: OutputFormat,
    colored: bool,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(week, colored, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, week)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// One block per day, one line per entry. With `colored` each line starts with a swatch painted
/// in the project color; colors that can't be shown in a terminal get a blank swatch.
fn write_text(week: &TimeTableWeek, colored: bool, out: &mut impl Write) -> Result<()> {
    for day in &week.days {
        writeln!(out, "{}\t{} entries", day.date, day.entries.len())?;
        for entry in &day.entries {
            if colored {
                match css_to_colour(&entry.color) {
                    Some(colour) => write!(out, "{} ", colour.paint(SWATCH))?,
                    None => write!(out, "{} ", " ".repeat(SWATCH.chars().count()))?,
                }
            }
            writeln!(
                out,
                "{}\t{}\t{}",
                entry.time_range, entry.color, entry.description
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::timetable::{TimeTableDay, TimeTableEntry, TimeTableWeek};

    use super::{write_week, OutputFormat};

    fn week() -> TimeTableWeek {
        TimeTableWeek {
            days: vec![
                TimeTableDay {
                    date: "2024-01-01".into(),
                    entries: vec![TimeTableEntry {
                        time_range: "09:00 - 09:30".into(),
                        description: "A".into(),
                        project_id: Some(1),
                        color: "#ff0000".into(),
                    }],
                },
                TimeTableDay {
                    date: "2024-01-02".into(),
                    entries: vec![TimeTableEntry {
                        time_range: "14:00 - 15:00".into(),
                        description: "B".into(),
                        project_id: Some(2),
                        color: "#cccccc".into(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn plain_text() -> Result<()> {
        let mut out = vec![];
        write_week(&week(), OutputFormat::Text, false, &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "2024-01-01\t1 entries\n09:00 - 09:30\t#ff0000\tA\n\n\
             2024-01-02\t1 entries\n14:00 - 15:00\t#cccccc\tB\n\n"
        );
        Ok(())
    }

    #[test]
    fn colored_text_paints_swatches() -> Result<()> {
        let mut out = vec![];
        write_week(&week(), OutputFormat::Text, true, &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("\x1b[38;2;255;0;0m"));
        assert!(text.contains("\x1b[38;2;204;204;204m"));
        Ok(())
    }

    #[test]
    fn json_round_trips() -> Result<()> {
        let mut out = vec![];
        write_week(&week(), OutputFormat::Json, false, &mut out)?;
        let parsed: TimeTableWeek = serde_json::from_slice(&out)?;
        assert_eq!(parsed, week());
        Ok(())
    }

    #[test]
    fn empty_week_prints_nothing() -> Result<()> {
        let mut out = vec![];
        write_week(&TimeTableWeek::default(), OutputFormat::Text, true, &mut out)?;
        assert!(out.is_empty());
        Ok(())
    }
}

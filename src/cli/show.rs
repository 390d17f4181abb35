use std::{fmt::Display, io::Write, path::PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};
use now::DateTimeNow;
use tracing::debug;

use crate::{
    report::source::{extract_between, ExtractConfig, JsonReportSource},
    timetable::TimeTableView,
    utils::time::next_day_start,
};

use super::{
    output::{write_week, OutputFormat},
    Args,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct ShowCommand {
    #[arg(
        long,
        short,
        help = "Detailed report exported as json. Either an array of items or an object with a \"data\" array"
    )]
    report: PathBuf,
    #[arg(long, short, help = "Project directory exported as json")]
    projects: Option<PathBuf>,
    #[arg(
        long = "start",
        short,
        help = "Skip entries started before this moment. Examples are \"monday\", \"1 week ago\", \"15/03/2025\", \"12:00 16/03/2025\""
    )]
    start_date: Option<String>,
    #[arg(
        long = "end",
        short,
        help = "Skip entries started at or after this moment. Examples are \"today\", \"15/03/2025\""
    )]
    end_date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(
        long = "days",
        default_value_t = false,
        help = "Take inputs as whole days. For example if start and end are both 15/03/2025 this option keeps the whole day"
    )]
    treat_as_days: bool,
    #[arg(long, help = "Group days and format times in UTC instead of the local time zone")]
    utc: bool,
    #[arg(long, short, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, help = "Don't paint project colors")]
    no_color: bool,
}

/// Command to process `show` command. Loads the report, keeps entries in the requested range and
/// prints them grouped by day.
pub async fn process_show_command(command: ShowCommand) -> Result<()> {
    if command.utc {
        show_in_zone(command, &Utc).await
    } else {
        show_in_zone(command, &Local).await
    }
}

async fn show_in_zone<Tz>(
    ShowCommand {
        report,
        projects,
        start_date,
        end_date,
        date_style,
        treat_as_days,
        utc: _,
        format,
        no_color,
    }: ShowCommand,
    tz: &Tz,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Copy + Display,
{
    let now = Utc::now().with_timezone(tz);
    let config = parse_values(start_date, end_date, date_style, treat_as_days, now)?;
    debug!("Showing entries between {:?} and {:?}", config.start, config.end);

    let source = JsonReportSource::new(report, projects);
    let (entries, projects) = extract_between(&source, config).await?;

    let view = TimeTableView::new(entries, &projects, tz);

    let mut stdout = std::io::stdout().lock();
    write_week(view.render_time_table(), format, !no_color, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn parse_date<Tz>(
    value: Option<String>,
    now: &DateTime<Tz>,
    dialect: chrono_english::Dialect,
    name: &str,
) -> Result<Option<DateTime<Tz>>>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    match value.map(|s| parse_date_string(&s, now.clone(), dialect)) {
        Some(Ok(v)) => Ok(Some(v)),
        Some(Err(e)) => Err(validation_error(format!(
            "Failed to validate {name} date {e}"
        ))),
        None => Ok(None),
    }
}

fn validation_error(message: String) -> anyhow::Error {
    Args::command()
        .error(clap::error::ErrorKind::ValueValidation, message)
        .into()
}

/// Turns user input into bounds for [extract_between]. `now` anchors relative dates like
/// "yesterday" and carries the zone whole days are measured in.
fn parse_values<Tz>(
    start_date: Option<String>,
    end_date: Option<String>,
    date_style: DateStyle,
    treat_as_days: bool,
    now: DateTime<Tz>,
) -> Result<ExtractConfig>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    let dialect: chrono_english::Dialect = date_style.into();
    let mut start = parse_date(start_date, &now, dialect, "start")?;
    let mut end = parse_date(end_date, &now, dialect, "end")?;

    // order is checked on the dates as typed, before they are widened to whole days
    if let (Some(start), Some(end)) = (&start, &end) {
        if start > end {
            return Err(validation_error(format!(
                "Start {start:?} is after end {end:?}"
            )));
        }
    }

    if treat_as_days {
        start = start.map(|v| v.beginning_of_day());
        end = match end {
            Some(v) => Some(next_day_start(v.clone()).ok_or_else(|| {
                validation_error(format!("Day after end {v:?} has no midnight"))
            })?),
            None => None,
        };
    }

    Ok(ExtractConfig {
        start: start.map(|v| v.to_utc()),
        end: end.map(|v| v.to_utc()),
    })
}

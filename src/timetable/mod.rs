//! Groups time entries into days and annotates them with the color of their project.
//!
//! Days come out in the order their date was first seen in the input, entries keep their
//! relative order inside a day. Dates and times are rendered in the zone passed by the caller,
//! so the same report can be bucketed by local or UTC days.

use std::{collections::HashMap, fmt::Display};

use chrono::TimeZone;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::{
    report::entities::{ProjectId, ProjectsResponseItem, TimeEntry},
    utils::time::{date_key, format_time_range},
};

/// Color used when an entry's project is unknown or has no color.
pub const DEFAULT_COLOR: &str = "#cccccc";

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeTableEntry {
    pub time_range: String,
    pub description: String,
    pub project_id: Option<ProjectId>,
    pub color: String,
}

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct TimeTableDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub entries: Vec<TimeTableEntry>,
}

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Default)]
pub struct TimeTableWeek {
    pub days: Vec<TimeTableDay>,
}

/// Time table built once from a report and a project directory.
#[derive(Debug, Clone)]
pub struct TimeTableView {
    time_table_week: TimeTableWeek,
}

impl TimeTableView {
    pub fn new<Tz>(
        time_entries: impl IntoIterator<Item = impl Into<TimeEntry>>,
        projects: &[ProjectsResponseItem],
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time_table_week: create_time_table_week(time_entries, projects, tz),
        }
    }

    pub fn render_time_table(&self) -> &TimeTableWeek {
        &self.time_table_week
    }

    pub fn into_time_table(self) -> TimeTableWeek {
        self.time_table_week
    }
}

/// Lookup of project colors. When several projects share an id the first one wins.
struct ProjectColors<'a> {
    colors: HashMap<ProjectId, Option<&'a str>>,
}

impl<'a> ProjectColors<'a> {
    fn new(projects: &'a [ProjectsResponseItem]) -> Self {
        let mut colors = HashMap::with_capacity(projects.len());
        for project in projects {
            colors.entry(project.id).or_insert(project.color.as_deref());
        }
        Self { colors }
    }

    fn resolve(&self, project_id: Option<ProjectId>) -> &'a str {
        project_id
            .and_then(|id| self.colors.get(&id).copied().flatten())
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_COLOR)
    }
}

#[instrument(skip_all)]
fn create_time_table_week<Tz>(
    time_entries: impl IntoIterator<Item = impl Into<TimeEntry>>,
    projects: &[ProjectsResponseItem],
    tz: &Tz,
) -> TimeTableWeek
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let colors = ProjectColors::new(projects);
    let mut entries_by_day = IndexMap::<String, Vec<TimeTableEntry>>::new();

    for entry in time_entries.into_iter().map(Into::into) {
        let start = entry.start.with_timezone(tz);
        let end = entry.end.with_timezone(tz);
        let day = date_key(&start);

        let color = colors.resolve(entry.project_id);
        trace!("{day} {} {:?} {color}", entry.description, entry.project_id);

        entries_by_day.entry(day).or_default().push(TimeTableEntry {
            time_range: format_time_range(&start, &end),
            description: entry.description,
            project_id: entry.project_id,
            color: color.to_string(),
        });
    }

    trace!("Grouped entries into {} days", entries_by_day.len());

    TimeTableWeek {
        days: entries_by_day
            .into_iter()
            .map(|(date, entries)| TimeTableDay { date, entries })
            .collect(),
    }
}

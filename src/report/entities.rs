use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Utc;

use serde::Deserialize;

/// Identifier shared by report items and projects.
pub type ProjectId = u64;

/// A single item of a detailed time report, as it is returned by the time tracker. Only the
/// fields needed for the time table are kept, everything else in the payload is ignored.
#[derive(PartialEq, Eq, Debug, Deserialize, Clone)]
pub struct DetailedReportItem {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "pid")]
    pub project_id: Option<ProjectId>,
}

/// An entry of the project directory.
#[derive(PartialEq, Eq, Debug, Deserialize, Clone)]
pub struct ProjectsResponseItem {
    pub id: ProjectId,
    /// CSS color of the project. Might be absent or empty.
    #[serde(default)]
    pub color: Option<String>,
}

impl ProjectsResponseItem {
    pub fn new(id: ProjectId, color: Option<&str>) -> Self {
        Self {
            id,
            color: color.map(Into::into),
        }
    }
}

/// Recorded interval of tracked activity. Instants are kept in UTC, the zone used for display is
/// chosen when the time table is built.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TimeEntry {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub project_id: Option<ProjectId>,
}

impl From<DetailedReportItem> for TimeEntry {
    fn from(
        DetailedReportItem {
            start,
            end,
            description,
            project_id,
        }: DetailedReportItem,
    ) -> Self {
        TimeEntry {
            start: start.to_utc(),
            end: end.to_utc(),
            description: description.unwrap_or_default(),
            project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{TimeZone, Utc};

    use super::{DetailedReportItem, ProjectsResponseItem, TimeEntry};

    #[test]
    fn detailed_report_item_parses_offsets() -> Result<()> {
        let item: DetailedReportItem = serde_json::from_str(
            r#"{
                "id": 42,
                "start": "2024-01-01T09:00:00+02:00",
                "end": "2024-01-01T09:30:00+02:00",
                "description": "Planning",
                "project_id": 7,
                "tags": []
            }"#,
        )?;

        let entry = TimeEntry::from(item);
        assert_eq!(entry.start, Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap());
        assert_eq!(entry.end, Utc.with_ymd_and_hms(2024, 1, 1, 7, 30, 0).unwrap());
        assert_eq!(entry.description, "Planning");
        assert_eq!(entry.project_id, Some(7));
        Ok(())
    }

    #[test]
    fn detailed_report_item_accepts_pid_and_null_description() -> Result<()> {
        let item: DetailedReportItem = serde_json::from_str(
            r#"{
                "start": "2024-01-01T09:00:00Z",
                "end": "2024-01-01T10:00:00Z",
                "description": null,
                "pid": 3
            }"#,
        )?;

        assert_eq!(item.project_id, Some(3));
        let entry = TimeEntry::from(item);
        assert_eq!(entry.description, "");
        Ok(())
    }

    #[test]
    fn detailed_report_item_without_project() -> Result<()> {
        let item: DetailedReportItem = serde_json::from_str(
            r#"{"start": "2024-01-01T09:00:00Z", "end": "2024-01-01T10:00:00Z", "description": "x"}"#,
        )?;
        assert_eq!(item.project_id, None);
        Ok(())
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let result = serde_json::from_str::<DetailedReportItem>(
            r#"{"start": "yesterday", "end": "2024-01-01T10:00:00Z", "description": "x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn project_color_is_optional() -> Result<()> {
        let projects: Vec<ProjectsResponseItem> = serde_json::from_str(
            r##"[
                {"id": 1, "name": "Work", "color": "#ff0000", "active": true},
                {"id": 2}
            ]"##,
        )?;
        assert_eq!(projects[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(projects[1], ProjectsResponseItem::new(2, None));
        Ok(())
    }
}

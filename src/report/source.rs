use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use super::entities::{DetailedReportItem, ProjectsResponseItem, TimeEntry};

/// Interface for abstracting the time tracker the report comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Retrieves items of the detailed report.
    async fn get_time_entries(&self) -> Result<Vec<DetailedReportItem>>;

    /// Retrieves the project directory.
    async fn get_projects(&self) -> Result<Vec<ProjectsResponseItem>>;
}

/// Reads a report and a project directory previously exported to json files.
///
/// The report file is either a plain array of items or an object holding them in `data`, which
/// is how paged report responses are shaped.
pub struct JsonReportSource {
    report_path: PathBuf,
    projects_path: Option<PathBuf>,
}

impl JsonReportSource {
    pub fn new(report_path: PathBuf, projects_path: Option<PathBuf>) -> Self {
        Self {
            report_path,
            projects_path,
        }
    }
}

#[async_trait]
impl ReportSource for JsonReportSource {
    async fn get_time_entries(&self) -> Result<Vec<DetailedReportItem>> {
        let value: Value = read_json(&self.report_path).await?;
        let items = match value {
            Value::Object(mut object) => object.remove("data").with_context(|| {
                format!("Report {:?} has no \"data\" field", self.report_path)
            })?,
            other => other,
        };
        let items: Vec<DetailedReportItem> = serde_json::from_value(items)
            .with_context(|| format!("Failed to parse report items in {:?}", self.report_path))?;
        debug!("Loaded {} report items", items.len());
        Ok(items)
    }

    async fn get_projects(&self) -> Result<Vec<ProjectsResponseItem>> {
        let Some(path) = &self.projects_path else {
            debug!("No project directory given");
            return Ok(vec![]);
        };
        let projects: Vec<ProjectsResponseItem> = read_json(path).await?;
        debug!("Loaded {} projects", projects.len());
        Ok(projects)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {path:?}");
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {path:?}"))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {path:?}"))
}

/// Bounds applied to report items before they are grouped. Both ends are optional, `start` is
/// inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractConfig {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ExtractConfig {
    fn filter(&self, entry: TimeEntry) -> Option<TimeEntry> {
        if self.start.is_some_and(|start| entry.start < start) {
            return None;
        }
        if self.end.is_some_and(|end| entry.start >= end) {
            return None;
        }
        Some(entry)
    }
}

/// Extracts [TimeEntry] values which started between the bounds of `config`, together with the
/// project directory.
#[instrument(skip(source))]
pub async fn extract_between(
    source: &impl ReportSource,
    config: ExtractConfig,
) -> Result<(Vec<TimeEntry>, Vec<ProjectsResponseItem>)> {
    let items = source.get_time_entries().await?;
    let total = items.len();
    let entries = items
        .into_iter()
        .map(TimeEntry::from)
        .filter_map(|v| config.filter(v))
        .collect::<Vec<_>>();
    debug!("Kept {} out of {total} entries", entries.len());

    let projects = source.get_projects().await?;
    Ok((entries, projects))
}

//! Ingestion of the "data loaded" payload.
//!
//! The payload carries a task-list header label and the task records.
//! Individual records that fail validation are dropped and reported;
//! a payload where nothing survives is an error.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::error::{LoadError, TaskError};
use crate::model::{Chart, Milestone, Task};

/// Wire shape of one milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneRecord {
    pub milestonedate: NaiveDate,
    pub label: String,
}

/// Wire shape of one task. `progress` is widened so out-of-range values
/// reject the record instead of failing the whole parse.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    #[serde(default)]
    pub level: u32,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub status: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub milestones: Vec<MilestoneRecord>,
}

fn default_color() -> String {
    "#4682b4".to_string()
}

/// Top-level payload delivered by the data source.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartData {
    #[serde(rename = "tasksHeader")]
    pub tasks_header: String,
    pub tasks: Vec<TaskRecord>,
}

/// A task that failed validation, with the reason it was dropped.
#[derive(Debug, Clone)]
pub struct RejectedTask {
    pub id: String,
    pub reason: TaskError,
}

/// Outcome of a load: the accepted chart plus a record of the rejects.
#[derive(Debug)]
pub struct LoadReport {
    pub chart: Chart,
    pub rejected: Vec<RejectedTask>,
}

/// Build a chart from an already-parsed payload.
pub fn load_chart(data: ChartData) -> Result<LoadReport, LoadError> {
    if data.tasks.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut chart = Chart::new(data.tasks_header);
    let mut rejected = Vec::new();

    for record in data.tasks {
        match into_task(record) {
            Ok(task) => chart.tasks.push(task),
            Err((id, reason)) => {
                warn!(task = %id, %reason, "dropping invalid task");
                rejected.push(RejectedTask { id, reason });
            }
        }
    }

    if chart.tasks.is_empty() {
        return Err(LoadError::NoValidTasks {
            rejected: rejected.len(),
        });
    }

    Ok(LoadReport { chart, rejected })
}

/// Parse and load a chart from JSON text.
pub fn load_chart_json(json: &str) -> Result<LoadReport, LoadError> {
    load_chart(serde_json::from_str(json)?)
}

fn into_task(record: TaskRecord) -> Result<Task, (String, TaskError)> {
    if record.end < record.start {
        return Err((
            record.id,
            TaskError::EndBeforeStart {
                start: record.start,
                end: record.end,
            },
        ));
    }
    if !(0..=100).contains(&record.progress) {
        return Err((record.id, TaskError::ProgressOutOfRange(record.progress)));
    }

    Ok(Task {
        id: record.id,
        level: record.level,
        name: record.name,
        start: record.start,
        end: record.end,
        status: record.status,
        color: record.color,
        progress: record.progress as u8,
        milestones: record
            .milestones
            .into_iter()
            .map(|m| Milestone::new(m.milestonedate, m.label))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "tasksHeader": "Release 1.0",
        "tasks": [
            {
                "id": "t1",
                "level": 0,
                "name": "Design",
                "start": "2024-01-03",
                "end": "2024-01-10",
                "status": "active",
                "color": "#336699",
                "progress": 40,
                "milestones": [
                    { "milestonedate": "2024-01-08", "label": "Mockups" }
                ]
            },
            {
                "id": "t2",
                "level": 1,
                "name": "Icons",
                "start": "2024-01-05",
                "end": "2024-01-07",
                "progress": 100
            }
        ]
    }"##;

    #[test]
    fn loads_well_formed_payload() {
        let report = load_chart_json(PAYLOAD).unwrap();
        assert_eq!(report.chart.header, "Release 1.0");
        assert_eq!(report.chart.tasks.len(), 2);
        assert!(report.rejected.is_empty());

        let design = &report.chart.tasks[0];
        assert_eq!(design.progress, 40);
        assert_eq!(design.milestones.len(), 1);
        assert_eq!(design.milestones[0].label, "Mockups");

        // Optional fields fall back to defaults.
        let icons = &report.chart.tasks[1];
        assert_eq!(icons.status, "");
        assert_eq!(icons.color, "#4682b4");
        assert!(icons.milestones.is_empty());
    }

    #[test]
    fn malformed_tasks_are_dropped_not_fatal() {
        let json = r#"{
            "tasksHeader": "Plan",
            "tasks": [
                { "id": "ok", "name": "Fine", "start": "2024-01-03", "end": "2024-01-05" },
                { "id": "rev", "name": "Reversed", "start": "2024-01-05", "end": "2024-01-03" },
                { "id": "pct", "name": "Overdone", "start": "2024-01-03", "end": "2024-01-05", "progress": 140 }
            ]
        }"#;

        let report = load_chart_json(json).unwrap();
        assert_eq!(report.chart.tasks.len(), 1);
        assert_eq!(report.chart.tasks[0].id, "ok");
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].id, "rev");
        assert!(matches!(
            report.rejected[0].reason,
            TaskError::EndBeforeStart { .. }
        ));
        assert_eq!(report.rejected[1].id, "pct");
        assert_eq!(
            report.rejected[1].reason,
            TaskError::ProgressOutOfRange(140)
        );
    }

    #[test]
    fn negative_progress_rejects_the_record() {
        let json = r#"{
            "tasksHeader": "Plan",
            "tasks": [
                { "id": "ok", "name": "Fine", "start": "2024-01-03", "end": "2024-01-05" },
                { "id": "neg", "name": "Under", "start": "2024-01-03", "end": "2024-01-05", "progress": -5 }
            ]
        }"#;

        let report = load_chart_json(json).unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].reason, TaskError::ProgressOutOfRange(-5));
    }

    #[test]
    fn all_rejected_is_an_error() {
        let json = r#"{
            "tasksHeader": "Plan",
            "tasks": [
                { "id": "rev", "name": "Reversed", "start": "2024-01-05", "end": "2024-01-03" }
            ]
        }"#;

        let err = load_chart_json(json).unwrap_err();
        assert!(matches!(err, LoadError::NoValidTasks { rejected: 1 }));
    }

    #[test]
    fn empty_payload_is_an_error() {
        let err = load_chart_json(r#"{ "tasksHeader": "Plan", "tasks": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn unparseable_date_fails_the_parse() {
        let json = r#"{
            "tasksHeader": "Plan",
            "tasks": [
                { "id": "bad", "name": "Nope", "start": "03/01/2024", "end": "2024-01-05" }
            ]
        }"#;
        assert!(matches!(
            load_chart_json(json).unwrap_err(),
            LoadError::Parse(_)
        ));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// A point-in-time marker attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(rename = "milestonedate")]
    pub date: NaiveDate,
    pub label: String,
}

impl Milestone {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

/// A single scheduled task in the Gantt chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier supplied by the data source.
    pub id: String,
    /// Nesting depth; 0 = top-level.
    pub level: u32,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: String,
    /// Display color for the task bar and list row (CSS color string).
    pub color: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Task {
    /// Create a new top-level task with sensible defaults.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            level: 0,
            name: name.into(),
            start,
            end,
            status: String::new(),
            color: "#4682b4".to_string(), // Steel blue
            progress: 0,
            milestones: Vec::new(),
        }
    }

    /// Check the fields that make a task renderable.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.end < self.start {
            return Err(TaskError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        if self.progress > 100 {
            return Err(TaskError::ProgressOutOfRange(i64::from(self.progress)));
        }
        Ok(())
    }

    /// Task length in whole days; 0 for a single-day task.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

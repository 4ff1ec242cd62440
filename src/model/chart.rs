use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::Task;

/// A loaded chart: the task-list header label and the tasks it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub header: String,
    pub tasks: Vec<Task>,
}

impl Chart {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            tasks: Vec::new(),
        }
    }

    /// Earliest start and latest end across all tasks.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.tasks.iter().map(|t| t.start).min()?;
        let max = self.tasks.iter().map(|t| t.end).max()?;
        Some((min, max))
    }
}

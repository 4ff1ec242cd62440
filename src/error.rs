use chrono::NaiveDate;

/// Errors that fail an entire layout pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The visible range ends before it starts.
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The visible range is longer than the engine will lay out.
    #[error("date range of {days} days exceeds the supported maximum of {max} days")]
    RangeTooLarge { days: i64, max: i64 },
}

/// Reasons a single task is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task ends {end} before it starts {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("progress {0} is outside 0-100")]
    ProgressOutOfRange(i64),
}

/// Errors that fail a whole chart load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse chart data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload contained no tasks at all.
    #[error("chart data has no tasks")]
    Empty,

    /// Every task in the payload failed validation.
    #[error("no valid tasks in chart data ({rejected} rejected)")]
    NoValidTasks { rejected: usize },
}

/// A specialized Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

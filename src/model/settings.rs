use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::chart::Chart;
use super::timeline::ZoomLevel;

/// Days of padding added on each side when the range is fitted to a chart.
const RANGE_PADDING_DAYS: i64 = 2;

/// Chart-wide options supplied by the caller.
///
/// The visible range and pixel dimensions are fixed for the lifetime of a
/// chart session; `zoom` is the only field the zoom controller mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub zoom: ZoomLevel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Emit geometry for top-level tasks only.
    pub collapse_child_tasks: bool,
    /// Row height excluding the 1px border above and below.
    pub row_height: f32,
    pub taskbar_height: f32,
    pub milestone_height: f32,
    pub milestone_width: f32,
    /// Height of the chart header band above the first row.
    pub header_height: f32,
    pub show_progress_bar: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            zoom: ZoomLevel::Day,
            start_date: today - Duration::days(RANGE_PADDING_DAYS),
            end_date: today + Duration::days(365),
            collapse_child_tasks: false,
            row_height: 20.0,
            taskbar_height: 18.0,
            milestone_height: 16.0,
            milestone_width: 16.0,
            header_height: 40.0,
            show_progress_bar: true,
        }
    }
}

impl Settings {
    pub fn new(zoom: ZoomLevel, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            zoom,
            start_date,
            end_date,
            ..Default::default()
        }
    }

    /// Fit the visible range to the chart's tasks with two days of padding
    /// on each side. Charts without tasks keep the current range.
    pub fn fit_range_to(&mut self, chart: &Chart) {
        if let Some((min, max)) = chart.date_span() {
            self.start_date = min - Duration::days(RANGE_PADDING_DAYS);
            self.end_date = max + Duration::days(RANGE_PADDING_DAYS);
        }
    }
}

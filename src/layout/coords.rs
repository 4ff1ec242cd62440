//! Date-to-pixel mapping over a built grid.
//!
//! At daily and weekly zoom a day is one whole cell. At monthly zoom a day
//! occupies the span `[(day-1)/n, day/n]` of its month cell, where `n` is
//! that month's real day count; bar edges and milestone markers all use the
//! same span so they stay aligned with the header cells.

use chrono::{Datelike, Duration, NaiveDate};

use super::calendar;
use super::grid::{PeriodGrid, CELL_BORDER};
use crate::model::TimelineScale;

impl PeriodGrid {
    /// Horizontal stride of one cell including its trailing border.
    pub fn stride(&self) -> f32 {
        self.period_width + CELL_BORDER
    }

    /// X offset of the left edge of the day containing `date`, measured
    /// from the left edge of the grid. Negative for dates before the grid.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        match self.scale {
            TimelineScale::Days | TimelineScale::Weeks => {
                calendar::days_between(self.grid_start, date) as f32 * self.stride()
            }
            TimelineScale::Months => {
                let months = calendar::months_between(self.grid_start, date) as f32;
                let day_fraction =
                    (date.day() - 1) as f32 / calendar::days_in_month(date) as f32;
                (months + day_fraction) * self.stride()
            }
        }
    }

    /// X offset of the right edge of the day containing `date`.
    pub fn date_end_x(&self, date: NaiveDate) -> f32 {
        match self.scale {
            TimelineScale::Days | TimelineScale::Weeks => self.date_to_x(date) + self.stride(),
            TimelineScale::Months => {
                self.date_to_x(date) + self.stride() / calendar::days_in_month(date) as f32
            }
        }
    }

    /// Approximate inverse of `date_to_x`, accurate to the nearest day.
    pub fn x_to_date(&self, x: f32) -> NaiveDate {
        match self.scale {
            TimelineScale::Days | TimelineScale::Weeks => {
                self.grid_start + Duration::days((x / self.stride()).round() as i64)
            }
            TimelineScale::Months => {
                let periods = x / self.stride();
                let months = periods.floor();
                let month_start = calendar::add_months(self.grid_start, months as i64);
                let days = (periods - months) * calendar::days_in_month(month_start) as f32;
                month_start + Duration::days(days.round() as i64)
            }
        }
    }

    /// Pixel offset of the current-date marker, centered on today's day
    /// span. `None` when today falls outside the grid.
    pub fn today_offset(&self, today: NaiveDate) -> Option<f32> {
        if today < self.grid_start || today > self.grid_end {
            return None;
        }
        let center = match self.scale {
            TimelineScale::Days | TimelineScale::Weeks => self.period_width / 2.0,
            TimelineScale::Months => {
                self.stride() / (2.0 * calendar::days_in_month(today) as f32)
            }
        };
        Some(self.date_to_x(today) + center)
    }
}

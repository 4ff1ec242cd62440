//! Builds the discrete time grid the chart is drawn against.

use chrono::{Datelike, Duration, NaiveDate};

use super::calendar;
use crate::error::LayoutError;
use crate::model::{TimelineScale, ZoomLevel};

/// Pixel width of one day cell at daily zoom.
const DAY_CELL_WIDTH: f32 = 36.0;
/// Pixel width of one day cell at weekly zoom.
const WEEK_CELL_WIDTH: f32 = 20.0;
/// Pixel width of one month cell at monthly zoom.
const MONTH_CELL_WIDTH: f32 = 100.0;
/// Each cell is followed by a 1px border in the rendered table.
pub const CELL_BORDER: f32 = 1.0;
/// Longest range the engine will lay out, in days.
const MAX_RANGE_DAYS: i64 = 366 * 200;

/// Weekday/weekend classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Weekday,
    Weekend,
}

/// One column of the chart at the active scale.
#[derive(Debug, Clone)]
pub struct PeriodCell {
    /// First date the cell covers.
    pub date: NaiveDate,
    pub label: String,
    pub width: f32,
    pub kind: CellKind,
}

/// A labeled band of cells in the chart header: a month at daily zoom, a
/// week at weekly zoom, a year at monthly zoom.
#[derive(Debug, Clone)]
pub struct HeaderGroup {
    pub label: String,
    pub cells: Vec<PeriodCell>,
}

/// The discrete time grid for one redraw.
#[derive(Debug, Clone)]
pub struct PeriodGrid {
    pub scale: TimelineScale,
    /// Left edge of the grid; at weekly and monthly zoom this may precede
    /// the requested start date.
    pub grid_start: NaiveDate,
    /// Right edge of the grid, inclusive.
    pub grid_end: NaiveDate,
    /// Uniform cell width at this scale.
    pub period_width: f32,
    pub groups: Vec<HeaderGroup>,
}

impl PeriodGrid {
    /// All cells in header order.
    pub fn cells(&self) -> impl Iterator<Item = &PeriodCell> {
        self.groups.iter().flat_map(|g| g.cells.iter())
    }

    pub fn period_count(&self) -> usize {
        self.groups.iter().map(|g| g.cells.len()).sum()
    }

    /// Total chart width: every cell plus its trailing border.
    pub fn total_width(&self) -> f32 {
        self.cells().map(|c| c.width + CELL_BORDER).sum()
    }
}

/// Result of building a grid: drawable, or an explicit placeholder for the
/// zoom levels that have no drawer.
#[derive(Debug, Clone)]
pub enum GridOutcome {
    Grid(PeriodGrid),
    Unsupported(ZoomLevel),
}

/// Build the period grid for `zoom` over the inclusive `[start, end]`
/// range. Deterministic and pure.
pub fn build_grid(
    zoom: ZoomLevel,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<GridOutcome, LayoutError> {
    if end < start {
        return Err(LayoutError::InvalidDateRange { start, end });
    }
    let days = calendar::days_between(start, end);
    if days > MAX_RANGE_DAYS {
        return Err(LayoutError::RangeTooLarge {
            days,
            max: MAX_RANGE_DAYS,
        });
    }

    let grid = match zoom.scale() {
        Some(TimelineScale::Days) => daily_grid(start, end),
        Some(TimelineScale::Weeks) => weekly_grid(start, end),
        Some(TimelineScale::Months) => monthly_grid(start, end),
        None => return Ok(GridOutcome::Unsupported(zoom)),
    };
    Ok(GridOutcome::Grid(grid))
}

/// One cell per day, grouped into "Month YYYY" bands.
fn daily_grid(start: NaiveDate, end: NaiveDate) -> PeriodGrid {
    let mut groups = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let month_end = calendar::last_of_month(cursor).min(end);
        let mut cells = Vec::new();
        let mut day = cursor;
        while day <= month_end {
            cells.push(PeriodCell {
                date: day,
                label: day.day().to_string(),
                width: DAY_CELL_WIDTH,
                kind: day_kind(day),
            });
            day += Duration::days(1);
        }
        groups.push(HeaderGroup {
            label: format!("{} {}", calendar::month_name(cursor), cursor.year()),
            cells,
        });
        cursor = month_end + Duration::days(1);
    }

    PeriodGrid {
        scale: TimelineScale::Days,
        grid_start: start,
        grid_end: end,
        period_width: DAY_CELL_WIDTH,
        groups,
    }
}

/// One cell per day, grouped into Sunday-to-Saturday bands. The range is
/// widened to whole weeks.
fn weekly_grid(start: NaiveDate, end: NaiveDate) -> PeriodGrid {
    let grid_start = calendar::previous_sunday(start);
    let grid_end = calendar::next_saturday(end);

    let mut groups = Vec::new();
    let mut week_start = grid_start;
    while week_start <= grid_end {
        let week_end = week_start + Duration::days(6);
        let label = format!(
            "{} {} - {} {} '{}",
            calendar::month_abbrev(week_start),
            week_start.day(),
            calendar::month_abbrev(week_end),
            week_end.day(),
            week_end.format("%y"),
        );
        let cells = (0..7)
            .map(|offset| {
                let day = week_start + Duration::days(offset);
                PeriodCell {
                    date: day,
                    label: calendar::day_letter(day).to_string(),
                    width: WEEK_CELL_WIDTH,
                    kind: day_kind(day),
                }
            })
            .collect();
        groups.push(HeaderGroup { label, cells });
        week_start = week_end + Duration::days(1);
    }

    PeriodGrid {
        scale: TimelineScale::Weeks,
        grid_start,
        grid_end,
        period_width: WEEK_CELL_WIDTH,
        groups,
    }
}

/// One cell per month, grouped into year bands. The range is widened to
/// whole months.
fn monthly_grid(start: NaiveDate, end: NaiveDate) -> PeriodGrid {
    let grid_start = calendar::first_of_month(start);
    let grid_end = calendar::last_of_month(end);

    let mut groups = Vec::new();
    let mut month = grid_start;
    while month <= grid_end {
        let year = month.year();
        let mut cells = Vec::new();
        while month <= grid_end && month.year() == year {
            cells.push(PeriodCell {
                date: month,
                label: calendar::month_name(month),
                width: MONTH_CELL_WIDTH,
                kind: CellKind::Weekday,
            });
            month = calendar::first_of_next_month(month);
        }
        groups.push(HeaderGroup {
            label: year.to_string(),
            cells,
        });
    }

    PeriodGrid {
        scale: TimelineScale::Months,
        grid_start,
        grid_end,
        period_width: MONTH_CELL_WIDTH,
        groups,
    }
}

fn day_kind(day: NaiveDate) -> CellKind {
    if calendar::is_weekend(day) {
        CellKind::Weekend
    } else {
        CellKind::Weekday
    }
}

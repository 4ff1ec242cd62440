//! Per-task pixel geometry: bar placement, progress inset, milestone
//! markers.

use super::calendar;
use super::grid::{PeriodGrid, CELL_BORDER};
use crate::model::{Settings, Task, TimelineScale};

/// 1px border above and below each task-list row.
const ROW_BORDER: f32 = 1.0;
/// The progress inset sits this far above the bar's bottom edge.
const PROGRESS_INSET: f32 = 3.0;

/// Pixel placement of one milestone marker, relative to its task bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneGeometry {
    pub label: String,
    /// Offset of the marker's left edge from the bar's left edge. Falls
    /// outside `[0, bar width]` for milestone dates outside the task span.
    pub left: f32,
    pub top: f32,
}

/// Pixel placement of one task bar, recomputed on every redraw.
#[derive(Debug, Clone)]
pub struct TaskGeometry {
    pub task_id: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Width of the progress inset; 0 when the progress bar is hidden, so
    /// the layout stays stable either way.
    pub progress_width: f32,
    pub progress_top: f32,
    pub milestones: Vec<MilestoneGeometry>,
}

/// Vertical offset of visible row `index` below the header.
pub fn row_top(index: usize, row_height: f32, header_height: f32) -> f32 {
    header_height + index as f32 * (row_height + 2.0 * ROW_BORDER)
}

/// Compute bar geometry for `task`, drawn as the `index`-th visible row.
///
/// The task is assumed to have passed validation: `end >= start` and
/// `progress <= 100`.
pub fn compute_geometry(
    grid: &PeriodGrid,
    settings: &Settings,
    task: &Task,
    index: usize,
) -> TaskGeometry {
    let (left, width) = match grid.scale {
        TimelineScale::Days | TimelineScale::Weeks => {
            // Pull the bar in by the 1px border at each end.
            let left = grid.date_to_x(task.start) + CELL_BORDER;
            let width = grid.date_end_x(task.end) - grid.date_to_x(task.start) - 2.0 * CELL_BORDER;
            (left, width)
        }
        TimelineScale::Months => {
            let left = grid.date_to_x(task.start);
            let width = grid.date_end_x(task.end) - grid.date_to_x(task.start);
            (left, width)
        }
    };

    let progress_width = if settings.show_progress_bar {
        width * f32::from(task.progress) / 100.0
    } else {
        0.0
    };

    let milestone_top = settings.taskbar_height - (settings.milestone_height + 1.0);
    let milestones = task
        .milestones
        .iter()
        .map(|milestone| MilestoneGeometry {
            label: milestone.label.clone(),
            left: milestone_left(grid, task, milestone.date, width, settings.milestone_width),
            top: milestone_top,
        })
        .collect();

    TaskGeometry {
        task_id: task.id.clone(),
        left,
        top: row_top(index, settings.row_height, settings.header_height),
        width,
        height: settings.taskbar_height,
        progress_width,
        progress_top: settings.taskbar_height - PROGRESS_INSET,
        milestones,
    }
}

/// Offset of a milestone icon's left edge within the bar, centered on the
/// milestone's position.
fn milestone_left(
    grid: &PeriodGrid,
    task: &Task,
    date: chrono::NaiveDate,
    bar_width: f32,
    icon_width: f32,
) -> f32 {
    let center = match grid.scale {
        TimelineScale::Days | TimelineScale::Weeks => {
            let days = calendar::days_between(task.start, date) as f32;
            days * grid.stride() + grid.period_width / 2.0
        }
        TimelineScale::Months => {
            let duration = task.duration_days();
            if duration == 0 {
                // A single-day task has no span to interpolate over;
                // center the marker in the bar.
                bar_width / 2.0
            } else {
                let fraction = calendar::days_between(task.start, date) as f32 / duration as f32;
                fraction * bar_width
            }
        }
    };
    center - icon_width / 2.0
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::layout::grid::{build_grid, GridOutcome};
    use crate::model::ZoomLevel;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn range_end() -> NaiveDate {
        base() + Duration::days(519)
    }

    fn grid(zoom: ZoomLevel) -> PeriodGrid {
        match build_grid(zoom, base(), range_end()).unwrap() {
            GridOutcome::Grid(g) => g,
            GridOutcome::Unsupported(zoom) => panic!("no grid for {zoom:?}"),
        }
    }

    prop_compose! {
        /// A task lying entirely within the test range.
        fn arb_task()(
            start_offset in 0i64..400,
            duration in 0i64..119,
            progress in 0u8..=100,
        ) -> Task {
            let start = base() + Duration::days(start_offset);
            let mut task = Task::new("t", "Generated", start, start + Duration::days(duration));
            task.progress = progress;
            task
        }
    }

    proptest! {
        /// In-range bars never start before the grid or run past its right
        /// edge.
        #[test]
        fn bars_stay_inside_the_grid(task in arb_task()) {
            for zoom in [ZoomLevel::Day, ZoomLevel::Week, ZoomLevel::Month] {
                let g = grid(zoom);
                let s = Settings::new(zoom, base(), range_end());
                let geometry = compute_geometry(&g, &s, &task, 0);

                prop_assert!(geometry.left >= 0.0);
                prop_assert!(geometry.width > 0.0);
                prop_assert!(
                    geometry.left + geometry.width <= g.total_width() + 1e-2,
                    "{} + {} > {} at {:?}",
                    geometry.left, geometry.width, g.total_width(), zoom
                );
            }
        }

        /// An earlier start never yields a larger left offset.
        #[test]
        fn left_offsets_are_monotone_in_start_date(a in arb_task(), b in arb_task()) {
            let (first, second) = if a.start <= b.start { (a, b) } else { (b, a) };
            for zoom in [ZoomLevel::Day, ZoomLevel::Week, ZoomLevel::Month] {
                let g = grid(zoom);
                let s = Settings::new(zoom, base(), range_end());
                let first_geometry = compute_geometry(&g, &s, &first, 0);
                let second_geometry = compute_geometry(&g, &s, &second, 0);
                prop_assert!(first_geometry.left <= second_geometry.left + 1e-3);
            }
        }

        /// The progress inset never escapes the bar.
        #[test]
        fn progress_width_is_a_fraction_of_the_bar(task in arb_task()) {
            let g = grid(ZoomLevel::Day);
            let s = Settings::new(ZoomLevel::Day, base(), range_end());
            let geometry = compute_geometry(&g, &s, &task, 0);
            prop_assert!(geometry.progress_width >= 0.0);
            prop_assert!(geometry.progress_width <= geometry.width + 1e-3);
        }
    }
}

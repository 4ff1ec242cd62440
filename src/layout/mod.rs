//! The layout pipeline: settings + tasks in, grid + geometry out.
//!
//! Every call recomputes the full grid and all task geometry from scratch;
//! there is no caching or incremental re-layout.

pub mod calendar;
pub mod coords;
pub mod geometry;
pub mod grid;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::LayoutError;
use crate::model::{Settings, Task, Viewport, ZoomLevel, ZoomStep};
use geometry::TaskGeometry;
use grid::{GridOutcome, PeriodGrid};

/// Everything the rendering layer needs to draw one frame of the chart.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    pub grid: PeriodGrid,
    /// X offset of the current-date marker; `None` when today is outside
    /// the grid.
    pub today_offset: Option<f32>,
    /// Geometry for each visible task, in row order.
    pub bars: Vec<TaskGeometry>,
}

/// Result of a layout pass: a drawable timeline, or an explicit
/// placeholder for zoom levels without a drawer.
#[derive(Debug, Clone)]
pub enum ChartLayout {
    Timeline(TimelineLayout),
    Unsupported { zoom: ZoomLevel },
}

/// Run the full layout pipeline for one redraw.
///
/// Tasks are assumed validated at load time; `collapse_child_tasks` limits
/// the output to level-0 tasks.
pub fn layout_chart(
    settings: &Settings,
    tasks: &[Task],
    today: NaiveDate,
) -> Result<ChartLayout, LayoutError> {
    let grid = match grid::build_grid(settings.zoom, settings.start_date, settings.end_date)? {
        GridOutcome::Grid(grid) => grid,
        GridOutcome::Unsupported(zoom) => return Ok(ChartLayout::Unsupported { zoom }),
    };

    let bars: Vec<TaskGeometry> = visible_tasks(tasks, settings.collapse_child_tasks)
        .enumerate()
        .map(|(index, task)| geometry::compute_geometry(&grid, settings, task, index))
        .collect();
    debug!(
        periods = grid.period_count(),
        bars = bars.len(),
        "laid out chart"
    );

    Ok(ChartLayout::Timeline(TimelineLayout {
        today_offset: grid.today_offset(today),
        grid,
        bars,
    }))
}

/// Convenience wrapper using the local calendar date for the today marker.
pub fn layout_chart_today(settings: &Settings, tasks: &[Task]) -> Result<ChartLayout, LayoutError> {
    layout_chart(settings, tasks, chrono::Local::now().date_naive())
}

/// Apply one zoom step and relayout.
///
/// The step is a no-op at the finest/coarsest level. The horizontal scroll
/// is restored as the same fraction of the new chart width; the vertical
/// scroll is untouched.
pub fn zoom_chart(
    step: ZoomStep,
    settings: &mut Settings,
    viewport: &mut Viewport,
    tasks: &[Task],
    today: NaiveDate,
) -> Result<ChartLayout, LayoutError> {
    let old_width = chart_width(settings)?;

    let next = match step {
        ZoomStep::In => settings.zoom.finer(),
        ZoomStep::Out => settings.zoom.coarser(),
    };
    if let Some(zoom) = next {
        settings.zoom = zoom;
    }

    let layout = layout_chart(settings, tasks, today)?;
    if let ChartLayout::Timeline(timeline) = &layout {
        viewport.rescale_scroll(old_width, timeline.grid.total_width());
    }
    Ok(layout)
}

/// Width of the grid for the current settings; 0 at unsupported zoom.
fn chart_width(settings: &Settings) -> Result<f32, LayoutError> {
    match grid::build_grid(settings.zoom, settings.start_date, settings.end_date)? {
        GridOutcome::Grid(grid) => Ok(grid.total_width()),
        GridOutcome::Unsupported(_) => Ok(0.0),
    }
}

fn visible_tasks(tasks: &[Task], collapse: bool) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| !collapse || task.level == 0)
}

//! Timeline layout and geometry engine for two-panel Gantt charts.
//!
//! The crate turns a [`Settings`] object and a list of [`Task`]s into the
//! numbers a renderer needs: a discrete [`PeriodGrid`] of header bands and
//! period cells, a [`TaskGeometry`] per visible task (bar position and
//! width, progress inset, milestone markers), and the offset of the
//! current-date marker. Rendering, styling and input handling stay with
//! the caller; every redraw is a fresh, pure computation.
//!
//! Daily, weekly and monthly zoom are drawable; quarterly and yearly zoom
//! report an explicit [`ChartLayout::Unsupported`] placeholder.

pub mod error;
pub mod io;
pub mod layout;
pub mod model;

pub use error::{LayoutError, LoadError, TaskError};
pub use io::{load_chart, load_chart_json, ChartData, LoadReport, RejectedTask};
pub use layout::geometry::{row_top, MilestoneGeometry, TaskGeometry};
pub use layout::grid::{CellKind, GridOutcome, HeaderGroup, PeriodCell, PeriodGrid};
pub use layout::{layout_chart, layout_chart_today, zoom_chart, ChartLayout, TimelineLayout};
pub use model::{Chart, Milestone, Settings, Task, TimelineScale, Viewport, ZoomLevel, ZoomStep};

pub mod chart;
pub mod settings;
pub mod task;
pub mod timeline;

pub use chart::Chart;
pub use settings::Settings;
pub use task::{Milestone, Task};
pub use timeline::{TimelineScale, Viewport, ZoomLevel, ZoomStep};

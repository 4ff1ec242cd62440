use serde::{Deserialize, Serialize};

/// Granularity of the time axis, ordered fine to coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// The scales the grid builder can actually draw.
///
/// Quarterly and yearly zoom have no drawer; a grid always carries one of
/// these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineScale {
    Days,
    Weeks,
    Months,
}

impl ZoomLevel {
    /// The next finer level, or `None` at daily zoom.
    pub fn finer(self) -> Option<ZoomLevel> {
        match self {
            ZoomLevel::Day => None,
            ZoomLevel::Week => Some(ZoomLevel::Day),
            ZoomLevel::Month => Some(ZoomLevel::Week),
            ZoomLevel::Quarter => Some(ZoomLevel::Month),
            ZoomLevel::Year => Some(ZoomLevel::Quarter),
        }
    }

    /// The next coarser level, or `None` at yearly zoom.
    pub fn coarser(self) -> Option<ZoomLevel> {
        match self {
            ZoomLevel::Day => Some(ZoomLevel::Week),
            ZoomLevel::Week => Some(ZoomLevel::Month),
            ZoomLevel::Month => Some(ZoomLevel::Quarter),
            ZoomLevel::Quarter => Some(ZoomLevel::Year),
            ZoomLevel::Year => None,
        }
    }

    /// The drawable scale for this level, or `None` where no drawer exists.
    pub fn scale(self) -> Option<TimelineScale> {
        match self {
            ZoomLevel::Day => Some(TimelineScale::Days),
            ZoomLevel::Week => Some(TimelineScale::Weeks),
            ZoomLevel::Month => Some(TimelineScale::Months),
            ZoomLevel::Quarter | ZoomLevel::Year => None,
        }
    }
}

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

/// Scroll state carried across redraws and zoom changes.
///
/// The horizontal position is rescaled so the same fraction of the chart
/// stays in view when the grid width changes; the vertical position is
/// zoom-invariant.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub scroll_left: f32,
    pub scroll_top: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescale the horizontal scroll after the chart width changed.
    pub fn rescale_scroll(&mut self, old_width: f32, new_width: f32) {
        if old_width > 0.0 {
            self.scroll_left = self.scroll_left / old_width * new_width;
        }
    }
}

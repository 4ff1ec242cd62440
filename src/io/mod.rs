pub mod load;

pub use load::{load_chart, load_chart_json, ChartData, LoadReport, RejectedTask};

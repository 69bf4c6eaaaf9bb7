pub mod charts;
pub mod grid;
pub mod output;
pub mod page;
pub mod serve;
pub mod svg;

pub use charts::{cost_chart, prediction_chart};
pub use grid::PredictionGrid;
pub use output::{build_pages, write_reports};
pub use page::{render_page, RunSummary};
pub use serve::{serve, ReportPages};

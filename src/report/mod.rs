// Report module: CSV persistence and chart rendering for the aggregated
// tables. Pure I/O over already-scored data.

pub mod chart;
pub mod csv;

pub use chart::render_bar_chart;
pub use csv::{write_detection_csv, write_engagement_csv, write_scores_csv, write_video_csv};

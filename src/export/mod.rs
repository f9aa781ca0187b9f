//! Export of training datasets and run statistics

pub mod dataset;

pub use dataset::{DatasetReport, write_lines, write_lines_to_path, write_report_json};

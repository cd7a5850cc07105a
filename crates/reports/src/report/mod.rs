//! Report module - metadata, request parsing and the handler contract.

mod report_model;
mod report_traits;

pub use report_model::{ReportInfo, ReportRequest, ReportType};
pub use report_traits::ReportHandler;

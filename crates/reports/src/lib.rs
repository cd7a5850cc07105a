//! Reportkit Reports - report handlers over a trading-platform host.
//!
//! A handler reads host records through [`host::ReportServer`], shapes them
//! with the `reportkit-core` table and aggregation tools and returns an
//! element tree for the frontend. Host failures never abort a report: the
//! handler logs them and renders whatever data it obtained.

pub mod errors;
pub mod host;
pub mod margin_call;
pub mod report;
pub mod settings;

pub use margin_call::MarginCallReport;
pub use report::{ReportHandler, ReportInfo, ReportRequest};
pub use settings::{ReportLayout, ReportSettings};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

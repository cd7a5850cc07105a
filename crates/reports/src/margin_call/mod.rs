//! Margin call module - the report over accounts under margin call or
//! stop out.

mod margin_call_constants;
mod margin_call_report;


pub use margin_call_constants::*;
pub use margin_call_report::MarginCallReport;

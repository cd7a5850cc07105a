//! Host module - records and the host query contract.

mod host_model;
mod host_traits;

pub use host_model::{
    group_currency, AccountRecord, ConversionSide, GroupRecord, MarginLevel, MarginLevelType,
};
pub use host_traits::ReportServer;

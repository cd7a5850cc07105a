//! Contract of the trading-platform host.
//!
//! The host owns all record storage and rate lookups. Report handlers only
//! read through this trait, so any backend (or an in-memory fake) can
//! drive them.

use super::host_model::{AccountRecord, ConversionSide, GroupRecord, MarginLevel};
use crate::errors::HostResult;

/// Read access to host records and currency conversion.
///
/// Every method may fail; handlers treat failures as missing data.
pub trait ReportServer: Send + Sync {
    /// Accounts whose group matches `group_mask`. An empty mask means all groups.
    fn get_accounts_by_group(&self, group_mask: &str) -> HostResult<Vec<AccountRecord>>;

    fn get_all_groups(&self) -> HostResult<Vec<GroupRecord>>;

    /// Margin snapshots of the accounts matching `group_mask`.
    fn get_margin_levels_by_group(&self, group_mask: &str) -> HostResult<Vec<MarginLevel>>;

    /// Multiplier converting one unit of `from` into `to`.
    fn convert_rate(&self, from: &str, to: &str, side: ConversionSide) -> HostResult<f64>;
}

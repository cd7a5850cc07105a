//! Margin call report.
//!
//! Lists the accounts of a group mask whose margin state is margin call or
//! stop out. The data-table layout converts every monetary column into the
//! target currency and adds one converted total row; the static layout keeps
//! account currencies and appends one total row per currency.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error, warn};
use serde_json::Value;

use reportkit_core::aggregation::{
    conversion_multiplier, floating_pl, margin_level_ratio, CurrencyAccumulator, CurrencyTotals,
};
use reportkit_core::constants::DEFAULT_TOTAL_TITLE;
use reportkit_core::element::{data_table, div, h1, text};
use reportkit_core::table::static_table;
use reportkit_core::utils::format_truncated;
use reportkit_core::{ColumnDefinition, Element, SortDirection, TableBuilder, TableRow};

use super::margin_call_constants::*;
use crate::errors::Result;
use crate::host::{group_currency, AccountRecord, GroupRecord, MarginLevel, ReportServer};
use crate::report::{ReportHandler, ReportInfo, ReportRequest, ReportType};
use crate::settings::{ReportLayout, ReportSettings};

/// Host records for one invocation. Whatever failed to load is empty.
#[derive(Debug, Default)]
struct HostSnapshot {
    accounts: Vec<AccountRecord>,
    groups: Vec<GroupRecord>,
    margins: HashMap<i64, MarginLevel>,
}

/// An account under margin call or stop out.
#[derive(Debug)]
struct AlertingAccount<'a> {
    account: &'a AccountRecord,
    margin: &'a MarginLevel,
    /// Deposit currency of the account's group
    currency: String,
}

impl AlertingAccount<'_> {
    fn floating_pl(&self) -> f64 {
        floating_pl(self.margin.equity, self.margin.balance)
    }

    /// Monetary fields in account currency, keyed like the total row.
    fn amounts(&self) -> [(&'static str, f64); 6] {
        [
            (COL_BALANCE, self.margin.balance),
            (COL_CREDIT, self.margin.credit),
            (COL_EQUITY, self.margin.equity),
            (COL_FLOATING_PL, self.floating_pl()),
            (COL_MARGIN, self.margin.margin),
            (COL_MARGIN_FREE, self.margin.margin_free),
        ]
    }

    /// Display row with monetary cells scaled by `multiplier`.
    fn to_row(&self, multiplier: f64, currency: &str, digits: u32) -> TableRow {
        let mut row = TableRow::new()
            .cell(COL_LOGIN, self.account.login.to_string())
            .cell(COL_NAME, self.account.name.as_str())
            .cell(COL_LEVERAGE, format_truncated(self.margin.leverage, digits));
        for (field, amount) in self.amounts() {
            row.insert(field, format_truncated(amount * multiplier, digits));
        }
        row.cell(
            COL_MARGIN_LEVEL,
            format_truncated(
                margin_level_ratio(self.margin.equity, self.margin.margin),
                digits,
            ),
        )
        .cell(COL_CURRENCY, currency)
    }
}

/// Report listing accounts under margin call or stop out.
pub struct MarginCallReport {
    server: Arc<dyn ReportServer>,
    settings: ReportSettings,
}

impl MarginCallReport {
    pub fn new(server: Arc<dyn ReportServer>, settings: ReportSettings) -> Self {
        Self { server, settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Loads accounts, groups and margin levels. Each query degrades to an
    /// empty result on its own.
    fn fetch_snapshot(&self, group_mask: &str) -> HostSnapshot {
        let accounts = self
            .server
            .get_accounts_by_group(group_mask)
            .unwrap_or_else(|e| {
                error!("{}: failed to load accounts for '{}': {}", LOG_CONTEXT, group_mask, e);
                Vec::new()
            });
        let groups = self.server.get_all_groups().unwrap_or_else(|e| {
            error!("{}: failed to load groups: {}", LOG_CONTEXT, e);
            Vec::new()
        });
        let margins = self
            .server
            .get_margin_levels_by_group(group_mask)
            .unwrap_or_else(|e| {
                error!(
                    "{}: failed to load margin levels for '{}': {}",
                    LOG_CONTEXT, group_mask, e
                );
                Vec::new()
            })
            .into_iter()
            .map(|margin| (margin.login, margin))
            .collect();

        HostSnapshot {
            accounts,
            groups,
            margins,
        }
    }

    /// Accounts in host order whose margin snapshot is alerting. Accounts
    /// without a snapshot are treated as normal.
    fn alerting_accounts<'a>(&self, snapshot: &'a HostSnapshot) -> Vec<AlertingAccount<'a>> {
        snapshot
            .accounts
            .iter()
            .filter_map(|account| {
                let margin = snapshot.margins.get(&account.login)?;
                if !margin.level_type.is_alerting() {
                    return None;
                }
                let currency = group_currency(&snapshot.groups, &account.group)
                    .unwrap_or(self.settings.unknown_currency.as_str())
                    .to_string();
                Some(AlertingAccount {
                    account,
                    margin,
                    currency,
                })
            })
            .collect()
    }

    /// Multiplier from `currency` into the target currency, looked up once
    /// per currency. Failed lookups fall back to `1.0`.
    fn multiplier(&self, currency: &str, cache: &mut HashMap<String, f64>) -> f64 {
        if let Some(multiplier) = cache.get(currency) {
            return *multiplier;
        }

        let target = self.settings.target_currency.as_str();
        let side = self.settings.conversion_side;
        let multiplier = match conversion_multiplier(currency, target, |from, to| {
            self.server.convert_rate(from, to, side)
        }) {
            Ok(rate) if rate.is_finite() => rate,
            Ok(rate) => {
                warn!(
                    "{}: rate {}->{} is not finite ({}), using 1.0",
                    LOG_CONTEXT, currency, target, rate
                );
                1.0
            }
            Err(e) => {
                warn!("{}: {}, using 1.0", LOG_CONTEXT, e);
                1.0
            }
        };

        cache.insert(currency.to_string(), multiplier);
        multiplier
    }

    fn build_data_table(&self, accounts: &[AlertingAccount<'_>]) -> Result<Element> {
        let digits = self.settings.display_digits;
        let target = self.settings.target_currency.as_str();

        let mut builder = TableBuilder::new(TABLE_NAME);
        builder
            .set_id_column(COL_LOGIN)?
            .set_sort(COL_LOGIN, SortDirection::Desc)?
            .enable_refresh_button(false)?
            .enable_bookmarks_button(false)?
            .enable_export_button(true)?
            .enable_total(true)?
            .set_total_title(DEFAULT_TOTAL_TITLE)?;
        for column in column_definitions() {
            builder.add_column(column)?;
        }

        let mut multipliers = HashMap::new();
        let mut total = CurrencyAccumulator::with_fields(target, &TOTAL_FIELDS);
        for account in accounts {
            let multiplier = self.multiplier(&account.currency, &mut multipliers);
            total.add_row(&account.amounts(), multiplier);
            builder.add_row(account.to_row(multiplier, target, digits))?;
        }
        builder.set_total_data(vec![total.to_total_row(digits)])?;

        Ok(data_table(builder.materialize()?))
    }

    fn build_static_table(&self, accounts: &[AlertingAccount<'_>]) -> Element {
        let digits = self.settings.display_digits;

        let mut totals = CurrencyTotals::new();
        let mut rows = Vec::with_capacity(accounts.len());
        for account in accounts {
            totals.entry(&account.currency).add_row(&account.amounts(), 1.0);
            rows.push(account.to_row(1.0, &account.currency, digits));
        }

        let total_rows: Vec<TableRow> = totals
            .iter()
            .map(|total| {
                total
                    .to_display_row(digits)
                    .cell(COL_LOGIN, DEFAULT_TOTAL_TITLE)
                    .cell(COL_CURRENCY, total.currency())
            })
            .collect();

        static_table(&column_definitions(), &rows, &total_rows)
    }
}

impl ReportHandler for MarginCallReport {
    fn about(&self) -> ReportInfo {
        ReportInfo {
            version: REPORT_VERSION,
            name: REPORT_NAME.to_string(),
            description: REPORT_DESCRIPTION.to_string(),
            report_type: ReportType::Group,
        }
    }

    fn create(&self, request: &Value) -> Result<Element> {
        self.settings.validate()?;

        let request = ReportRequest::from_json(request);
        let snapshot = self.fetch_snapshot(&request.group);
        let accounts = self.alerting_accounts(&snapshot);
        debug!(
            "{}: {} of {} accounts in '{}' are alerting",
            LOG_CONTEXT,
            accounts.len(),
            snapshot.accounts.len(),
            request.group
        );

        let table = match self.settings.layout {
            ReportLayout::DataTable => self.build_data_table(&accounts)?,
            ReportLayout::Static => self.build_static_table(&accounts),
        };

        Ok(div(vec![h1(vec![text(REPORT_TITLE)]), table]))
    }
}

fn column_definitions() -> Vec<ColumnDefinition> {
    COLUMNS
        .iter()
        .map(|(key, label)| ColumnDefinition::new(*key, *label))
        .collect()
}

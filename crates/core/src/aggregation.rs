//! Currency-normalized totals for report tables.
//!
//! Each source row's monetary fields are multiplied by the conversion
//! multiplier of the row's currency and added to the accumulator of the
//! reporting currency. Sums are kept at full precision and only truncated
//! when turned into a total row.

use std::collections::BTreeMap;

use crate::json::{number, JsonObject};
use crate::table::TableRow;
use crate::utils::{format_truncated, truncate_fixed};

/// Floating profit/loss of an account.
pub fn floating_pl(equity: f64, balance: f64) -> f64 {
    equity - balance
}

/// Margin level in percent, `0` when no margin is used.
pub fn margin_level_ratio(equity: f64, margin: f64) -> f64 {
    if margin > 0.0 {
        equity / margin * 100.0
    } else {
        0.0
    }
}

/// Multiplier converting amounts from `from` into `to`.
///
/// Equal currencies never hit `convert`.
pub fn conversion_multiplier<E>(
    from: &str,
    to: &str,
    convert: impl FnOnce(&str, &str) -> Result<f64, E>,
) -> Result<f64, E> {
    if from == to {
        return Ok(1.0);
    }
    convert(from, to)
}

/// Running sums of named monetary fields in one currency.
///
/// Fields keep the order in which they were first added; that order is the
/// key order of the total row.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyAccumulator {
    currency: String,
    sums: Vec<(String, f64)>,
    rows: usize,
}

impl CurrencyAccumulator {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            sums: Vec::new(),
            rows: 0,
        }
    }

    /// Accumulator whose total row always carries `fields`, starting at `0`.
    pub fn with_fields(currency: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            currency: currency.into(),
            sums: fields.iter().map(|field| (field.to_string(), 0.0)).collect(),
            rows: 0,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Number of source rows added.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Adds one source row: every amount is scaled by `multiplier` first.
    pub fn add_row(&mut self, amounts: &[(&str, f64)], multiplier: f64) {
        for (field, amount) in amounts {
            self.add(field, amount * multiplier);
        }
        self.rows += 1;
    }

    /// Current full-precision sum of `field`, `0` if never added.
    pub fn get(&self, field: &str) -> f64 {
        self.sums
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, sum)| *sum)
            .unwrap_or(0.0)
    }

    /// Total row with numeric values truncated once at `digits`.
    pub fn to_total_row(&self, digits: u32) -> JsonObject {
        self.sums
            .iter()
            .map(|(field, sum)| (field.clone(), number(truncate_fixed(*sum, digits))))
            .collect()
    }

    /// Total row as formatted cells, for static tables.
    pub fn to_display_row(&self, digits: u32) -> TableRow {
        self.sums
            .iter()
            .map(|(field, sum)| (field.clone(), format_truncated(*sum, digits)))
            .collect()
    }

    fn add(&mut self, field: &str, amount: f64) {
        match self.sums.iter_mut().find(|(name, _)| name == field) {
            Some((_, sum)) => *sum += amount,
            None => self.sums.push((field.to_string(), amount)),
        }
    }
}

/// Accumulators keyed by currency, iterated in currency order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyTotals {
    by_currency: BTreeMap<String, CurrencyAccumulator>,
}

impl CurrencyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `currency`, created on first use.
    pub fn entry(&mut self, currency: &str) -> &mut CurrencyAccumulator {
        self.by_currency
            .entry(currency.to_string())
            .or_insert_with(|| CurrencyAccumulator::new(currency))
    }

    pub fn get(&self, currency: &str) -> Option<&CurrencyAccumulator> {
        self.by_currency.get(currency)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyAccumulator> {
        self.by_currency.values()
    }

    pub fn len(&self) -> usize {
        self.by_currency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_currency.is_empty()
    }
}

//! Report settings.

use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::host::ConversionSide;

pub const ENV_TARGET_CURRENCY: &str = "REPORTKIT_TARGET_CURRENCY";
pub const ENV_DISPLAY_DIGITS: &str = "REPORTKIT_DISPLAY_DIGITS";
pub const ENV_UNKNOWN_CURRENCY: &str = "REPORTKIT_UNKNOWN_CURRENCY";
pub const ENV_LAYOUT: &str = "REPORTKIT_LAYOUT";

/// Upper bound for `display_digits`.
pub const MAX_DISPLAY_DIGITS: u32 = 10;

/// How a report presents its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportLayout {
    /// Data-table widget with sorting, export and a converted total row
    #[default]
    DataTable,
    /// Plain table in account currencies with one total row per currency
    Static,
}

impl ReportLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportLayout::DataTable => "data-table",
            ReportLayout::Static => "static",
        }
    }
}

impl FromStr for ReportLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data-table" | "datatable" => Ok(ReportLayout::DataTable),
            "static" => Ok(ReportLayout::Static),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown report layout '{}'",
                other
            ))),
        }
    }
}

/// Settings shared by the report handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettings {
    /// Currency all monetary columns and totals are converted to (default: USD)
    pub target_currency: String,
    /// Decimal places of monetary cells (default: 2)
    pub display_digits: u32,
    /// Currency shown for accounts whose group is unknown (default: N/A)
    pub unknown_currency: String,
    /// Quote side used for conversion rates (default: SELL)
    pub conversion_side: ConversionSide,
    pub layout: ReportLayout,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            target_currency: "USD".to_string(),
            display_digits: 2,
            unknown_currency: "N/A".to_string(),
            conversion_side: ConversionSide::Sell,
            layout: ReportLayout::DataTable,
        }
    }
}

impl ReportSettings {
    /// Loads settings from the environment (and a `.env` file if present).
    ///
    /// Missing variables keep their defaults; invalid ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(currency) = lookup(ENV_TARGET_CURRENCY).filter(|v| !v.trim().is_empty()) {
            settings.target_currency = currency.trim().to_uppercase();
        }
        if let Some(raw) = lookup(ENV_DISPLAY_DIGITS) {
            match raw.trim().parse::<u32>() {
                Ok(digits) if digits <= MAX_DISPLAY_DIGITS => settings.display_digits = digits,
                _ => warn!(
                    "Ignoring invalid {}='{}', using {}",
                    ENV_DISPLAY_DIGITS, raw, settings.display_digits
                ),
            }
        }
        if let Some(currency) = lookup(ENV_UNKNOWN_CURRENCY).filter(|v| !v.trim().is_empty()) {
            settings.unknown_currency = currency.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_LAYOUT) {
            match raw.parse::<ReportLayout>() {
                Ok(layout) => settings.layout = layout,
                Err(e) => warn!("Ignoring {}: {}", ENV_LAYOUT, e),
            }
        }

        settings
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<()> {
        if self.target_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "Target currency cannot be empty".to_string(),
            ));
        }
        if self.display_digits > MAX_DISPLAY_DIGITS {
            return Err(Error::InvalidConfigValue(format!(
                "Display digits must be at most {}, got {}",
                MAX_DISPLAY_DIGITS, self.display_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ReportSettings::default();
        assert_eq!(settings.target_currency, "USD");
        assert_eq!(settings.display_digits, 2);
        assert_eq!(settings.unknown_currency, "N/A");
        assert_eq!(settings.conversion_side, ConversionSide::Sell);
        assert_eq!(settings.layout, ReportLayout::DataTable);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let settings = ReportSettings::from_lookup(lookup_from(&[
            (ENV_TARGET_CURRENCY, " eur "),
            (ENV_DISPLAY_DIGITS, "4"),
            (ENV_UNKNOWN_CURRENCY, "???"),
            (ENV_LAYOUT, "Static"),
        ]));
        assert_eq!(settings.target_currency, "EUR");
        assert_eq!(settings.display_digits, 4);
        assert_eq!(settings.unknown_currency, "???");
        assert_eq!(settings.layout, ReportLayout::Static);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let settings = ReportSettings::from_lookup(lookup_from(&[
            (ENV_TARGET_CURRENCY, "   "),
            (ENV_DISPLAY_DIGITS, "eleven"),
            (ENV_LAYOUT, "pie-chart"),
        ]));
        assert_eq!(settings, ReportSettings::default());

        let too_many = ReportSettings::from_lookup(lookup_from(&[(ENV_DISPLAY_DIGITS, "11")]));
        assert_eq!(too_many.display_digits, 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = ReportSettings {
            target_currency: String::new(),
            ..ReportSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidConfigValue(_))
        ));

        let settings = ReportSettings {
            display_digits: 12,
            ..ReportSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let settings: ReportSettings =
            serde_json::from_str(r#"{"targetCurrency":"GBP","layout":"static"}"#).unwrap();
        assert_eq!(settings.target_currency, "GBP");
        assert_eq!(settings.display_digits, 2);
        assert_eq!(settings.layout, ReportLayout::Static);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("data-table".parse::<ReportLayout>().unwrap(), ReportLayout::DataTable);
        assert_eq!(" STATIC ".parse::<ReportLayout>().unwrap(), ReportLayout::Static);
        assert!("grid".parse::<ReportLayout>().is_err());
    }
}

//! Records supplied by the trading-platform host.

use serde::{Deserialize, Serialize};

/// A trading account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub login: i64,
    pub name: String,
    pub group: String,
    pub balance: f64,
    pub credit: f64,
}

/// An account group and its deposit currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub group: String,
    pub currency: String,
}

/// Margin state classification of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginLevelType {
    #[default]
    Normal,
    MarginCall,
    StopOut,
}

impl MarginLevelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarginLevelType::Normal => "NORMAL",
            MarginLevelType::MarginCall => "MARGIN_CALL",
            MarginLevelType::StopOut => "STOP_OUT",
        }
    }

    /// True for margin call and stop out.
    pub fn is_alerting(&self) -> bool {
        matches!(self, MarginLevelType::MarginCall | MarginLevelType::StopOut)
    }
}

impl std::fmt::Display for MarginLevelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Margin snapshot of one account, in the account's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarginLevel {
    pub login: i64,
    pub balance: f64,
    pub credit: f64,
    pub equity: f64,
    pub margin: f64,
    pub margin_free: f64,
    /// Margin level as reported by the host, in percent
    pub margin_level: f64,
    pub leverage: f64,
    pub level_type: MarginLevelType,
}

/// Side of the quote used for a currency conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionSide {
    Buy,
    #[default]
    Sell,
}

/// Currency of `group_name`, looked up in the host's group list.
pub fn group_currency<'a>(groups: &'a [GroupRecord], group_name: &str) -> Option<&'a str> {
    groups
        .iter()
        .find(|group| group.group == group_name)
        .map(|group| group.currency.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, currency: &str) -> GroupRecord {
        GroupRecord {
            group: name.to_string(),
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_group_currency_lookup() {
        let groups = vec![group("real\\usd", "USD"), group("real\\eur", "EUR")];
        assert_eq!(group_currency(&groups, "real\\eur"), Some("EUR"));
        assert_eq!(group_currency(&groups, "demo"), None);
        assert_eq!(group_currency(&[], "real\\usd"), None);
    }

    #[test]
    fn test_group_currency_first_match_wins() {
        let groups = vec![group("g", "USD"), group("g", "EUR")];
        assert_eq!(group_currency(&groups, "g"), Some("USD"));
    }

    #[test]
    fn test_level_type_is_alerting() {
        assert!(!MarginLevelType::Normal.is_alerting());
        assert!(MarginLevelType::MarginCall.is_alerting());
        assert!(MarginLevelType::StopOut.is_alerting());
    }

    #[test]
    fn test_level_type_serialization() {
        assert_eq!(
            serde_json::to_string(&MarginLevelType::MarginCall).unwrap(),
            "\"MARGIN_CALL\""
        );
        assert_eq!(
            serde_json::from_str::<MarginLevelType>("\"STOP_OUT\"").unwrap(),
            MarginLevelType::StopOut
        );
    }

    #[test]
    fn test_margin_level_deserialization() {
        let json = r#"{
            "login": 1001, "balance": 1000.0, "credit": 0.0, "equity": 400.0,
            "margin": 500.0, "marginFree": -100.0, "marginLevel": 80.0,
            "leverage": 100.0, "levelType": "MARGIN_CALL"
        }"#;
        let margin: MarginLevel = serde_json::from_str(json).unwrap();
        assert_eq!(margin.login, 1001);
        assert_eq!(margin.margin_free, -100.0);
        assert_eq!(margin.level_type, MarginLevelType::MarginCall);
    }
}

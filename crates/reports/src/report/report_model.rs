use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Scope a report runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Accounts selected by a group mask
    Group,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Group => "group",
        }
    }
}

/// Metadata a report publishes to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub version: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
}

impl ReportInfo {
    /// JSON form returned by the host's "about" call.
    pub fn to_json(&self) -> Value {
        json!({
            "version": self.version,
            "name": self.name,
            "description": self.description,
            "type": self.report_type.as_str(),
        })
    }
}

/// Parameters of a report invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportRequest {
    /// Group mask; empty selects every group
    pub group: String,
}

impl ReportRequest {
    /// Reads the request object. A missing or non-string `group` yields an
    /// empty mask.
    pub fn from_json(request: &Value) -> Self {
        let group = request
            .get("group")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { group }
    }
}

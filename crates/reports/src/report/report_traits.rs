use reportkit_core::element::to_json_string;
use reportkit_core::{serialize, Element};
use serde_json::Value;

use super::report_model::ReportInfo;
use crate::errors::Result;

/// A report the host can describe and run.
pub trait ReportHandler: Send + Sync {
    /// Static metadata of the report.
    fn about(&self) -> ReportInfo;

    /// Builds the report UI for `request`.
    fn create(&self, request: &Value) -> Result<Element>;

    /// Response value handed back to the host.
    fn respond(&self, request: &Value) -> Result<Value> {
        let root = self.create(request)?;
        Ok(serialize(&root))
    }

    /// Response as JSON text.
    fn render(&self, request: &Value) -> Result<String> {
        let root = self.create(request)?;
        Ok(to_json_string(&root))
    }
}

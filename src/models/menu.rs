//! Web-app menu selection model
//!
//! The tools menu posts a small JSON document back through Telegram's
//! `web_app_data` service message: `{"action": "...", "tool": "..."}`.

use serde::Deserialize;
use super::ToolKind;

/// Raw payload sent by the tools menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuSelection {
    pub action: Option<String>,
    pub tool: Option<String>,
}

/// Outcome of reading a web-app payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Payload names one of the supported tools
    Selected(ToolKind),
    /// Well-formed payload that matches no tool
    Unrecognized,
    /// Payload is not valid JSON, or is JSON `null`
    Malformed(String),
}

impl MenuSelection {
    /// Parse a payload; `null` is rejected, any other non-object JSON is an empty selection
    pub fn parse(payload: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        if value.is_null() {
            return Err(serde::de::Error::custom("payload is null"));
        }
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_owned);

        Ok(Self {
            action: field("action"),
            tool: field("tool"),
        })
    }

    /// Map the selection onto a tool, checking combinations in a fixed order
    pub fn tool_kind(&self) -> Option<ToolKind> {
        let action = self.action.as_deref();
        let tool = self.tool.as_deref();

        if action == Some("openGPT") && tool == Some("marketAnalysisBtn") {
            Some(ToolKind::MarketAnalysis)
        } else if action == Some("businessIdea") {
            Some(ToolKind::BusinessIdea)
        } else if action == Some("businessModel") {
            Some(ToolKind::BusinessModel)
        } else if action == Some("cases") {
            Some(ToolKind::CaseStudies)
        } else {
            None
        }
    }
}

/// Classify a raw web-app payload
pub fn classify_payload(payload: &str) -> MenuOutcome {
    match MenuSelection::parse(payload) {
        Ok(selection) => match selection.tool_kind() {
            Some(kind) => MenuOutcome::Selected(kind),
            None => MenuOutcome::Unrecognized,
        },
        Err(e) => MenuOutcome::Malformed(e.to_string()),
    }
}

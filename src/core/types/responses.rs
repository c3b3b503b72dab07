//! Response types
//!
//! The chat-completion wire format coming back from the provider, and the
//! normalized bug-report shapes returned to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::requests::ChatMessage;

/// Severity of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style-adjacent or low-impact issue
    Low,
    /// Issue worth fixing
    Medium,
    /// Likely defect
    High,
    /// Exploitable or crash-inducing defect
    Critical,
}

impl Severity {
    /// Parse one of the four enumerated values. Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// One normalized bug report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugReport {
    /// Type of bug or issue
    #[serde(rename = "type")]
    pub bug_type: String,
    /// Severity level
    pub severity: Severity,
    /// Line number where the issue occurs; `None` when not localizable
    pub line: Option<u32>,
    /// Description of the issue
    pub description: String,
    /// Suggested fix
    pub fix: String,
}

impl BugReport {
    /// Fallible conversion from one element of the model's JSON array.
    ///
    /// Missing fields get defaults. A severity outside the four enumerated
    /// values rejects this record only; the rest of the batch is unaffected.
    /// `line` must be a positive integer to be kept, anything else means the
    /// issue is not localizable to a single line.
    pub fn from_model_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;

        let severity = match entry.get("severity") {
            None | Some(Value::Null) => Severity::Low,
            Some(raw) => Severity::parse(raw.as_str()?)?,
        };

        let line = entry
            .get("line")
            .and_then(Value::as_u64)
            .and_then(|line| u32::try_from(line).ok())
            .filter(|&line| line >= 1);

        Some(Self {
            bug_type: entry
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            severity,
            line,
            description: entry
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("No description")
                .to_string(),
            fix: entry
                .get("fix")
                .and_then(Value::as_str)
                .unwrap_or("No fix suggestion")
                .to_string(),
        })
    }
}

/// Result of one analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identified bugs, in the order the model reported them
    pub bugs: Vec<BugReport>,
    /// Time taken for analysis in seconds
    pub analysis_time: f64,
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Response id
    #[serde(default)]
    pub id: String,

    /// Model that produced the response
    #[serde(default)]
    pub model: String,

    /// Choice list
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Usage statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

/// One completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// The completion message
    pub message: ChatMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt token count
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Completion token count
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total token count
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("low"), Some(Severity::Low));
        assert_eq!(Severity::parse("medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("high"), Some(Severity::High));
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("nonsense"), None);
        // Case-sensitive, like the reference enum
        assert_eq!(Severity::parse("LOW"), None);
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Severity::Critical);
    }

    #[test]
    fn test_bug_report_from_complete_value() {
        let value = json!({
            "type": "null_pointer",
            "severity": "high",
            "line": 12,
            "description": "dereference of None",
            "fix": "guard with an is-None check"
        });

        let bug = BugReport::from_model_value(&value).unwrap();
        assert_eq!(bug.bug_type, "null_pointer");
        assert_eq!(bug.severity, Severity::High);
        assert_eq!(bug.line, Some(12));
        assert_eq!(bug.description, "dereference of None");
        assert_eq!(bug.fix, "guard with an is-None check");
    }

    #[test]
    fn test_bug_report_defaults_for_missing_fields() {
        let bug = BugReport::from_model_value(&json!({})).unwrap();
        assert_eq!(bug.bug_type, "unknown");
        assert_eq!(bug.severity, Severity::Low);
        assert_eq!(bug.line, None);
        assert_eq!(bug.description, "No description");
        assert_eq!(bug.fix, "No fix suggestion");
    }

    #[test]
    fn test_bug_report_rejects_unknown_severity() {
        let value = json!({ "severity": "catastrophic" });
        assert!(BugReport::from_model_value(&value).is_none());
    }

    #[test]
    fn test_bug_report_rejects_non_object() {
        assert!(BugReport::from_model_value(&json!("not an object")).is_none());
        assert!(BugReport::from_model_value(&json!(42)).is_none());
    }

    #[test]
    fn test_bug_report_tolerates_unusable_line() {
        // A line the model got wrong is treated as "not localizable",
        // not as grounds to drop the record.
        let bug = BugReport::from_model_value(&json!({ "line": "twelve" })).unwrap();
        assert_eq!(bug.line, None);

        let bug = BugReport::from_model_value(&json!({ "line": -3 })).unwrap();
        assert_eq!(bug.line, None);

        let bug = BugReport::from_model_value(&json!({ "line": 0 })).unwrap();
        assert_eq!(bug.line, None);

        let bug = BugReport::from_model_value(&json!({ "line": null })).unwrap();
        assert_eq!(bug.line, None);
    }

    #[test]
    fn test_bug_report_serializes_with_type_key() {
        let bug = BugReport {
            bug_type: "logic_error".to_string(),
            severity: Severity::Medium,
            line: None,
            description: "off by one".to_string(),
            fix: "use inclusive range".to_string(),
        };

        let json = serde_json::to_value(&bug).unwrap();
        assert_eq!(json["type"], "logic_error");
        assert_eq!(json["severity"], "medium");
        assert!(json["line"].is_null());
    }

    #[test]
    fn test_first_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "model": "llama3-8b-8192",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "[]" },
                "finish_reason": "stop"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("[]"));
    }

    #[test]
    fn test_first_content_empty_choices() {
        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(response.first_content(), None);
    }
}

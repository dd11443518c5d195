//! Wire schema for the remote requirements endpoint.
//!
//! The endpoint multiplexes two operations behind one URL using an `action`
//! discriminator: a JSON POST for submissions and a query-string GET for
//! searches. Field names are camelCase on the wire.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Discriminator value for the submit operation.
pub const ACTION_SUBMIT: &str = "submitRequirement";

/// Discriminator value for the search operation.
pub const ACTION_SEARCH: &str = "getRequirements";

/// Status every new requirement starts in.
pub const INITIAL_STATUS: &str = "Pending";

/// Priority options offered by the form.
pub const PRIORITY_OPTIONS: [&str; 4] = ["Low", "Medium", "High", "Critical"];

/// Department options offered by the form.
pub const DEPARTMENT_OPTIONS: [&str; 9] = [
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Operations",
    "Finance",
    "Human Resources",
    "Other",
];

/// A file's metadata plus its base64-encoded content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentDescriptor {
    pub name: String,
    pub mime_type: String,
    pub data: String,
}

/// Outbound requirement as submitted by the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub member_name: String,
    pub member_email: String,
    pub department: String,
    pub priority: String,
    pub title: String,
    /// HTML produced by the rich-text surface.
    pub description: String,
    /// RFC 3339 UTC submission time.
    pub timestamp: String,
    pub status: String,
    pub files: Vec<AttachmentDescriptor>,
}

/// Requirement as returned by a search.
///
/// Rows come straight from spreadsheet cells, so any field may be missing,
/// `null`, or a number. Missing and `null` decode as empty text; scalars
/// decode as their string form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementRecord {
    #[serde(deserialize_with = "cell_text")]
    pub member_name: String,
    #[serde(deserialize_with = "cell_text")]
    pub member_email: String,
    #[serde(deserialize_with = "cell_text")]
    pub department: String,
    #[serde(deserialize_with = "cell_text")]
    pub priority: String,
    #[serde(deserialize_with = "cell_text")]
    pub title: String,
    #[serde(deserialize_with = "cell_text")]
    pub description: String,
    #[serde(deserialize_with = "cell_text")]
    pub timestamp: String,
    #[serde(deserialize_with = "cell_text")]
    pub status: String,
    /// Comma-joined list of uploaded file URLs.
    #[serde(deserialize_with = "optional_cell_text")]
    pub file_urls: Option<String>,
    #[serde(deserialize_with = "optional_cell_text")]
    pub admin_comments: Option<String>,
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

fn cell_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_cell_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// POST body for a submission.
#[derive(Debug, Serialize)]
pub struct SubmitEnvelope<'a> {
    pub action: &'static str,
    pub data: &'a Requirement,
}

impl<'a> SubmitEnvelope<'a> {
    #[must_use]
    pub fn new(data: &'a Requirement) -> Self {
        Self { action: ACTION_SUBMIT, data }
    }
}

/// Response to a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<RequirementRecord>>,
    #[serde(default)]
    pub message: Option<String>,
}

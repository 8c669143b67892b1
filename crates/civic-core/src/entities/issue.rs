use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueStatus, Priority};

/// A single reported civic problem.
///
/// Field names serialize in camelCase and match the persisted slot layout
/// exactly: `id, type, description, location, priority, status, date, photo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Opaque, unique, derived from creation time. Never reassigned.
    pub id: String,
    /// Free-form category label (`pothole`, `streetlight`, ...).
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub status: IssueStatus,
    /// Creation time, ISO-8601.
    pub date: DateTime<Utc>,
    /// Photo reference: a session-local URI or a remote URL.
    pub photo: Option<String>,
}

impl Issue {
    /// Human-readable status label, e.g. `In Progress`.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.status.label()
    }

    /// Case-insensitive containment check over description, location and type.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.description, &self.location, &self.issue_type]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

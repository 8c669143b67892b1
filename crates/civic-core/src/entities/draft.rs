use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// Field values supplied by the form input source when a report is submitted.
///
/// No validation happens here or downstream: empty strings are stored as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub photo: Option<String>,
}

impl IssueDraft {
    #[must_use]
    pub fn new(
        issue_type: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            issue_type: issue_type.into(),
            description: description.into(),
            location: location.into(),
            priority,
            photo: None,
        }
    }

    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

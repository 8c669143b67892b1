//! Render-sink payloads returned as JSON by `civic` commands.
//!
//! These structs define what a render sink receives: issues paired with their
//! human-readable status label, plus the query that produced them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::StatusFilter;

/// Message shown after a report has been stored.
pub const REPORT_SUCCESS_MESSAGE: &str = "Issue reported successfully!";

/// An issue as handed to a render sink.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    #[serde(flatten)]
    pub issue: Issue,
    pub status_label: String,
}

impl From<&Issue> for IssueView {
    fn from(issue: &Issue) -> Self {
        Self {
            issue: issue.clone(),
            status_label: issue.status_label(),
        }
    }
}

/// Response from `civic list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueListResponse {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub issues: Vec<IssueView>,
    pub total: usize,
    /// A query ran and matched nothing.
    pub no_results: bool,
}

impl IssueListResponse {
    #[must_use]
    pub fn new<'a>(
        search: Option<&str>,
        status: StatusFilter,
        issues: impl IntoIterator<Item = &'a Issue>,
    ) -> Self {
        let issues: Vec<IssueView> = issues.into_iter().map(IssueView::from).collect();
        Self {
            search: search.filter(|term| !term.is_empty()).map(String::from),
            status,
            total: issues.len(),
            no_results: issues.is_empty(),
            issues,
        }
    }
}

/// Response from `civic report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateResponse {
    pub issue: IssueView,
    pub message: String,
}

impl IssueCreateResponse {
    #[must_use]
    pub fn new(issue: &Issue) -> Self {
        Self {
            issue: IssueView::from(issue),
            message: REPORT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Response from `civic seed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub seeded: bool,
    pub total: usize,
}

//! Search and status filtering over the issue collection.

use civic_core::entities::Issue;
use civic_core::enums::StatusFilter;

/// A list query: optional free-text search ANDed with a status filter.
///
/// The search term matches case-insensitively anywhere in an issue's
/// description, location, or type. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
}

impl IssueQuery {
    /// A query that matches every issue.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// The lowercased search term, or `None` when no text filter applies.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a single issue satisfies both predicates.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        let needle = self.needle();
        Self::admits(needle.as_deref(), self.status, issue)
    }

    /// Issues satisfying the query, in collection order.
    #[must_use]
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        let needle = self.needle();
        issues
            .iter()
            .filter(|issue| Self::admits(needle.as_deref(), self.status, issue))
            .collect()
    }

    fn admits(needle: Option<&str>, status: StatusFilter, issue: &Issue) -> bool {
        needle.is_none_or(|needle| issue.mentions(needle)) && status.admits(issue.status)
    }
}

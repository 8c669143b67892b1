//! Issue cards: the default human-readable view of a list of issues.

use chrono::{DateTime, Local, Utc};
use civic_core::responses::IssueView;

use super::table::color_code;

/// What an empty list renders as.
pub const NO_ISSUES: &str = "No issues found";

/// Calendar date of `date` in the local time zone.
#[must_use]
pub fn local_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Render every issue as a card, separated by blank lines.
#[must_use]
pub fn render_cards(issues: &[IssueView], color: bool) -> String {
    if issues.is_empty() {
        return NO_ISSUES.to_string();
    }
    issues
        .iter()
        .map(|view| render_card(view, color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one issue card.
///
/// ```text
/// pothole  ·  In Progress  ·  high priority
/// Photo: https://...
/// Large pothole causing traffic issues
/// 📍 Main Street near City Park
/// Reported: 2026-02-07
/// ```
#[must_use]
pub fn render_card(view: &IssueView, color: bool) -> String {
    let issue = &view.issue;
    let priority = format!("{} priority", issue.priority);
    let header = [
        issue.issue_type.clone(),
        paint(&view.status_label, &view.status_label, color),
        paint(&priority, issue.priority.as_str(), color),
    ]
    .join("  ·  ");

    let mut lines = vec![header];
    if let Some(photo) = &issue.photo {
        lines.push(format!("Photo: {photo}"));
    }
    lines.push(issue.description.clone());
    lines.push(format!("📍 {}", issue.location));
    lines.push(format!("Reported: {}", local_date(issue.date)));
    lines.join("\n")
}

fn paint(text: &str, key: &str, color: bool) -> String {
    match color_code(key) {
        Some(code) if color => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
        _ => text.to_string(),
    }
}

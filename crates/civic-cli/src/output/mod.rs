use serde::Serialize;

use civic_core::responses::{IssueCreateResponse, IssueListResponse, IssueView, SeedResponse};

use crate::cli::OutputFormat;
use crate::ui;

pub mod card;
pub mod table;

/// A command response that knows how to present itself to a human.
pub trait Render: Serialize {
    /// Card layout, the default terminal view.
    fn cards(&self, color: bool) -> String;

    /// Header names and cell rows for table output.
    fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>);
}

/// Render a response to a string in the requested format.
pub fn render<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Card => Ok(value.cards(prefs.color)),
        OutputFormat::Table => {
            let (headers, rows) = value.table();
            if rows.is_empty() {
                return Ok(String::from(card::NO_ISSUES));
            }
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.color,
            };
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// Print a response in the requested format.
pub fn output<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

const ISSUE_HEADERS: [&str; 7] = [
    "id",
    "type",
    "status",
    "priority",
    "location",
    "reported",
    "description",
];

fn issue_row(view: &IssueView) -> Vec<String> {
    let issue = &view.issue;
    vec![
        issue.id.clone(),
        issue.issue_type.clone(),
        view.status_label.clone(),
        issue.priority.to_string(),
        issue.location.clone(),
        card::local_date(issue.date),
        issue.description.clone(),
    ]
}

impl Render for IssueListResponse {
    fn cards(&self, color: bool) -> String {
        card::render_cards(&self.issues, color)
    }

    fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        (
            ISSUE_HEADERS.to_vec(),
            self.issues.iter().map(issue_row).collect(),
        )
    }
}

impl Render for IssueCreateResponse {
    fn cards(&self, color: bool) -> String {
        card::render_card(&self.issue, color)
    }

    fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        (ISSUE_HEADERS.to_vec(), vec![issue_row(&self.issue)])
    }
}

impl Render for SeedResponse {
    fn cards(&self, _color: bool) -> String {
        if self.seeded {
            format!("Added sample issues ({} total)", self.total)
        } else {
            format!("Collection already has {} issues; nothing seeded", self.total)
        }
    }

    fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        (
            vec!["seeded", "total"],
            vec![vec![self.seeded.to_string(), self.total.to_string()]],
        )
    }
}

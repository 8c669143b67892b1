use clap::{Args, Subcommand};

/// Top-level command tree. Each command is one user event.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report a new issue.
    Report(ReportArgs),
    /// Browse issues, optionally searching and filtering by status.
    List(ListArgs),
    /// Populate an empty collection with sample issues.
    Seed,
    /// Print the JSON Schema of a stored or rendered type.
    Schema(SchemaArgs),
}

impl Commands {
    /// Whether handling this event must write the collection.
    #[must_use]
    pub const fn saves(&self) -> bool {
        matches!(self, Self::Report(_) | Self::Seed)
    }
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Issue type (pothole, streetlight, garbage, water, ...).
    #[arg(long = "type")]
    pub issue_type: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub location: String,
    /// low, medium or high.
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Photo file path or URL.
    #[arg(long)]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against description, location and type.
    #[arg(short, long)]
    pub search: Option<String>,
    /// all, pending, in-progress or resolved (defaults to `general.default_status`).
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// collection, issue, draft, list, report or seed.
    #[arg(default_value = "collection")]
    pub type_name: String,
}

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::{Commands, ListArgs, ReportArgs, SchemaArgs};

/// Top-level CLI parser for the `civic` binary.
#[derive(Debug, Parser)]
#[command(name = "civic", version, about = "Report and track civic issues")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: card, table, json, raw
    #[arg(short, long, global = true, default_value = "card")]
    pub format: OutputFormat,

    /// Colorize output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress notifications and non-error logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the issue store (overrides `storage.data_dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["civic", "--format", "json", "--verbose", "seed"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Seed));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["civic", "list", "--data-dir", "/tmp/x", "-f", "table"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/x"));
    }

    #[test]
    fn default_format_is_card() {
        let cli = Cli::try_parse_from(["civic", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Card);
    }

    #[test]
    fn report_parses_fields() {
        let cli = Cli::try_parse_from([
            "civic",
            "report",
            "--type",
            "pothole",
            "--description",
            "Deep hole",
            "--location",
            "Main St",
            "--priority",
            "high",
        ])
        .expect("cli should parse");

        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.issue_type, "pothole");
        assert_eq!(args.priority, "high");
        assert!(args.photo.is_none());
    }

    #[test]
    fn report_accepts_empty_strings() {
        let cli = Cli::try_parse_from([
            "civic",
            "report",
            "--type",
            "",
            "--description",
            "",
            "--location",
            "",
        ])
        .expect("cli should parse");

        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert!(args.description.is_empty());
        assert_eq!(args.priority, "medium");
    }

    #[test]
    fn list_parses_search_and_status() {
        let cli = Cli::try_parse_from(["civic", "list", "-s", "pothole", "--status", "resolved"])
            .expect("cli should parse");

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.search.as_deref(), Some("pothole"));
        assert_eq!(args.status.as_deref(), Some("resolved"));
    }

    #[test]
    fn schema_defaults_to_collection() {
        let cli = Cli::try_parse_from(["civic", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema command");
        };
        assert_eq!(args.type_name, "collection");
    }

    #[test]
    fn only_report_and_seed_save() {
        let saves = |args: &[&str]| {
            Cli::try_parse_from(args)
                .expect("cli should parse")
                .command
                .saves()
        };
        assert!(saves(&["civic", "report", "--type", "t", "--description", "d", "--location", "l"]));
        assert!(saves(&["civic", "seed"]));
        assert!(!saves(&["civic", "list", "--status", "pending"]));
        assert!(!saves(&["civic", "schema"]));
    }
}

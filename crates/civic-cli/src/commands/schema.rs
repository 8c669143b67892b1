use anyhow::bail;
use civic_core::entities::{Issue, IssueDraft};
use civic_core::responses::{IssueCreateResponse, IssueListResponse, SeedResponse};
use schemars::schema_for;

use crate::cli::{GlobalFlags, SchemaArgs};

/// Handle `civic schema`.
///
/// Always prints JSON regardless of `--format`.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        "collection" => schema_for!(Vec<Issue>),
        "issue" => schema_for!(Issue),
        "draft" => schema_for!(IssueDraft),
        "list" => schema_for!(IssueListResponse),
        "report" => schema_for!(IssueCreateResponse),
        "seed" => schema_for!(SeedResponse),
        other => bail!(
            "unknown schema type '{other}' (expected collection, issue, draft, list, report or seed)"
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

use anyhow::Context;
use civic_core::entities::IssueDraft;
use civic_core::enums::Priority;
use civic_core::responses::{IssueCreateResponse, REPORT_SUCCESS_MESSAGE};

use crate::cli::{GlobalFlags, ReportArgs};
use crate::commands::shared::photo::photo_reference;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `civic report`.
pub fn handle(args: &ReportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)?;
    if ctx.config.general.notify {
        ui::notify(REPORT_SUCCESS_MESSAGE);
    }
    Ok(())
}

fn run(args: &ReportArgs, ctx: &mut AppContext) -> anyhow::Result<IssueCreateResponse> {
    let priority: Priority = args.priority.parse()?;
    let draft = IssueDraft {
        issue_type: args.issue_type.clone(),
        description: args.description.clone(),
        location: args.location.clone(),
        priority,
        photo: args.photo.as_deref().map(photo_reference),
    };

    let issue = ctx
        .store
        .create(draft)
        .context("the issue was recorded for this session but could not be saved")?;
    tracing::info!(id = %issue.id, "issue reported");

    Ok(IssueCreateResponse::new(&issue))
}

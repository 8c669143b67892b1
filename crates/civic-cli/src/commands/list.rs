use civic_core::enums::StatusFilter;
use civic_core::responses::IssueListResponse;
use civic_store::IssueQuery;

use crate::cli::{GlobalFlags, ListArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `civic list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)
}

fn run(args: &ListArgs, ctx: &AppContext) -> anyhow::Result<IssueListResponse> {
    let status: StatusFilter = match &args.status {
        Some(raw) => raw.parse()?,
        None => ctx.config.general.status_filter()?,
    };

    let mut query = IssueQuery::all().with_status(status);
    if let Some(term) = &args.search {
        query = query.with_search(term.as_str());
    }

    let issues = ctx.store.query(&query);
    tracing::debug!(matched = issues.len(), total = ctx.store.len(), "listed issues");

    Ok(IssueListResponse::new(args.search.as_deref(), status, issues))
}

#[cfg(test)]
mod tests {
    use civic_core::enums::{IssueStatus, StatusFilter};
    use pretty_assertions::assert_eq;

    use super::run;
    use crate::cli::ListArgs;
    use crate::context::test_support::{memory_context, seeded_context};

    fn args(search: Option<&str>, status: Option<&str>) -> ListArgs {
        ListArgs {
            search: search.map(String::from),
            status: status.map(String::from),
        }
    }

    fn ids(response: &super::IssueListResponse) -> Vec<&str> {
        response
            .issues
            .iter()
            .map(|view| view.issue.id.as_str())
            .collect()
    }

    #[test]
    fn no_arguments_lists_everything() {
        let ctx = seeded_context();
        let response = run(&args(None, None), &ctx).unwrap();
        assert_eq!(ids(&response), vec!["1", "2", "3", "4"]);
        assert_eq!(response.status, StatusFilter::All);
        assert!(!response.no_results);
    }

    #[test]
    fn search_and_status_combine() {
        let ctx = seeded_context();
        let response = run(&args(Some("STREET"), Some("in-progress")), &ctx).unwrap();
        assert_eq!(ids(&response), vec!["1"]);
        assert_eq!(response.status, StatusFilter::Only(IssueStatus::InProgress));
    }

    #[test]
    fn configured_default_status_applies() {
        let mut ctx = seeded_context();
        ctx.config.general.default_status = "resolved".into();
        let response = run(&args(None, None), &ctx).unwrap();
        assert_eq!(ids(&response), vec!["3"]);
    }

    #[test]
    fn no_match_sets_no_results() {
        let ctx = seeded_context();
        let response = run(&args(Some("volcano"), None), &ctx).unwrap();
        assert!(response.no_results);
        assert_eq!(response.total, 0);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let ctx = memory_context();
        let response = run(&args(None, None), &ctx).unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn bad_status_is_an_error() {
        let ctx = seeded_context();
        let err = run(&args(None, Some("closed")), &ctx).unwrap_err();
        assert!(err.to_string().contains("status filter"));
    }
}

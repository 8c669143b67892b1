use civic_core::responses::SeedResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `civic seed`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let seeded = ctx.seed_on_startup()?;
    output(
        &SeedResponse {
            seeded,
            total: ctx.store.len(),
        },
        flags.format,
    )
}

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `naplog status`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tracker.refresh().await;
    output(&ctx.tracker.view(), flags.format)
}

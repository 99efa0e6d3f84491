use anyhow::{Context, bail};
use naplog_tracker::{SummaryFetch, messages};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `naplog summary`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = ctx.tracker.selected_date();
    match ctx.tracker.fetch_summary(date).await {
        SummaryFetch::Applied => {
            let summary = ctx
                .tracker
                .view()
                .summary
                .context("summary missing after a successful fetch")?;
            output(&summary, flags.format)
        }
        SummaryFetch::Failed => bail!("{} for {date}", messages::FETCH_SUMMARY_FAILED),
        SummaryFetch::Stale => bail!("summary for {date} was superseded"),
    }
}

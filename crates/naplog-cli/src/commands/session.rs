use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::commands::report;
use crate::context::AppContext;

/// Handle `naplog start`. Refused while a session is already open.
pub async fn handle_start(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tracker.check_active_session().await;
    if let Some(session) = ctx.tracker.snapshot().active_session {
        bail!("a sleep session is already active since {}", session.start_time);
    }
    let outcome = ctx.tracker.start_sleep().await;
    report(outcome, &ctx.tracker, flags)
}

/// Handle `naplog end`. Refused when no session is open.
pub async fn handle_end(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tracker.check_active_session().await;
    if !ctx.tracker.view().end_enabled {
        bail!("no active sleep session");
    }
    let outcome = ctx.tracker.end_sleep().await;
    report(outcome, &ctx.tracker, flags)
}

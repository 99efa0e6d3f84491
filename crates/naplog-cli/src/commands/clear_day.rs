use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearDayArgs;
use crate::commands::prompt::StdinConfirm;
use crate::commands::report;
use crate::context::AppContext;

/// Handle `naplog clear-day`.
pub async fn handle(args: &ClearDayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = if args.yes {
        ctx.tracker.clear_day_data(&true).await
    } else {
        ctx.tracker.clear_day_data(&StdinConfirm).await
    };
    ctx.tracker.check_active_session().await;
    report(outcome, &ctx.tracker, flags)
}

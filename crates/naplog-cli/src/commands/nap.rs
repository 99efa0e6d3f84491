use crate::cli::GlobalFlags;
use crate::cli::subcommands::NapCommands;
use crate::commands::prompt::StdinConfirm;
use crate::commands::report;
use crate::context::AppContext;

/// Handle `naplog nap`.
pub async fn handle(action: &NapCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tracker = &ctx.tracker;
    let outcome = match action {
        NapCommands::Add { start, end } => tracker.add_manual_nap(start, end).await,
        NapCommands::Delete { id, yes: true } => tracker.delete_nap(*id, &true).await,
        NapCommands::Delete { id, yes: false } => tracker.delete_nap(*id, &StdinConfirm).await,
        NapCommands::Update { id, start, end } => {
            tracker
                .update_nap(*id, start.as_deref(), end.as_deref())
                .await
        }
    };
    tracker.check_active_session().await;
    report(outcome, tracker, flags)
}

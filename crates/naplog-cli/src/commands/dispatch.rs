use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::status::handle(ctx, flags).await,
        Commands::Summary => commands::summary::handle(ctx, flags).await,
        Commands::Start => commands::session::handle_start(ctx, flags).await,
        Commands::End => commands::session::handle_end(ctx, flags).await,
        Commands::Nap { action } => commands::nap::handle(&action, ctx, flags).await,
        Commands::ClearDay(args) => commands::clear_day::handle(&args, ctx, flags).await,
        Commands::Watch(args) => commands::watch::handle(&args, ctx, flags).await,
    }
}

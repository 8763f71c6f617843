mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `hd user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List => list::run(ctx, flags).await,
        UserCommands::Get { id } => get::run(id, ctx, flags).await,
        UserCommands::Create(args) => create::run(args, ctx, flags).await,
        UserCommands::Register(args) => create::register(args, ctx, flags).await,
        UserCommands::Update(args) => update::run(args, ctx, flags).await,
        UserCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
    }
}

mod by_status;
mod close;
mod create;
mod delete;
mod get;
mod list;
mod reply;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::context::AppContext;

/// Handle `hd ticket <subcommand>`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::List {
            status,
            priority,
            subject,
        } => {
            list::run(
                status.as_deref(),
                priority.as_deref(),
                subject.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Get { id } => get::run(id, ctx, flags).await,
        TicketCommands::Create {
            title,
            description,
            subject,
            priority,
        } => {
            create::run(
                title,
                description,
                subject,
                priority.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Update {
            id,
            status,
            priority,
            title,
            description,
            subject,
        } => {
            let fields = update::Fields {
                status: status.as_deref(),
                priority: priority.as_deref(),
                title: title.as_deref(),
                description: description.as_deref(),
                subject: subject.as_deref(),
            };
            update::run(id, &fields, ctx, flags).await
        }
        TicketCommands::Close { id } => close::run(id, ctx, flags).await,
        TicketCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
        TicketCommands::Reply {
            id,
            message,
            attach,
        } => reply::run(id, message, attach, ctx, flags).await,
        TicketCommands::ByStatus { status } => by_status::run(status, ctx, flags).await,
    }
}

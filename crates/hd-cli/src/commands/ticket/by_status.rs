use hd_core::enums::TicketStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let status: TicketStatus = status.parse()?;

    let mut tickets = ctx.tickets.by_status(&viewer, status).await?;
    tickets.truncate(effective_limit(
        flags.limit,
        ctx.config.general.default_limit,
    ));

    output(&tickets, flags.format)
}

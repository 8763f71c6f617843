use hd_core::filter::TicketFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    priority: Option<&str>,
    subject: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let filter = TicketFilter::parse(status, priority, subject)?;

    let mut tickets = ctx.tickets.list(&viewer, &filter).await?;
    tickets.truncate(effective_limit(
        flags.limit,
        ctx.config.general.default_limit,
    ));

    output(&tickets, flags.format)
}

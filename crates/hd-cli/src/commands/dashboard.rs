use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hd dashboard`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let recent = usize::try_from(ctx.config.general.recent_tickets)?;
    let dashboard = ctx.tickets.dashboard(&viewer, recent).await?;
    if dashboard.stats_derived {
        tracing::info!("dashboard counters derived from the ticket list");
    }
    output(&dashboard, flags.format)
}

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let ticket = ctx.tickets.close(&viewer, id).await?;
    output(&ticket, flags.format)
}

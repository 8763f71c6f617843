use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let detail = ctx.tickets.detail(&viewer, id).await?;
    output(&detail, flags.format)
}

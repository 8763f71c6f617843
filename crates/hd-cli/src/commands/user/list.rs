use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let mut users = ctx.users.list(&viewer).await?;
    users.truncate(effective_limit(
        flags.limit,
        ctx.config.general.default_limit,
    ));
    output(&users, flags.format)
}

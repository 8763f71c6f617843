use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(
    id: &str,
    yes: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let confirmation = confirm(&format!("Delete ticket {id}?"), yes)?;
    ctx.tickets.delete(&viewer, id, confirmation).await?;
    output(&DeleteResponse { id, deleted: true }, flags.format)
}

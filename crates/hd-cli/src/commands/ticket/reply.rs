use std::path::PathBuf;

use hd_client::AttachmentUpload;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    message: &str,
    attach: &[PathBuf],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;

    let mut attachments = Vec::with_capacity(attach.len());
    for path in attach {
        attachments.push(AttachmentUpload::from_path(path).await?);
    }

    let reply = ctx.tickets.reply(&viewer, id, message, attachments).await?;
    output(&reply, flags.format)
}

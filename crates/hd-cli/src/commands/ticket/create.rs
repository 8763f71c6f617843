use hd_core::enums::TicketPriority;
use hd_core::forms::TicketDraft;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: &str,
    subject: &str,
    priority: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let priority = parse_optional::<TicketPriority>(priority)?.unwrap_or_default();
    let draft = TicketDraft::new(title, description, subject).with_priority(priority);

    let ticket = ctx.tickets.create(&viewer, &draft).await?;
    output(&ticket, flags.format)
}

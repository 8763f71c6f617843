use hd_core::enums::{TicketPriority, TicketStatus};
use hd_core::updates::{TicketUpdate, TicketUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

/// Raw `--flag` values of `hd ticket update`.
#[derive(Debug, Default)]
pub struct Fields<'a> {
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub subject: Option<&'a str>,
}

pub async fn run(
    id: &str,
    fields: &Fields<'_>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let update = ticket_update(fields)?;
    let ticket = ctx.tickets.update(&viewer, id, &update).await?;
    output(&ticket, flags.format)
}

fn ticket_update(fields: &Fields<'_>) -> anyhow::Result<TicketUpdate> {
    let mut builder = TicketUpdateBuilder::new();
    if let Some(status) = parse_optional::<TicketStatus>(fields.status)? {
        builder = builder.status(status);
    }
    if let Some(priority) = parse_optional::<TicketPriority>(fields.priority)? {
        builder = builder.priority(priority);
    }
    if let Some(title) = fields.title {
        builder = builder.title(title);
    }
    if let Some(description) = fields.description {
        builder = builder.description(description);
    }
    if let Some(subject) = fields.subject {
        builder = builder.subject(subject);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_map_onto_wire_fields() {
        let update = ticket_update(&Fields {
            status: Some("em-atendimento"),
            title: Some("Printer down"),
            ..Fields::default()
        })
        .expect("update");
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "status": "em_atendimento", "titulo": "Printer down" })
        );
    }

    #[test]
    fn unknown_priority_is_rejected_locally() {
        assert!(
            ticket_update(&Fields {
                priority: Some("urgent"),
                ..Fields::default()
            })
            .is_err()
        );
    }
}

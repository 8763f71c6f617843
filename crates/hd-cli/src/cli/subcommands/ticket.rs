use std::path::PathBuf;

use clap::Subcommand;

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// List visible tickets.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        subject: Option<String>,
    },
    /// Show a ticket with its reply thread.
    Get { id: String },
    /// Open a ticket.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        subject: String,
        /// baixa, media or alta (default baixa)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Edit a ticket (admin).
    Update {
        id: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        subject: Option<String>,
    },
    /// Close a ticket (admin).
    Close { id: String },
    /// Delete a ticket (admin).
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Reply to a ticket.
    Reply {
        id: String,
        #[arg(long)]
        message: String,
        /// File to attach; repeat for several.
        #[arg(long)]
        attach: Vec<PathBuf>,
    },
    /// Tickets in one status, as listed by the backend.
    ByStatus { status: String },
}

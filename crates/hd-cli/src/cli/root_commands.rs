use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ProfileCommands, TicketCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// The logged-in user's own profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Tickets and their reply threads.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// User directory (admin) and self-registration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Ticket counters and the newest tickets (admin).
    Dashboard,
    /// Download the ticket report (admin).
    Report(ReportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Where to write the report. Defaults to `helpdesk-report-<date>` in the
    /// current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

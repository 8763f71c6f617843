use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hd` binary.
#[derive(Debug, Parser)]
#[command(name = "hd", version, about = "Help-desk tickets from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress notices and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, TicketCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "hd", "--format", "table", "--limit", "10", "--verbose", "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hd", "ticket", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hd", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_requires_credentials() {
        assert!(Cli::try_parse_from(["hd", "auth", "login", "--email", "a@b.c"]).is_err());
        let cli = Cli::try_parse_from([
            "hd", "auth", "login", "--email", "a@b.c", "--password", "secret",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "a@b.c");
    }

    #[test]
    fn ticket_list_filters_are_optional() {
        let cli = Cli::try_parse_from([
            "hd", "ticket", "list", "--status", "aberto", "--subject", "hardware",
        ])
        .expect("cli should parse");
        let Commands::Ticket {
            action:
                TicketCommands::List {
                    status,
                    priority,
                    subject,
                },
        } = cli.command
        else {
            panic!("expected ticket list");
        };
        assert_eq!(status.as_deref(), Some("aberto"));
        assert_eq!(priority, None);
        assert_eq!(subject.as_deref(), Some("hardware"));
    }

    #[test]
    fn reply_accepts_repeated_attachments() {
        let cli = Cli::try_parse_from([
            "hd", "ticket", "reply", "12", "--message", "done", "--attach", "a.png", "--attach",
            "b.pdf",
        ])
        .expect("cli should parse");
        let Commands::Ticket {
            action: TicketCommands::Reply { id, attach, .. },
        } = cli.command
        else {
            panic!("expected ticket reply");
        };
        assert_eq!(id, "12");
        assert_eq!(attach.len(), 2);
    }

    #[test]
    fn user_delete_takes_yes_flag() {
        let cli = Cli::try_parse_from(["hd", "user", "delete", "3", "--yes"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Delete { yes: true, .. }
            }
        ));
    }
}

use clap::{Args, Subcommand};

/// Own-profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the logged-in user.
    Show,
    /// Change fields of the logged-in user.
    Update(ProfileUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub role_title: Option<String>,
    /// Avatar image URL.
    #[arg(long)]
    pub avatar: Option<String>,
}

use clap::{Args, Subcommand};

/// User directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users (admin).
    List,
    /// Show one user (admin).
    Get { id: String },
    /// Create a user (admin).
    Create(NewUserArgs),
    /// Create your own account. No session needed.
    Register(AccountArgs),
    /// Edit a user (admin).
    Update(UserUpdateArgs),
    /// Delete a user (admin).
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct NewUserArgs {
    #[command(flatten)]
    pub account: AccountArgs,
    /// admin or user (default user)
    #[arg(long)]
    pub role: Option<String>,
}

/// Fields of a new account.
#[derive(Clone, Debug, Args)]
pub struct AccountArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Repeat the password; checked locally when given.
    #[arg(long)]
    pub password_confirmation: Option<String>,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub role_title: String,
}

#[derive(Clone, Debug, Args)]
pub struct UserUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub cpf: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub role_title: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
}

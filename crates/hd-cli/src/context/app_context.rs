use std::sync::Arc;

use anyhow::Context;
use hd_client::HelpdeskClient;
use hd_config::HelpdeskConfig;
use hd_core::permissions::Viewer;
use hd_session::{FileKeyValueStore, SessionStore};
use hd_store::{LogNotify, Notify, TicketStore, UserDirectory};

use crate::cli::GlobalFlags;
use crate::context::StderrNotify;

/// Shared application resources initialized once at startup.
///
/// The ticket cache lives only as long as the context; logging in or out
/// rebuilds the stores so no data crosses sessions.
pub struct AppContext {
    pub config: HelpdeskConfig,
    pub client: HelpdeskClient,
    pub session: SessionStore<FileKeyValueStore>,
    pub tickets: TicketStore<HelpdeskClient>,
    pub users: UserDirectory<HelpdeskClient>,
    notify: Arc<dyn Notify>,
}

impl AppContext {
    /// Restore the persisted session and bind a client to its token.
    pub fn init(config: HelpdeskConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let storage_dir = config.session.storage_dir().context(
            "cannot locate a home directory for session storage; set HELPDESK_SESSION__STORAGE_DIR",
        )?;
        let session = SessionStore::restore(FileKeyValueStore::new(storage_dir));

        let client = HelpdeskClient::new(&config.api)
            .context("failed to build HTTP client")?
            .with_token(session.token().map(str::to_string));
        tracing::debug!(
            base_url = client.base_url(),
            authenticated = session.is_authenticated(),
            "context ready"
        );

        // Quiet runs keep notices in the log only.
        let notify: Arc<dyn Notify> = if flags.quiet {
            Arc::new(LogNotify)
        } else {
            Arc::new(StderrNotify)
        };
        Ok(Self {
            tickets: TicketStore::new(client.clone(), Arc::clone(&notify)),
            users: UserDirectory::new(client.clone(), Arc::clone(&notify)),
            config,
            client,
            session,
            notify,
        })
    }

    /// The logged-in user as a [`Viewer`].
    pub fn viewer(&self) -> anyhow::Result<Viewer> {
        self.session
            .require_viewer()
            .context("not logged in; run 'hd auth login' first")
    }

    /// Re-bind the client to the session's current token and drop every
    /// cached ticket.
    pub fn reset_for_session(&mut self) {
        self.client
            .set_token(self.session.token().map(str::to_string));
        self.tickets = TicketStore::new(self.client.clone(), Arc::clone(&self.notify));
        self.users = UserDirectory::new(self.client.clone(), Arc::clone(&self.notify));
    }
}

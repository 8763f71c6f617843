//! In-memory backend for store tests.

#![allow(dead_code)]

use std::sync::Mutex;

use hd_client::{ClientError, ReplyUpload};
use hd_core::entities::{Reply, Ticket, TicketStats, User};
use hd_core::enums::{Role, TicketStatus};
use hd_core::forms::{NewTicketRequest, NewUser};
use hd_core::permissions::Viewer;
use hd_core::updates::{ProfileUpdate, TicketUpdate, UserUpdate};
use hd_store::api::{ApiResult, HelpdeskApi};

#[derive(Default)]
pub struct FakeApi {
    pub tickets: Mutex<Vec<Ticket>>,
    pub replies: Mutex<Vec<Reply>>,
    pub users: Mutex<Vec<User>>,
    pub calls: Mutex<Vec<String>>,
    /// Mutations return the stored entity when set.
    pub echo: bool,
    pub fail_stats: bool,
    pub fail_replies: bool,
}

impl FakeApi {
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
            echo: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn find(&self, id: &str) -> ApiResult<Ticket> {
        self.tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ClientError::Api {
                status: 404,
                message: format!("ticket {id} not found"),
            })
    }

    /// Simulate another admin editing the ticket.
    pub fn touch(&self, id: &str, updated_at: &str) {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets.iter_mut().find(|t| t.id == id).unwrap();
        ticket.updated_at = hd_core::wire_serde::parse_timestamp(updated_at);
    }
}

pub fn ticket(id: &str, owner: &str, status: &str) -> Ticket {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "titulo": format!("ticket {id}"),
        "descricao": "descricao",
        "status": status,
        "prioridade": "baixa",
        "categoria": "hardware",
        "usuarioId": owner,
        "dataCriacao": format!("2024-03-{:02}", id.parse::<u32>().unwrap_or(1)),
        "dataAtualizacao": "2024-03-01T00:00:00Z",
    }))
    .unwrap()
}

pub fn fixture() -> Vec<Ticket> {
    vec![
        ticket("1", "42", "aberto"),
        ticket("2", "7", "em_atendimento"),
        ticket("3", "42", "encerrado"),
        ticket("4", "7", "aberto"),
    ]
}

pub fn user_viewer() -> Viewer {
    Viewer::new("42", "Bia", Role::User)
}

pub fn other_viewer() -> Viewer {
    Viewer::new("7", "Caio", Role::User)
}

pub fn admin_viewer() -> Viewer {
    Viewer::new("1", "Ana", Role::Admin)
}

fn not_found(what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

impl HelpdeskApi for FakeApi {
    async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        self.record("GET /api/called");
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn get_ticket(&self, id: &str) -> ApiResult<Ticket> {
        self.record(format!("GET /api/called/{id}"));
        self.find(id)
    }

    async fn create_ticket(&self, request: &NewTicketRequest) -> ApiResult<Option<Ticket>> {
        self.record("POST /api/called/create");
        let mut tickets = self.tickets.lock().unwrap();
        let mut body = serde_json::to_value(request).unwrap();
        body["id"] = serde_json::json!(100 + tickets.len());
        let stored: Ticket = serde_json::from_value(body).unwrap();
        tickets.push(stored.clone());
        Ok(self.echo.then_some(stored))
    }

    async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> ApiResult<Option<Ticket>> {
        self.record(format!("PUT /api/called/{id}"));
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets.iter_mut().find(|t| t.id == id).ok_or_else(|| not_found(id))?;
        if let Some(status) = update.status {
            ticket.status = status;
        }
        if let Some(priority) = update.priority {
            ticket.priority = priority;
        }
        if let Some(title) = &update.title {
            ticket.title.clone_from(title);
        }
        if let Some(description) = &update.description {
            ticket.description.clone_from(description);
        }
        if let Some(subject) = &update.subject {
            ticket.subject.clone_from(subject);
        }
        ticket.updated_at = hd_core::wire_serde::parse_timestamp("2024-04-01T12:00:00Z");
        Ok(self.echo.then(|| ticket.clone()))
    }

    async fn close_ticket(&self, id: &str) -> ApiResult<()> {
        self.record(format!("POST /api/called/{id}/close"));
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets.iter_mut().find(|t| t.id == id).ok_or_else(|| not_found(id))?;
        ticket.status = TicketStatus::Closed;
        Ok(())
    }

    async fn delete_ticket(&self, id: &str) -> ApiResult<()> {
        self.record(format!("DELETE /api/called/{id}"));
        let mut tickets = self.tickets.lock().unwrap();
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        if tickets.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn ticket_stats(&self) -> ApiResult<TicketStats> {
        self.record("GET /api/called/stats");
        if self.fail_stats {
            return Err(ClientError::Api {
                status: 500,
                message: "stats unavailable".into(),
            });
        }
        Ok(TicketStats {
            open: 99,
            ..TicketStats::default()
        })
    }

    async fn tickets_by_status(&self, status: TicketStatus) -> ApiResult<Vec<Ticket>> {
        self.record(format!("GET /api/{status}"));
        Ok(self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect())
    }

    async fn list_replies(&self, ticket_id: &str) -> ApiResult<Vec<Reply>> {
        self.record(format!("GET /api/called/{ticket_id}/responses"));
        if self.fail_replies {
            return Err(ClientError::Api {
                status: 500,
                message: "boom".into(),
            });
        }
        Ok(self
            .replies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.ticket_id.as_deref() == Some(ticket_id))
            .cloned()
            .collect())
    }

    async fn post_reply(&self, upload: ReplyUpload) -> ApiResult<Option<Reply>> {
        self.record("POST /api/called/response");
        // Acknowledges without echoing, like the real backend's `{message}`.
        let _ = upload;
        Ok(None)
    }

    async fn download_report(&self) -> ApiResult<Vec<u8>> {
        self.record("GET /api/report");
        Ok(b"report".to_vec())
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record("GET /api/users");
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: &str) -> ApiResult<User> {
        self.record(format!("GET /api/users/{id}"));
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<Option<User>> {
        self.record("POST /api/users");
        let mut users = self.users.lock().unwrap();
        let mut body = serde_json::to_value(user).unwrap();
        body["id"] = serde_json::json!(users.len() + 1);
        let stored: User = serde_json::from_value(body).unwrap();
        users.push(stored.clone());
        Ok(self.echo.then_some(stored))
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResult<Option<User>> {
        self.record(format!("PUT /api/users/{id}"));
        let _ = update;
        Ok(None)
    }

    async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> ApiResult<Option<User>> {
        self.record(format!("PUT /api/users/{id}"));
        let _ = update;
        Ok(None)
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.record(format!("DELETE /api/users/{id}"));
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

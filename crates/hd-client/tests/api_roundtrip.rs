//! HTTP-level tests against a mock backend.

use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

use hd_client::{AttachmentUpload, ClientError, HelpdeskClient, ReplyUpload};
use hd_config::ApiConfig;
use hd_core::enums::{TicketPriority, TicketStatus};
use hd_core::forms::TicketDraft;
use hd_core::updates::TicketUpdateBuilder;

fn client_for(server: &mockito::ServerGuard) -> HelpdeskClient {
    HelpdeskClient::new(&ApiConfig {
        base_url: server.url(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn login_posts_credentials_and_reads_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"email": "bia@example.com", "password": "segredo"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"id": 42, "name": "Bia", "tipo": "user"}, "token": "tok-42"}"#)
        .create_async()
        .await;

    let login = client_for(&server)
        .login("bia@example.com", "segredo")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(login.token, "tok-42");
    assert_eq!(login.user.id, "42");
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/login")
        .with_status(401)
        .with_body(r#"{"message": "credenciais invalidas"}"#)
        .create_async()
        .await;

    let err = client_for(&server).login("x@y.z", "nope").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn list_sends_bearer_token_and_unwraps_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/called")
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data": [
                {"id": 1, "titulo": "Sem rede", "status": "aberto", "usuarioId": 42},
                {"id": 2, "titulo": "Toner", "status": "encerrado", "usuarioId": 7}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).with_token(Some("tok-1".into()));
    let tickets = client.list_tickets().await.unwrap();

    mock.assert_async().await;
    let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(tickets[1].status, TicketStatus::Closed);
}

#[tokio::test]
async fn create_sends_form_spellings() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/called/create")
        .match_body(Matcher::PartialJson(json!({
            "titulo": "Printer down",
            "prioridade": "alto",
            "assunto": "hardware",
            "status": "ABERTO",
            "user_id": "42"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": 101, "titulo": "Printer down", "status": "ABERTO",
                "prioridade": "alto", "assunto": "hardware", "user_id": 42}"#,
        )
        .create_async()
        .await;

    let draft =
        TicketDraft::new("Printer down", "Nothing prints", "hardware").with_priority(TicketPriority::High);
    let today = chrono::Utc::now().date_naive();
    let echo = client_for(&server)
        .create_ticket(&draft.to_request("42", today))
        .await
        .unwrap()
        .expect("echo");

    mock.assert_async().await;
    assert_eq!(echo.id, "101");
    assert_eq!(echo.owner_id, "42");
    assert_eq!(echo.priority, TicketPriority::High);
}

#[tokio::test]
async fn update_uses_put_with_changed_fields_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/called/5")
        .match_body(Matcher::Json(json!({"status": "em_atendimento"})))
        .with_status(200)
        .with_body(r#"{"message": "atualizado"}"#)
        .create_async()
        .await;

    let update = TicketUpdateBuilder::new().status(TicketStatus::InProgress).build();
    let echo = client_for(&server).update_ticket("5", &update).await.unwrap();

    mock.assert_async().await;
    assert!(echo.is_none());
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/api/called/9")
        .with_status(404)
        .with_body(r#"{"error": "chamado nao encontrado"}"#)
        .create_async()
        .await;

    let err = client_for(&server).delete_ticket("9").await.unwrap_err();
    assert_eq!(err.to_string(), "API error (404): chamado nao encontrado");
}

#[tokio::test]
async fn reply_is_multipart() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("print.png");
    std::fs::write(&path, b"fake png").unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/called/response")
        .match_header("content-type", Matcher::Regex("multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="chamado_id""#.into()),
            Matcher::Regex(r#"name="mensagem""#.into()),
            Matcher::Regex(r#"name="anexos\[\]"; filename="print.png""#.into()),
            Matcher::Regex("Segue o print".into()),
        ]))
        .with_status(201)
        .with_body(r#"{"message": "Resposta enviada"}"#)
        .create_async()
        .await;

    let upload = ReplyUpload {
        ticket_id: "5".into(),
        message: "Segue o print".into(),
        attachments: vec![AttachmentUpload::from_path(&path).await.unwrap()],
    };
    let echo = client_for(&server).post_reply(upload).await.unwrap();

    mock.assert_async().await;
    assert!(echo.is_none(), "acknowledgement is not a reply");
}

#[tokio::test]
async fn by_status_hits_status_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/em_atendimento")
        .with_status(200)
        .with_body(r#"[{"id": 3, "status": "em_atendimento"}]"#)
        .create_async()
        .await;

    let tickets = client_for(&server)
        .tickets_by_status(TicketStatus::InProgress)
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(tickets.len(), 1);
}

#[tokio::test]
async fn report_returns_raw_bytes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/report")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.4 fake")
        .create_async()
        .await;

    let bytes = client_for(&server).download_report().await.unwrap();
    assert_eq!(bytes, b"%PDF-1.4 fake");
}

#[tokio::test]
async fn get_ticket_reports_why_decoding_failed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/called/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"titulo": "Sem id", "status": "aberto"}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_ticket("7").await.unwrap_err();
    let ClientError::Parse(message) = err else {
        panic!("unexpected error: {err:?}");
    };
    assert!(message.starts_with("ticket 7: "), "{message}");
    assert!(message.contains("missing field `id`"), "{message}");
}

#[tokio::test]
async fn list_survives_unknown_status_values() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/called")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": 1, "status": "aberto"}, {"id": 2, "status": "pendente", "prioridade": ""}]"#,
        )
        .create_async()
        .await;

    let tickets = client_for(&server).list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[1].status, TicketStatus::Open);
    assert_eq!(tickets[1].priority, TicketPriority::Low);
}

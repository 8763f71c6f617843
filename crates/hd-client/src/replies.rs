//! Reply thread endpoints.

use std::path::Path;

use hd_core::entities::Reply;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::{
    ClientError, HelpdeskClient,
    http::{read_echo, read_list},
    segment,
};

/// A file to attach to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AttachmentUpload {
    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// [`ClientError::Io`] when the file cannot be read.
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "anexo".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }
}

/// Multipart body of `POST /api/called/response`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyUpload {
    pub ticket_id: String,
    pub message: String,
    pub attachments: Vec<AttachmentUpload>,
}

impl ReplyUpload {
    fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("chamado_id", self.ticket_id)
            .text("mensagem", self.message);
        for attachment in self.attachments {
            let part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
            form = form.part("anexos[]", part);
        }
        form
    }
}

impl HelpdeskClient {
    /// `GET /api/called/{id}/responses`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn list_replies(&self, ticket_id: &str) -> Result<Vec<Reply>, ClientError> {
        let path = format!("called/{}/responses", segment(ticket_id));
        let resp = self.send(self.request(Method::GET, &path)).await?;
        read_list(resp).await
    }

    /// `POST /api/called/response` as multipart form data. Returns the stored
    /// reply when the backend echoes one.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn post_reply(&self, upload: ReplyUpload) -> Result<Option<Reply>, ClientError> {
        let attachments = upload.attachments.len();
        tracing::debug!(ticket_id = %upload.ticket_id, attachments, "posting reply");
        let resp = self
            .send(
                self.request(Method::POST, "called/response")
                    .multipart(upload.into_form()),
            )
            .await?;
        let echo: Option<Reply> = read_echo(resp).await?;
        // `{"message": "..."}` acknowledgements decode as an empty reply.
        Ok(echo.filter(|reply| !reply.message.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn attachment_reads_file_name_and_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("print.png");
        std::fs::write(&path, b"png").unwrap();

        let upload = AttachmentUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.file_name, "print.png");
        assert_eq!(upload.bytes, b"png");
    }

    #[tokio::test]
    async fn missing_attachment_is_io_error() {
        let err = AttachmentUpload::from_path(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}

//! Report download.

use reqwest::Method;

use crate::{ClientError, HelpdeskClient};

impl HelpdeskClient {
    /// `GET /api/report`: raw report bytes (typically a spreadsheet or PDF).
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn download_report(&self) -> Result<Vec<u8>, ClientError> {
        let resp = self.send(self.request(Method::GET, "report")).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

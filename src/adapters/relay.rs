use crate::domain::contact::ContactSubmission;
use crate::domain::ports::FormRelay;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xbdokdzn";

/// Posts contact submissions as JSON to a third-party form relay.
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    client: Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SiteError::RelayRejected {
                status: status.as_u16(),
            })
        }
    }
}

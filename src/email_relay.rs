use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Serialize;

use crate::domain::ContactDraft;

/// Client for the hosted transactional-email relay that actually delivers the
/// contact message. The relay multiplexes many tenants, so every request
/// carries a service id, a template id, and the tenant's public key, all of
/// which are injected from configuration at startup.
///
/// Establishing a HTTP connection is expensive; the `Client` is built once
/// here, stored at the top level (App), and cloned into workers.
pub struct RelayClient {
    http_client: Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: Secret<String>,
}

/// Failures the relay call can produce. Both are recoverable: the caller
/// reports them once and keeps the draft so the user may retry manually.
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// The request never completed (connect error, timeout, ...).
    #[error("failed to reach the email relay")]
    Transport(#[source] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("the email relay rejected the send request")]
    Rejected(#[source] reqwest::Error),
}

impl RelayClient {
    pub fn new(
        base_url: String,
        service_id: String,
        template_id: String,
        public_key: Secret<String>,
        timeout: Duration,
    ) -> Self {
        // no timeout is enforced by the caller; this is the only one
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            service_id,
            template_id,
            public_key,
        }
    }

    /// Issue exactly one send request carrying the three draft fields plus the
    /// fixed service/template/credential identifiers. Resolves exactly once;
    /// no retry at this layer.
    pub async fn send_message(
        &self,
        draft: &ContactDraft,
    ) -> Result<(), RelayError> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        let body = SendMessageRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: TemplateParams {
                name: &draft.name,
                email: &draft.email,
                message: &draft.message,
            },
        };
        self.http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(RelayError::Transport)?
            .error_for_status()
            .map_err(RelayError::Rejected)?;
        Ok(())
    }
}

/// Wire format of the relay's send endpoint.
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

//! Webhook operations.

use viva_proto::{WebhookEvent, WebhookVerification};

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

/// Webhook operations for the authenticated merchant.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a VivaClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// Fetches the verification key the provider expects echoed back when
    /// it probes a webhook URL.
    ///
    /// `GET /api/messages/config/token` with merchant basic auth; the
    /// legacy family answers in PascalCase.
    ///
    /// # Errors
    ///
    /// Returns any transport/API/decode failure.
    pub async fn verification_code(&self) -> Result<WebhookVerification, VivaError> {
        let url = self.client.api_endpoint("/api/messages/config/token")?;
        let request = self.client.get(url, Auth::MerchantBasic)?;
        self.client.send_json(request).await
    }

    /// Parses an incoming webhook delivery body into its typed envelope.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::Decode`] when the body is not a valid envelope.
    pub fn parse(&self, body: &str) -> Result<WebhookEvent, VivaError> {
        WebhookEvent::from_json(body).map_err(VivaError::from)
    }
}

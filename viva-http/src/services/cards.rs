//! Card token operations.

use serde::Serialize;
use viva_proto::CardToken;

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardToken<'a> {
    transaction_id: &'a str,
}

/// Card token operations for the authenticated merchant.
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    client: &'a VivaClient,
}

impl<'a> Cards<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// Creates a card token from a completed transaction, for
    /// merchant-initiated recurring charges.
    ///
    /// `POST /acquiring/v1/cards/tokens` with bearer auth.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::InvalidArgument`] when `transaction_id` is
    /// empty, otherwise any transport/API/decode failure.
    pub async fn create_token(&self, transaction_id: &str) -> Result<CardToken, VivaError> {
        if transaction_id.is_empty() {
            return Err(VivaError::InvalidArgument("transaction_id"));
        }

        let url = self.client.api_endpoint("/acquiring/v1/cards/tokens")?;
        let request = self
            .client
            .post(url, Auth::Bearer)?
            .json(&CreateCardToken { transaction_id });
        self.client.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::testutil;

    #[tokio::test]
    async fn create_token_posts_the_transaction_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/acquiring/v1/cards/tokens"))
            .and(header("authorization", "Bearer test"))
            .and(body_partial_json(json!({
                "transactionId": "6cffe5bf-909c-4d69-b6dc-2bef1a6202f7",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "A7C478391995DBCFB09D6FA59C58E0A0425FE1B1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = testutil::client(&server);
        let card = client
            .cards()
            .create_token("6cffe5bf-909c-4d69-b6dc-2bef1a6202f7")
            .await
            .unwrap();

        assert_eq!(card.token, "A7C478391995DBCFB09D6FA59C58E0A0425FE1B1");
    }

    #[tokio::test]
    async fn create_token_rejects_empty_transaction_id() {
        let server = MockServer::start().await;
        let client = testutil::client(&server);

        let result = client.cards().create_token("").await;
        assert!(matches!(
            result,
            Err(VivaError::InvalidArgument("transaction_id"))
        ));
    }
}

//! OAuth token operations.

use viva_proto::AccessToken;

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

/// OAuth token operations against the accounts endpoint.
///
/// The SDK does not cache or refresh tokens; callers hold the returned
/// [`AccessToken`] and pass it to [`VivaClient::with_token`].
#[derive(Debug, Clone, Copy)]
pub struct Oauth<'a> {
    client: &'a VivaClient,
}

impl<'a> Oauth<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// Requests a bearer token with the client credentials grant.
    ///
    /// `POST {accounts}/connect/token` with client basic auth and a
    /// `grant_type=client_credentials` form body.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::MissingCredentials`] when no client pair is
    /// configured, otherwise any transport/API/decode failure.
    pub async fn request_token(&self) -> Result<AccessToken, VivaError> {
        let url = self.client.accounts_endpoint("/connect/token")?;
        let request = self
            .client
            .post(url, Auth::ClientBasic)?
            .form(&[("grant_type", "client_credentials")]);
        self.client.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::services::testutil;

    #[tokio::test]
    async fn request_token_uses_client_basic_auth_and_form_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .and(header(
                "authorization",
                "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=",
            ))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "eyJhbGciOiJSUzI1NiIs",
                "token_type": "Bearer",
                "expires_in": 3600,
                "scope": "urn:viva:payments:core:api:redirectcheckout",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = testutil::client(&server);
        let token = client.oauth().request_token().await.unwrap();

        assert_eq!(token.access_token, "eyJhbGciOiJSUzI1NiIs");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(
            token.scope.as_deref(),
            Some("urn:viva:payments:core:api:redirectcheckout")
        );
    }
}

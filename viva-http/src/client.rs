//! The [`VivaClient`] and its request pipeline.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::VivaError;
use crate::services::{Cards, Isv, Oauth, Orders, Transactions, Webhooks};

/// Which credentials a request is authenticated with.
///
/// The provider splits authentication per endpoint family: checkout v2 uses
/// bearer tokens, legacy `/api/...` endpoints use merchant basic auth, and
/// the OAuth token endpoint uses client basic auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// `Authorization: Bearer <token>`.
    Bearer,
    /// HTTP basic auth with the merchant id/API key pair.
    MerchantBasic,
    /// HTTP basic auth with the OAuth client id/secret pair.
    ClientBasic,
}

/// Async client for the Viva payments REST API.
///
/// Holds the environment's base URLs and the configured credentials, both
/// set once at construction and read-only thereafter. Cloning is cheap and
/// clones share the underlying connection pool, so multiple clients may be
/// used concurrently without coordination.
#[derive(Clone)]
pub struct VivaClient {
    http: reqwest::Client,
    credentials: Credentials,
    token: Option<String>,
    api_url: Url,
    accounts_url: Url,
    web_url: Url,
}

impl VivaClient {
    /// Creates a client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be constructed.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let http = config.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("failed to build reqwest::Client")
        });

        let environment = config.environment;
        let parse = |fixed: &str| Url::parse(fixed).expect("valid environment URL");

        Self {
            http,
            credentials: config.credentials,
            token: None,
            api_url: config.api_url.unwrap_or_else(|| parse(environment.api_url())),
            accounts_url: config
                .accounts_url
                .unwrap_or_else(|| parse(environment.accounts_url())),
            web_url: parse(environment.web_url()),
        }
    }

    /// Returns this client configured to send the given bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Smart checkout order operations.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    /// Transaction operations.
    #[must_use]
    pub const fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Card token operations.
    #[must_use]
    pub const fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    /// Webhook operations.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// OAuth token operations.
    #[must_use]
    pub const fn oauth(&self) -> Oauth<'_> {
        Oauth::new(self)
    }

    /// ISV (independent software vendor) operations.
    #[must_use]
    pub const fn isv(&self) -> Isv<'_> {
        Isv::new(self)
    }

    /// Base URL of the customer-facing wallet site.
    #[must_use]
    pub const fn web_url(&self) -> &Url {
        &self.web_url
    }

    pub(crate) fn api_endpoint(&self, path: &str) -> Result<Url, VivaError> {
        self.api_url
            .join(path)
            .map_err(|_| VivaError::InvalidArgument("endpoint path"))
    }

    pub(crate) fn accounts_endpoint(&self, path: &str) -> Result<Url, VivaError> {
        self.accounts_url
            .join(path)
            .map_err(|_| VivaError::InvalidArgument("endpoint path"))
    }

    pub(crate) fn get(&self, url: Url, auth: Auth) -> Result<RequestBuilder, VivaError> {
        self.authorize(self.http.get(url), auth)
    }

    pub(crate) fn post(&self, url: Url, auth: Auth) -> Result<RequestBuilder, VivaError> {
        self.authorize(self.http.post(url), auth)
    }

    /// The merchant id, required as a query parameter by ISV endpoints.
    pub(crate) fn merchant_id(&self) -> Result<&str, VivaError> {
        self.credentials
            .merchant_id()
            .ok_or(VivaError::MissingCredentials("merchant id"))
    }

    /// Applies the credentials for `auth` to a request.
    fn authorize(&self, builder: RequestBuilder, auth: Auth) -> Result<RequestBuilder, VivaError> {
        match auth {
            Auth::Bearer => {
                let token = self
                    .token
                    .as_deref()
                    .ok_or(VivaError::MissingCredentials("bearer token"))?;
                Ok(builder.bearer_auth(token))
            }
            Auth::MerchantBasic => {
                let (id, key) = self
                    .credentials
                    .merchant_pair()
                    .ok_or(VivaError::MissingCredentials("merchant id/API key pair"))?;
                Ok(builder.basic_auth(id, Some(key)))
            }
            Auth::ClientBasic => {
                let (id, secret) = self
                    .credentials
                    .client_pair()
                    .ok_or(VivaError::MissingCredentials("client id/secret pair"))?;
                Ok(builder.basic_auth(id, Some(secret)))
            }
        }
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// One attempt, no retries. Non-2xx responses become
    /// [`VivaError::Api`] carrying the raw body; bodies that fail to parse
    /// become [`VivaError::Decode`].
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, VivaError> {
        let request = builder.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "viva.request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, "viva.response");

        if !status.is_success() {
            tracing::warn!(status = %status, body = %body, "viva.api_error");
            return Err(VivaError::Api { status, body });
        }

        serde_json::from_str(&body).map_err(VivaError::from)
    }
}

impl std::fmt::Debug for VivaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VivaClient")
            .field("credentials", &self.credentials)
            .field("has_token", &self.token.is_some())
            .field("api_url", &self.api_url)
            .field("accounts_url", &self.accounts_url)
            .field("web_url", &self.web_url)
            .finish_non_exhaustive()
    }
}

//! Environments, credentials, and client configuration.

use std::time::Duration;

use url::Url;

/// Provider environment, selecting the base URLs for all endpoint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// The live environment.
    Production,
    /// The demo/sandbox environment.
    #[default]
    Demo,
}

impl Environment {
    /// Base URL for the REST API (`/checkout/v2/...`, `/api/...`,
    /// `/acquiring/v1/...`).
    #[must_use]
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.vivapayments.com",
            Self::Demo => "https://demo-api.vivapayments.com",
        }
    }

    /// Base URL for the OAuth token endpoint.
    #[must_use]
    pub const fn accounts_url(self) -> &'static str {
        match self {
            Self::Production => "https://accounts.vivapayments.com",
            Self::Demo => "https://demo-accounts.vivapayments.com",
        }
    }

    /// Base URL for the customer-facing wallet site (smart checkout
    /// redirects).
    #[must_use]
    pub const fn web_url(self) -> &'static str {
        match self {
            Self::Production => "https://www.vivapayments.com",
            Self::Demo => "https://demo.vivapayments.com",
        }
    }
}

/// Credentials for the provider's two authentication styles.
///
/// Checkout v2 endpoints take a bearer token obtained with the OAuth client
/// pair; legacy `/api/...` endpoints take HTTP basic auth with the merchant
/// id/API key pair. Either pair may be left unset when the corresponding
/// endpoint family is not used.
#[derive(Clone, Default)]
pub struct Credentials {
    client_id: Option<String>,
    client_secret: Option<String>,
    merchant_id: Option<String>,
    api_key: Option<String>,
}

impl Credentials {
    /// Creates an empty credential set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client id/secret pair.
    #[must_use]
    pub fn with_client(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self.client_secret = Some(secret.into());
        self
    }

    /// Sets the merchant id/API key pair.
    #[must_use]
    pub fn with_merchant(mut self, id: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.merchant_id = Some(id.into());
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the OAuth client pair, when both halves are set.
    #[must_use]
    pub fn client_pair(&self) -> Option<(&str, &str)> {
        Some((self.client_id.as_deref()?, self.client_secret.as_deref()?))
    }

    /// Returns the merchant pair, when both halves are set.
    #[must_use]
    pub fn merchant_pair(&self) -> Option<(&str, &str)> {
        Some((self.merchant_id.as_deref()?, self.api_key.as_deref()?))
    }

    /// Returns the merchant id, when set.
    #[must_use]
    pub fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("has_client_secret", &self.client_secret.is_some())
            .field("merchant_id", &self.merchant_id)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Configuration for [`crate::VivaClient`].
pub struct ClientConfig {
    /// Provider environment.
    pub environment: Environment,

    /// Authentication credentials.
    pub credentials: Credentials,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,

    /// Override for the API base URL (e.g., a mock server in tests).
    pub api_url: Option<Url>,

    /// Override for the accounts (OAuth) base URL.
    pub accounts_url: Option<Url>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Demo,
            credentials: Credentials::default(),
            timeout: Duration::from_secs(30),
            http_client: None,
            api_url: None,
            accounts_url: None,
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given environment.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Sets the credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: Url) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Overrides the accounts (OAuth) base URL.
    #[must_use]
    pub fn with_accounts_url(mut self, url: Url) -> Self {
        self.accounts_url = Some(url);
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .field("api_url", &self.api_url)
            .field("accounts_url", &self.accounts_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environments_resolve_distinct_base_urls() {
        assert_eq!(
            Environment::Production.api_url(),
            "https://api.vivapayments.com"
        );
        assert_eq!(
            Environment::Demo.api_url(),
            "https://demo-api.vivapayments.com"
        );
        assert_ne!(
            Environment::Production.accounts_url(),
            Environment::Demo.accounts_url()
        );
    }

    #[test]
    fn credentials_pairs_require_both_halves() {
        let credentials = Credentials::new().with_client("id", "secret");
        assert_eq!(credentials.client_pair(), Some(("id", "secret")));
        assert_eq!(credentials.merchant_pair(), None);
        assert_eq!(credentials.merchant_id(), None);
    }

    #[test]
    fn credentials_debug_redacts_secrets() {
        let credentials = Credentials::new()
            .with_client("id", "very-secret")
            .with_merchant("merchant", "key");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("\"key\""));
    }
}

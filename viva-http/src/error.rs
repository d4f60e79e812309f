//! The domain error surfaced by every client operation.

use reqwest::StatusCode;
use viva_proto::ErrorBody;

/// Errors surfaced by [`crate::VivaClient`] operations.
///
/// Every failure mode — transport, HTTP error status, or response decoding —
/// maps onto one variant so callers can match on a single type. Nothing is
/// retried or recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum VivaError {
    /// Network-level failure (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider returned a non-2xx status. `body` is the raw provider
    /// error payload; [`VivaError::error_body`] decodes it when possible.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required path or query parameter was empty.
    #[error("invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    /// The operation needs credentials that were never configured.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
}

impl VivaError {
    /// Returns the HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Attempts to decode the provider error payload of an API error.
    ///
    /// Returns `None` for non-API errors or when the body is not one of the
    /// provider's error shapes.
    #[must_use]
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            Self::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_decodes_legacy_shape() {
        let error = VivaError::Api {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"ErrorCode":400,"ErrorText":"Order not found"}"#.to_owned(),
        };

        let body = error.error_body().unwrap();
        assert_eq!(body.code, Some(400));
        assert_eq!(body.message.as_deref(), Some("Order not found"));
        assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn error_body_is_none_for_non_json_bodies() {
        let error = VivaError::Api {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>bad gateway</html>".to_owned(),
        };
        assert!(error.error_body().is_none());
    }

    #[test]
    fn non_api_errors_carry_no_status() {
        let error = VivaError::InvalidArgument("transaction_id");
        assert_eq!(error.status(), None);
        assert!(error.error_body().is_none());
    }
}

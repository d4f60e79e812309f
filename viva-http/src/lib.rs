#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async HTTP client for the Viva payments REST API.
//!
//! This crate provides [`VivaClient`], a thin typed wrapper over the
//! provider's REST endpoints. Related endpoints are grouped into service
//! façades ([`services::Orders`], [`services::Transactions`],
//! [`services::Cards`], [`services::Webhooks`], [`services::Oauth`], and
//! [`services::Isv`]), each borrowing the client and exposing one method per
//! operation. Wire types live in [`viva_proto`], re-exported as [`proto`].
//!
//! Every call is a single HTTP attempt: there is no retry, backoff, or
//! circuit breaking, and no caching of OAuth tokens. Failures surface as
//! [`VivaError`] with enough context (status code, raw provider body) to
//! distinguish transport, HTTP, and decode failures.
//!
//! # Example
//!
//! ```no_run
//! use viva_http::{ClientConfig, Credentials, Environment, VivaClient};
//! use viva_proto::CreatePaymentOrder;
//!
//! # async fn run() -> Result<(), viva_http::VivaError> {
//! let client = VivaClient::new(
//!     ClientConfig::new(Environment::Demo)
//!         .with_credentials(Credentials::new().with_client("client-id", "client-secret")),
//! );
//!
//! let token = client.oauth().request_token().await?;
//! let client = client.with_token(token.access_token);
//!
//! let order = client
//!     .orders()
//!     .create(&CreatePaymentOrder::new(1000).with_customer_trns("6 bottles of water"))
//!     .await?;
//! let checkout = client.orders().redirect_url(order.order_code);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] — The [`VivaClient`] and its request pipeline
//! - [`config`] — Environments, credentials, and client configuration
//! - [`error`] — The [`VivaError`] domain error
//! - [`services`] — Per-endpoint-family service façades

pub mod client;
pub mod config;
pub mod error;
pub mod services;

pub use client::VivaClient;
pub use config::{ClientConfig, Credentials, Environment};
pub use error::VivaError;

pub use viva_proto as proto;

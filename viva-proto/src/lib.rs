//! Wire format types for the Viva payments REST API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the provider: request bodies, response bodies, status/type codes, webhook
//! envelopes, and error payloads. It has minimal dependencies (only `serde`,
//! `serde_json`, and `rust_decimal`) and is intended to be the shared
//! "lingua franca" across the viva stack.
//!
//! The provider's JSON casing is inconsistent across API generations and is
//! reproduced exactly per endpoint family:
//!
//! - Checkout v2 (`/checkout/v2/...`) uses camelCase.
//! - Legacy API (`/api/...`) responses and webhook envelopes use PascalCase.
//! - Legacy API request bodies use camelCase.
//!
//! # Modules
//!
//! - [`codes`] — Status and type codes (`TransactionStatus`, `TransactionType`, …)
//! - [`requests`] — Request bodies (`CreatePaymentOrder`, `CreateRecurringTransaction`, …)
//! - [`responses`] — Response bodies (`Transaction`, `RecurringTransaction`, …)
//! - [`webhooks`] — Webhook envelope and event payloads

pub mod codes;
pub mod requests;
pub mod responses;
pub mod webhooks;

pub use codes::{TransactionStatus, TransactionType, WebhookEventType};
pub use requests::{CreatePaymentOrder, CreateRecurringTransaction, Customer};
pub use responses::{
    AccessToken, CardToken, ErrorBody, PaymentOrderCreated, RecurringTransaction, Transaction,
    WebhookVerification,
};
pub use webhooks::{TransactionEventData, WebhookEvent};

//! Webhook envelope and event payloads.
//!
//! The provider delivers webhooks as a PascalCase envelope whose `EventData`
//! member is shaped by the event type. The envelope keeps `EventData` as raw
//! JSON so unknown event types survive untouched; [`WebhookEvent::data_as`]
//! decodes it into a concrete payload type on demand.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codes::{TransactionStatus, TransactionType, WebhookEventType};

/// A webhook delivery envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookEvent {
    /// Event type code.
    pub event_type_id: WebhookEventType,

    /// Event payload, shaped by [`Self::event_type_id`].
    #[serde(default)]
    pub event_data: Option<Value>,

    /// Delivery timestamp, as the provider formats it.
    #[serde(default)]
    pub created: Option<String>,

    /// Correlation identifier for support requests.
    #[serde(default)]
    pub correlation_id: Option<String>,

    /// Delivery delay reported by the provider.
    #[serde(default)]
    pub delay: Option<i64>,

    /// Message identifier of this delivery.
    #[serde(default)]
    pub message_id: Option<String>,

    /// Merchant the event was delivered to.
    #[serde(default)]
    pub recipient_id: Option<String>,

    /// Message type code.
    #[serde(default)]
    pub message_type_id: Option<i64>,

    /// Webhook URL the event was delivered to.
    #[serde(default)]
    pub url: Option<String>,
}

impl WebhookEvent {
    /// Parses a webhook envelope from a raw request body.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the body is not a valid envelope.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Decodes `EventData` into a concrete payload type.
    ///
    /// Returns `None` when the envelope carried no event data.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the payload does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.event_data
            .as_ref()
            .map(|data| serde_json::from_value(data.clone()))
    }

    /// Decodes `EventData` as a transaction lifecycle payload.
    ///
    /// Suitable for the payment created / transaction failed / reversal
    /// created event types.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the payload is not
    /// transaction-shaped.
    pub fn transaction(&self) -> Option<Result<TransactionEventData, serde_json::Error>> {
        self.data_as()
    }
}

/// `EventData` payload for transaction lifecycle events.
///
/// The provider ships many more fields than these; unmodeled ones are
/// ignored rather than rejected, since the event payload is an open shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionEventData {
    /// Identifier of the transaction.
    pub transaction_id: String,

    /// Transaction amount in the currency's major unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Transaction lifecycle status.
    pub status_id: TransactionStatus,

    /// Transaction type code.
    pub transaction_type_id: TransactionType,

    /// The payment order the transaction belongs to.
    #[serde(default)]
    pub order_code: Option<i64>,

    /// Numeric ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: Option<String>,

    /// Customer e-mail address.
    #[serde(default)]
    pub email: Option<String>,

    /// Customer full name.
    #[serde(default)]
    pub full_name: Option<String>,

    /// Masked card number.
    #[serde(default)]
    pub card_number: Option<String>,

    /// Description shown to the customer.
    #[serde(default)]
    pub customer_trns: Option<String>,

    /// Merchant-side reference.
    #[serde(default)]
    pub merchant_trns: Option<String>,

    /// Payment source the transaction is assigned to.
    #[serde(default)]
    pub source_code: Option<String>,

    /// Insertion timestamp, as the provider formats it.
    #[serde(default)]
    pub ins_date: Option<String>,

    /// Acquiring bank identifier.
    #[serde(default)]
    pub bank_id: Option<String>,
}

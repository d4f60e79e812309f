//! Status and type codes used across the Viva API.
//!
//! The provider distinguishes two kinds of code sets:
//!
//! - **Closed sets** ([`TransactionStatus`]) — the contract guarantees the
//!   full list of codes, so unknown codes are rejected at deserialization.
//! - **Open sets** ([`TransactionType`], [`WebhookEventType`]) — the provider
//!   adds codes between API releases, so unknown codes pass through as opaque
//!   values instead of breaking deserialization.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a transaction (`statusId` on the wire).
///
/// The provider documents this as a closed set of single/double letter
/// codes; deserialization fails on anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// The transaction was not completed because of an error.
    #[serde(rename = "E")]
    Error,
    /// The transaction is in progress (e.g., a pre-auth awaiting capture).
    #[serde(rename = "A")]
    InProgress,
    /// The cardholder has disputed the transaction with the issuing bank.
    #[serde(rename = "M")]
    Disputed,
    /// A dispute is awaiting a response from the merchant.
    #[serde(rename = "MA")]
    DisputeAwaitingResponse,
    /// A dispute is in progress.
    #[serde(rename = "MI")]
    DisputeInProgress,
    /// A disputed transaction has been refunded (dispute lost).
    #[serde(rename = "ML")]
    DisputeLost,
    /// The transaction is a suspected dispute.
    #[serde(rename = "MS")]
    SuspectedDispute,
    /// A dispute was won by the merchant.
    #[serde(rename = "MW")]
    DisputeWon,
    /// The transaction was refunded (fully or partially).
    #[serde(rename = "R")]
    Refunded,
    /// The transaction was cancelled by the merchant.
    #[serde(rename = "X")]
    Cancelled,
    /// The transaction has been fully or partially completed.
    #[serde(rename = "F")]
    Completed,
}

impl TransactionStatus {
    /// Returns the wire code for this status (e.g., `"F"`).
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Error => "E",
            Self::InProgress => "A",
            Self::Disputed => "M",
            Self::DisputeAwaitingResponse => "MA",
            Self::DisputeInProgress => "MI",
            Self::DisputeLost => "ML",
            Self::SuspectedDispute => "MS",
            Self::DisputeWon => "MW",
            Self::Refunded => "R",
            Self::Cancelled => "X",
            Self::Completed => "F",
        }
    }
}

/// Transaction type code (`transactionTypeId` on the wire).
///
/// The provider extends this set between API releases, so only the
/// documented codes get named variants; everything else round-trips through
/// [`TransactionType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum TransactionType {
    /// Card refund (code 4).
    CardRefund,
    /// Card charge (code 5). Recurring charges also report this code.
    CardCharge,
    /// Card charge with installments (code 6).
    CardChargeInstallments,
    /// Card void (code 7).
    CardVoid,
    /// A code the provider added after this crate was released.
    Other(u16),
}

impl TransactionType {
    /// Returns the wire code for this transaction type.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::CardRefund => 4,
            Self::CardCharge => 5,
            Self::CardChargeInstallments => 6,
            Self::CardVoid => 7,
            Self::Other(code) => code,
        }
    }
}

impl From<u16> for TransactionType {
    fn from(code: u16) -> Self {
        match code {
            4 => Self::CardRefund,
            5 => Self::CardCharge,
            6 => Self::CardChargeInstallments,
            7 => Self::CardVoid,
            other => Self::Other(other),
        }
    }
}

impl From<TransactionType> for u16 {
    fn from(kind: TransactionType) -> Self {
        kind.value()
    }
}

/// Webhook event type code (`EventTypeId` on the wire).
///
/// Open set, like [`TransactionType`]; unknown codes pass through as
/// [`WebhookEventType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum WebhookEventType {
    /// A payment transaction was created (code 1796).
    TransactionPaymentCreated,
    /// A transaction failed (code 1797).
    TransactionFailed,
    /// A transaction reversal was created (code 1798).
    TransactionReversalCreated,
    /// A transaction price was calculated (code 1799).
    TransactionPriceCalculated,
    /// A code the provider added after this crate was released.
    Other(i64),
}

impl WebhookEventType {
    /// Returns the wire code for this event type.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::TransactionPaymentCreated => 1796,
            Self::TransactionFailed => 1797,
            Self::TransactionReversalCreated => 1798,
            Self::TransactionPriceCalculated => 1799,
            Self::Other(code) => code,
        }
    }
}

impl From<i64> for WebhookEventType {
    fn from(code: i64) -> Self {
        match code {
            1796 => Self::TransactionPaymentCreated,
            1797 => Self::TransactionFailed,
            1798 => Self::TransactionReversalCreated,
            1799 => Self::TransactionPriceCalculated,
            other => Self::Other(other),
        }
    }
}

impl From<WebhookEventType> for i64 {
    fn from(kind: WebhookEventType) -> Self {
        kind.value()
    }
}

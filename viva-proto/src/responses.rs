//! Response bodies returned by the Viva API.
//!
//! Response amounts are decimals in the currency's major unit (the provider
//! returns `30.0` for 30.00 EUR), unlike the minor-unit integers used in
//! requests. Nullable fields deserialize to `None` whether the provider
//! sends `null` or omits the field; they never collapse to zero values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codes::{TransactionStatus, TransactionType};

/// A payment/settlement record, as returned by the checkout v2 family
/// (`GET /checkout/v2/transactions/{id}` and the ISV variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Customer e-mail address.
    #[serde(default)]
    pub email: Option<String>,

    /// Transaction amount in the currency's major unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// The payment order this transaction belongs to.
    pub order_code: i64,

    /// Transaction lifecycle status.
    pub status_id: TransactionStatus,

    /// Customer full name.
    #[serde(default)]
    pub full_name: Option<String>,

    /// Insertion timestamp, as the provider formats it (RFC 3339 with offset).
    #[serde(default)]
    pub ins_date: Option<String>,

    /// Masked card number (e.g., `"523929XXXXXX0168"`).
    #[serde(default)]
    pub card_number: Option<String>,

    /// Numeric ISO 4217 currency code (e.g., `"978"` for EUR).
    #[serde(default)]
    pub currency_code: Option<String>,

    /// Description shown to the customer.
    #[serde(default)]
    pub customer_trns: Option<String>,

    /// Merchant-side reference.
    #[serde(default)]
    pub merchant_trns: Option<String>,

    /// Transaction type code.
    pub transaction_type_id: TransactionType,

    /// Whether the card supports recurring charges.
    pub recurring_support: bool,

    /// Total number of installments.
    pub total_installments: i32,

    /// ISO 3166-1 alpha-2 country code of the card.
    #[serde(default)]
    pub card_country_code: Option<String>,

    /// Issuing bank of the card.
    #[serde(default)]
    pub card_issuing_bank: Option<String>,

    /// The installment this transaction settles.
    pub current_installment: i32,

    /// Provider-wide fingerprint of the card.
    #[serde(default)]
    pub card_unique_reference: Option<String>,

    /// Card type code (e.g., `1` for credit).
    #[serde(default)]
    pub card_type_id: Option<i32>,

    /// Acquiring bank identifier (e.g., `"NET_VISA"`).
    #[serde(default)]
    pub bank_id: Option<String>,

    /// Whether the transaction was switched to a different acquirer.
    #[serde(default)]
    pub switching: bool,
}

/// Result of charging a recurring transaction, as returned by the legacy
/// API family (`POST /api/transactions/{id}`) in PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringTransaction {
    /// EMV data for the charge, when present.
    #[serde(default)]
    pub emv: Option<Value>,

    /// Charged amount in the currency's major unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Transaction lifecycle status.
    pub status_id: TransactionStatus,

    /// Redirect URL for flows that need one (e.g., 3-D Secure).
    #[serde(default)]
    pub redirect_url: Option<String>,

    /// Numeric ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: Option<String>,

    /// Identifier of the new transaction.
    pub transaction_id: String,

    /// Transaction type code.
    pub transaction_type_id: TransactionType,

    /// Acquirer reference number.
    #[serde(default)]
    pub reference_number: Option<i64>,

    /// Authorization identifier from the issuing bank.
    #[serde(default)]
    pub authorization_id: Option<String>,

    /// Retrieval reference number (RRN).
    #[serde(default)]
    pub retrieval_reference_number: Option<String>,

    /// Loyalty program data, when present.
    #[serde(default)]
    pub loyalty: Option<Value>,

    /// 3-D Secure status code.
    #[serde(default)]
    pub three_d_secure_status_id: Option<i32>,

    /// Provider error code; `0` on success.
    pub error_code: i64,

    /// Provider error text, when the charge failed.
    #[serde(default)]
    pub error_text: Option<String>,

    /// Timestamp of the charge, as the provider formats it.
    #[serde(default)]
    pub time_stamp: Option<String>,

    /// Correlation identifier for support requests.
    #[serde(default)]
    pub correlation_id: Option<String>,

    /// Provider event identifier; `0` when not applicable.
    pub event_id: i64,

    /// Whether the charge succeeded.
    pub success: bool,
}

/// Result of creating a smart checkout payment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderCreated {
    /// Order code the customer pays against.
    pub order_code: i64,
}

/// A card token created from a completed transaction, used for
/// merchant-initiated recurring charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardToken {
    /// The card token.
    pub token: String,
}

/// Webhook verification key, as returned by the legacy API in PascalCase.
///
/// The provider expects this key echoed back verbatim when it probes a
/// webhook URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookVerification {
    /// The verification key to echo back.
    pub key: String,
}

/// OAuth2 access token, as returned by `POST /connect/token`.
///
/// The OAuth endpoint is the one family that uses snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer token.
    pub access_token: String,

    /// Token type; always `"Bearer"`.
    pub token_type: String,

    /// Seconds until the token expires.
    pub expires_in: i64,

    /// Granted scope, when the provider reports one.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Provider error payload.
///
/// The provider emits two error shapes: the legacy PascalCase
/// `{"ErrorCode": …, "ErrorText": …}` and the checkout v2 lowercase
/// `{"message": …}`. Both map onto this type via field aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[serde(default, alias = "ErrorText", alias = "message")]
    pub message: Option<String>,

    /// Provider error code, when the legacy family reports one.
    #[serde(default, alias = "ErrorCode")]
    pub code: Option<i64>,

    /// Provider event identifier, when reported.
    #[serde(default, alias = "EventId", alias = "eventId")]
    pub event_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_maps_checkout_v2_fixture_exactly() {
        let fixture = json!({
            "email": "someone@example.com",
            "amount": 30.00,
            "orderCode": 6_962_462_482_972_601_i64,
            "statusId": "F",
            "fullName": "George Seferis",
            "insDate": "2021-12-06T14:32:10.32+02:00",
            "cardNumber": "523929XXXXXX0168",
            "currencyCode": "978",
            "customerTrns": "Short description of items/services purchased to display to your customer",
            "merchantTrns": "Short description of items/services purchased by customer",
            "transactionTypeId": 5,
            "recurringSupport": false,
            "totalInstallments": 0,
            "cardCountryCode": null,
            "cardIssuingBank": null,
            "currentInstallment": 0,
            "cardUniqueReference": "9521B4209B611B11E080964E09640F4EB3C3AA18",
            "cardTypeId": 1,
            "bankId": "NET_VISA",
            "switching": false,
        });

        let transaction: Transaction = serde_json::from_value(fixture).unwrap();

        assert_eq!(transaction.email.as_deref(), Some("someone@example.com"));
        assert_eq!(transaction.amount, Decimal::new(3000, 2));
        assert_eq!(transaction.order_code, 6_962_462_482_972_601);
        assert_eq!(transaction.status_id.value(), "F");
        assert_eq!(transaction.full_name.as_deref(), Some("George Seferis"));
        assert_eq!(
            transaction.ins_date.as_deref(),
            Some("2021-12-06T14:32:10.32+02:00")
        );
        assert_eq!(transaction.card_number.as_deref(), Some("523929XXXXXX0168"));
        assert_eq!(transaction.currency_code.as_deref(), Some("978"));
        assert_eq!(transaction.transaction_type_id.value(), 5);
        assert!(!transaction.recurring_support);
        assert_eq!(transaction.total_installments, 0);
        assert_eq!(transaction.card_country_code, None);
        assert_eq!(transaction.card_issuing_bank, None);
        assert_eq!(transaction.current_installment, 0);
        assert_eq!(
            transaction.card_unique_reference.as_deref(),
            Some("9521B4209B611B11E080964E09640F4EB3C3AA18")
        );
        assert_eq!(transaction.card_type_id, Some(1));
        assert_eq!(transaction.bank_id.as_deref(), Some("NET_VISA"));
        assert!(!transaction.switching);
    }

    #[test]
    fn transaction_absent_nullable_fields_map_to_none() {
        let fixture = json!({
            "amount": 12.5,
            "orderCode": 1,
            "statusId": "A",
            "transactionTypeId": 5,
            "recurringSupport": true,
            "totalInstallments": 0,
            "currentInstallment": 0,
        });

        let transaction: Transaction = serde_json::from_value(fixture).unwrap();

        assert_eq!(transaction.email, None);
        assert_eq!(transaction.card_number, None);
        assert_eq!(transaction.card_type_id, None);
        assert_eq!(transaction.bank_id, None);
        assert_eq!(transaction.amount, Decimal::new(125, 1));
    }

    #[test]
    fn recurring_transaction_maps_legacy_pascal_case_fixture() {
        let fixture = json!({
            "Emv": null,
            "Amount": 1.00,
            "StatusId": "F",
            "RedirectUrl": null,
            "CurrencyCode": "826",
            "TransactionId": "14c59e93-f8e4-4f5c-8a63-60ae8f8807d1",
            "TransactionTypeId": 5,
            "ReferenceNumber": 838_982,
            "AuthorizationId": "838982",
            "RetrievalReferenceNumber": "109012838982",
            "Loyalty": null,
            "ThreeDSecureStatusId": 2,
            "ErrorCode": 0,
            "ErrorText": null,
            "TimeStamp": "2021-03-31T15:52:27.2029634+03:00",
            "CorrelationId": null,
            "EventId": 0,
            "Success": true,
        });

        let response: RecurringTransaction = serde_json::from_value(fixture).unwrap();

        assert_eq!(response.emv, None);
        assert_eq!(response.amount, Decimal::new(100, 2));
        assert_eq!(response.status_id.value(), "F");
        assert_eq!(response.redirect_url, None);
        assert_eq!(response.currency_code.as_deref(), Some("826"));
        assert_eq!(response.transaction_id, "14c59e93-f8e4-4f5c-8a63-60ae8f8807d1");
        assert_eq!(response.transaction_type_id.value(), 5);
        assert_eq!(response.reference_number, Some(838_982));
        assert_eq!(response.authorization_id.as_deref(), Some("838982"));
        assert_eq!(
            response.retrieval_reference_number.as_deref(),
            Some("109012838982")
        );
        assert_eq!(response.loyalty, None);
        assert_eq!(response.three_d_secure_status_id, Some(2));
        assert_eq!(response.error_code, 0);
        assert_eq!(response.error_text, None);
        assert_eq!(
            response.time_stamp.as_deref(),
            Some("2021-03-31T15:52:27.2029634+03:00")
        );
        assert_eq!(response.correlation_id, None);
        assert_eq!(response.event_id, 0);
        assert!(response.success);
    }

    #[test]
    fn payment_order_created_maps_order_code() {
        let order: PaymentOrderCreated =
            serde_json::from_value(json!({ "orderCode": 1_272_214_778_972_604_i64 })).unwrap();
        assert_eq!(order.order_code, 1_272_214_778_972_604);
    }

    #[test]
    fn access_token_maps_snake_case_fields() {
        let token: AccessToken = serde_json::from_value(json!({
            "access_token": "eyJhbGciOiJSUzI1NiIs",
            "token_type": "Bearer",
            "expires_in": 3600,
        }))
        .unwrap();

        assert_eq!(token.access_token, "eyJhbGciOiJSUzI1NiIs");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.scope, None);
    }

    #[test]
    fn error_body_accepts_both_provider_shapes() {
        let legacy: ErrorBody = serde_json::from_value(json!({
            "ErrorCode": 400,
            "ErrorText": "Order not found",
            "EventId": 0,
        }))
        .unwrap();
        assert_eq!(legacy.code, Some(400));
        assert_eq!(legacy.message.as_deref(), Some("Order not found"));

        let checkout: ErrorBody =
            serde_json::from_value(json!({ "message": "Invalid source code" })).unwrap();
        assert_eq!(checkout.code, None);
        assert_eq!(checkout.message.as_deref(), Some("Invalid source code"));
    }

    #[test]
    fn webhook_verification_maps_pascal_case_key() {
        let verification: WebhookVerification =
            serde_json::from_value(json!({ "Key": "59dcba56-d33a-4a1e-9d86-9f4d784ba1c1" }))
                .unwrap();
        assert_eq!(verification.key, "59dcba56-d33a-4a1e-9d86-9f4d784ba1c1");
    }
}

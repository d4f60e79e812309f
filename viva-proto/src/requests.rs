//! Request bodies sent to the Viva API.
//!
//! All request families serialize to camelCase regardless of what the
//! matching response family uses. Amounts in requests are integers in the
//! currency's minor unit (e.g., `1000` is 10.00 EUR), per the provider
//! contract. Optional fields that were never set are omitted from the body
//! entirely, never serialized as `null`.

use serde::{Deserialize, Serialize};

/// Customer details attached to a payment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer e-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Customer phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// ISO 3166-1 alpha-2 country code (e.g., `"GR"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Language for checkout and notifications (e.g., `"en-GB"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_lang: Option<String>,
}

impl Customer {
    /// Creates an empty customer record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer e-mail address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the customer full name.
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Sets the customer phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the customer country code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Sets the checkout/notification language.
    #[must_use]
    pub fn with_request_lang(mut self, request_lang: impl Into<String>) -> Self {
        self.request_lang = Some(request_lang.into());
        self
    }
}

/// Request body for creating a smart checkout payment order.
///
/// `POST /checkout/v2/orders` (merchant) or `POST /checkout/v2/isv/orders`
/// (ISV, with `isv_amount` and `reseller_source_code` populated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentOrder {
    /// Amount to charge, in the currency's minor unit.
    pub amount: i64,

    /// Description shown to the customer during checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_trns: Option<String>,

    /// Merchant-side reference for the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_trns: Option<String>,

    /// Customer details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Seconds before an unpaid order expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_timeout: Option<i64>,

    /// Pre-authorize instead of charging immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preauth: Option<bool>,

    /// Allow the customer to opt into recurring charges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_recurring: Option<bool>,

    /// Maximum number of installments offered to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_installments: Option<i32>,

    /// Send the provider's payment notification e-mail to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_notification: Option<bool>,

    /// Tip amount included in `amount`, in the currency's minor unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<i64>,

    /// Let the customer pay an amount different from `amount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_exact_amount: Option<bool>,

    /// Hide the cash payment option at Viva Spot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_cash: Option<bool>,

    /// Hide the wallet payment option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_wallet: Option<bool>,

    /// Payment source the order is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,

    /// Free-form tags for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// ISV fee, in the currency's minor unit. ISV orders only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isv_amount: Option<i64>,

    /// Payment source of the reseller. ISV orders only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reseller_source_code: Option<String>,
}

impl CreatePaymentOrder {
    /// Creates an order request for the given minor-unit amount.
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            customer_trns: None,
            merchant_trns: None,
            customer: None,
            payment_timeout: None,
            preauth: None,
            allow_recurring: None,
            max_installments: None,
            payment_notification: None,
            tip_amount: None,
            disable_exact_amount: None,
            disable_cash: None,
            disable_wallet: None,
            source_code: None,
            tags: None,
            isv_amount: None,
            reseller_source_code: None,
        }
    }

    /// Sets the customer-facing description.
    #[must_use]
    pub fn with_customer_trns(mut self, description: impl Into<String>) -> Self {
        self.customer_trns = Some(description.into());
        self
    }

    /// Sets the merchant-side reference.
    #[must_use]
    pub fn with_merchant_trns(mut self, reference: impl Into<String>) -> Self {
        self.merchant_trns = Some(reference.into());
        self
    }

    /// Sets the customer details.
    #[must_use]
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Sets the payment source code.
    #[must_use]
    pub fn with_source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = Some(source_code.into());
        self
    }

    /// Marks the order as a pre-authorization.
    #[must_use]
    pub const fn with_preauth(mut self, preauth: bool) -> Self {
        self.preauth = Some(preauth);
        self
    }

    /// Allows the customer to opt into recurring charges.
    #[must_use]
    pub const fn with_allow_recurring(mut self, allow: bool) -> Self {
        self.allow_recurring = Some(allow);
        self
    }

    /// Sets the ISV fee and reseller source code for an ISV order.
    #[must_use]
    pub fn with_isv(mut self, isv_amount: i64, reseller_source_code: impl Into<String>) -> Self {
        self.isv_amount = Some(isv_amount);
        self.reseller_source_code = Some(reseller_source_code.into());
        self
    }
}

/// Request body for charging a recurring transaction against an earlier one.
///
/// `POST /api/transactions/{id}`. The legacy API accepts this body in
/// camelCase even though its responses are PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringTransaction {
    /// Amount to charge, in the currency's minor unit.
    pub amount: i64,

    /// ISV fee, in the currency's minor unit. ISV charges only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isv_amount: Option<i64>,

    /// Description shown to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_trns: Option<String>,

    /// Merchant-side reference for the charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_trns: Option<String>,

    /// Payment source the charge is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,

    /// Payment source of the reseller. ISV charges only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reseller_source_code: Option<String>,

    /// Tip amount included in `amount`, in the currency's minor unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<i64>,

    /// Number of installments for the charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
}

impl CreateRecurringTransaction {
    /// Creates a recurring charge request for the given minor-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self {
            amount,
            isv_amount: None,
            customer_trns: None,
            merchant_trns: None,
            source_code: None,
            reseller_source_code: None,
            tip_amount: None,
            installments: None,
        }
    }

    /// Sets the ISV fee.
    #[must_use]
    pub const fn with_isv_amount(mut self, isv_amount: i64) -> Self {
        self.isv_amount = Some(isv_amount);
        self
    }

    /// Sets the customer-facing description.
    #[must_use]
    pub fn with_customer_trns(mut self, description: impl Into<String>) -> Self {
        self.customer_trns = Some(description.into());
        self
    }

    /// Sets the merchant-side reference.
    #[must_use]
    pub fn with_merchant_trns(mut self, reference: impl Into<String>) -> Self {
        self.merchant_trns = Some(reference.into());
        self
    }

    /// Sets the payment source code.
    #[must_use]
    pub fn with_source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = Some(source_code.into());
        self
    }

    /// Sets the reseller payment source code.
    #[must_use]
    pub fn with_reseller_source_code(mut self, source_code: impl Into<String>) -> Self {
        self.reseller_source_code = Some(source_code.into());
        self
    }

    /// Sets the tip amount.
    #[must_use]
    pub const fn with_tip_amount(mut self, tip_amount: i64) -> Self {
        self.tip_amount = Some(tip_amount);
        self
    }

    /// Sets the number of installments.
    #[must_use]
    pub const fn with_installments(mut self, installments: i32) -> Self {
        self.installments = Some(installments);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recurring_transaction_serializes_exactly_the_populated_fields() {
        let request = CreateRecurringTransaction::new(100)
            .with_isv_amount(1)
            .with_customer_trns("A description of products / services that is displayed to the customer")
            .with_merchant_trns("Your merchant reference")
            .with_source_code("4929333")
            .with_reseller_source_code("1565");

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "amount": 100,
                "isvAmount": 1,
                "customerTrns": "A description of products / services that is displayed to the customer",
                "merchantTrns": "Your merchant reference",
                "sourceCode": "4929333",
                "resellerSourceCode": "1565",
            })
        );
    }

    #[test]
    fn recurring_transaction_omits_unset_fields() {
        let body = serde_json::to_value(CreateRecurringTransaction::new(2500)).unwrap();
        assert_eq!(body, json!({ "amount": 2500 }));
    }

    #[test]
    fn payment_order_serializes_nested_customer() {
        let request = CreatePaymentOrder::new(1000)
            .with_customer_trns("Short description")
            .with_customer(
                Customer::new()
                    .with_email("someone@example.com")
                    .with_full_name("George Seferis")
                    .with_country_code("GR")
                    .with_request_lang("el-GR"),
            )
            .with_source_code("Default");

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "amount": 1000,
                "customerTrns": "Short description",
                "customer": {
                    "email": "someone@example.com",
                    "fullName": "George Seferis",
                    "countryCode": "GR",
                    "requestLang": "el-GR",
                },
                "sourceCode": "Default",
            })
        );
    }

    #[test]
    fn isv_payment_order_includes_isv_fields() {
        let body =
            serde_json::to_value(CreatePaymentOrder::new(1000).with_isv(100, "1565")).unwrap();

        assert_eq!(
            body,
            json!({
                "amount": 1000,
                "isvAmount": 100,
                "resellerSourceCode": "1565",
            })
        );
    }
}

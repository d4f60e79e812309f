//! ISV (independent software vendor) operations.
//!
//! ISV endpoints act on behalf of a merchant: the checkout v2 variants take
//! the merchant id as a `merchantId` query parameter next to the reseller's
//! bearer token, while the legacy recurring charge uses the reseller's
//! merchant basic auth with the ISV fee carried in the body.

use viva_proto::{
    CreatePaymentOrder, CreateRecurringTransaction, PaymentOrderCreated, RecurringTransaction,
    Transaction,
};

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

/// Entry point for ISV operations; see [`Self::transactions`] and
/// [`Self::orders`].
#[derive(Debug, Clone, Copy)]
pub struct Isv<'a> {
    client: &'a VivaClient,
}

impl<'a> Isv<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// ISV transaction operations.
    #[must_use]
    pub const fn transactions(&self) -> IsvTransactions<'a> {
        IsvTransactions {
            client: self.client,
        }
    }

    /// ISV order operations.
    #[must_use]
    pub const fn orders(&self) -> IsvOrders<'a> {
        IsvOrders {
            client: self.client,
        }
    }
}

/// Transaction operations on behalf of a merchant.
#[derive(Debug, Clone, Copy)]
pub struct IsvTransactions<'a> {
    client: &'a VivaClient,
}

impl IsvTransactions<'_> {
    /// Retrieves a merchant's transaction by its identifier.
    ///
    /// `GET /checkout/v2/isv/transactions/{id}?merchantId=...` with bearer
    /// auth.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::InvalidArgument`] when `transaction_id` is
    /// empty, [`VivaError::MissingCredentials`] when no merchant id is
    /// configured, otherwise any transport/API/decode failure.
    pub async fn retrieve(&self, transaction_id: &str) -> Result<Transaction, VivaError> {
        if transaction_id.is_empty() {
            return Err(VivaError::InvalidArgument("transaction_id"));
        }

        let merchant_id = self.client.merchant_id()?;
        let url = self
            .client
            .api_endpoint(&format!("/checkout/v2/isv/transactions/{transaction_id}"))?;
        let request = self
            .client
            .get(url, Auth::Bearer)?
            .query(&[("merchantId", merchant_id)]);
        self.client.send_json(request).await
    }

    /// Charges a recurring transaction on behalf of a merchant.
    ///
    /// `POST /api/transactions/{id}` with merchant basic auth; the ISV fee
    /// travels as `isvAmount` in the body.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::InvalidArgument`] when `transaction_id` is
    /// empty, otherwise any transport/API/decode failure.
    pub async fn create_recurring(
        &self,
        transaction_id: &str,
        body: &CreateRecurringTransaction,
    ) -> Result<RecurringTransaction, VivaError> {
        if transaction_id.is_empty() {
            return Err(VivaError::InvalidArgument("transaction_id"));
        }

        let url = self
            .client
            .api_endpoint(&format!("/api/transactions/{transaction_id}"))?;
        let request = self.client.post(url, Auth::MerchantBasic)?.json(body);
        self.client.send_json(request).await
    }
}

/// Order operations on behalf of a merchant.
#[derive(Debug, Clone, Copy)]
pub struct IsvOrders<'a> {
    client: &'a VivaClient,
}

impl IsvOrders<'_> {
    /// Creates a payment order on behalf of a merchant.
    ///
    /// `POST /checkout/v2/isv/orders?merchantId=...` with bearer auth; the
    /// ISV fee travels as `isvAmount` in the body.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::MissingCredentials`] when no merchant id is
    /// configured, otherwise any transport/API/decode failure.
    pub async fn create(&self, order: &CreatePaymentOrder) -> Result<PaymentOrderCreated, VivaError> {
        let merchant_id = self.client.merchant_id()?;
        let url = self.client.api_endpoint("/checkout/v2/isv/orders")?;
        let request = self
            .client
            .post(url, Auth::Bearer)?
            .query(&[("merchantId", merchant_id)])
            .json(order);
        self.client.send_json(request).await
    }
}

//! Merchant transaction operations.

use viva_proto::{CreateRecurringTransaction, RecurringTransaction, Transaction};

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

/// Transaction operations for the authenticated merchant.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a VivaClient,
}

impl<'a> Transactions<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// Retrieves a transaction by its identifier.
    ///
    /// `GET /checkout/v2/transactions/{id}` with bearer auth.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::InvalidArgument`] when `transaction_id` is empty,
    /// otherwise any transport/API/decode failure.
    pub async fn retrieve(&self, transaction_id: &str) -> Result<Transaction, VivaError> {
        if transaction_id.is_empty() {
            return Err(VivaError::InvalidArgument("transaction_id"));
        }

        let url = self
            .client
            .api_endpoint(&format!("/checkout/v2/transactions/{transaction_id}"))?;
        let request = self.client.get(url, Auth::Bearer)?;
        self.client.send_json(request).await
    }

    /// Charges a recurring transaction against an earlier one.
    ///
    /// `POST /api/transactions/{id}` with merchant basic auth; the legacy
    /// family answers in PascalCase.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::InvalidArgument`] when `transaction_id` is empty,
    /// otherwise any transport/API/decode failure.
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

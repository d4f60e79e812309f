//! Smart checkout order operations.

use url::Url;
use viva_proto::{CreatePaymentOrder, PaymentOrderCreated};

use crate::client::{Auth, VivaClient};
use crate::error::VivaError;

/// Smart checkout order operations for the authenticated merchant.
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    client: &'a VivaClient,
}

impl<'a> Orders<'a> {
    pub(crate) const fn new(client: &'a VivaClient) -> Self {
        Self { client }
    }

    /// Creates a payment order the customer can pay at smart checkout.
    ///
    /// `POST /checkout/v2/orders` with bearer auth.
    ///
    /// # Errors
    ///
    /// Returns any transport/API/decode failure.
    pub async fn create(&self, order: &CreatePaymentOrder) -> Result<PaymentOrderCreated, VivaError> {
        let url = self.client.api_endpoint("/checkout/v2/orders")?;
        let request = self.client.post(url, Auth::Bearer)?.json(order);
        self.client.send_json(request).await
    }

    /// The smart checkout URL to redirect a customer to for the given
    /// order code. Pure URL construction, no HTTP call.
    #[must_use]
    pub fn redirect_url(&self, order_code: i64) -> Url {
        let mut url = self.client.web_url().clone();
        url.set_path("/web/checkout");
        url.set_query(Some(&format!("ref={order_code}")));
        url
    }
}

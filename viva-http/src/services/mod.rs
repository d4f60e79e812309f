//! Per-endpoint-family service façades.
//!
//! Each façade borrows the [`crate::VivaClient`] and exposes one method per
//! API operation. Façades are `Copy` handles; construct them through the
//! client accessors (e.g., [`crate::VivaClient::orders`]).

pub mod cards;
pub mod isv;
pub mod oauth;
pub mod orders;
pub mod transactions;
pub mod webhooks;

pub use cards::Cards;
pub use isv::{Isv, IsvOrders, IsvTransactions};
pub use oauth::Oauth;
pub use orders::Orders;
pub use transactions::Transactions;
pub use webhooks::Webhooks;

//! APIs and models related to orders and their transactions.

mod api;
mod model;

pub use api::OrdersApi;
pub use model::*;

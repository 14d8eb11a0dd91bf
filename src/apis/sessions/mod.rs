//! APIs and models related to payment sessions.

mod api;
mod model;

pub use api::SessionsApi;
pub use model::*;

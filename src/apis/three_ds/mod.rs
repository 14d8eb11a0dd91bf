//! APIs and models related to 3-D Secure payer authentication.

mod api;
mod model;

pub use api::ThreeDSecureApi;
pub use model::*;

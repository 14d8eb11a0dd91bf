//! Rust client for the Mastercard Payment Gateway Services (MPGS) REST APIs.
//!
//! The client covers 3-D Secure authentication, payment sessions, card tokenization
//! and the lifecycle of orders and their transactions (authorize, capture, pay,
//! refund, void and verify).
//!
//! Every operation returns the JSON document answered by the gateway, untouched.
//!
//! # Usage
//!
//! ## Initialize a new `GatewayClient`
//!
//! Create a new [`GatewayClient`](crate::client::GatewayClient) with your merchant id
//! and API password. Requests are authenticated with HTTP basic auth, using
//! `merchant.<merchant id>` as username.
//!
//! ```rust,no_run
//! # use mpgs_rust::{GatewayClient, client::Environment};
//! # use std::time::Duration;
//! # fn main() -> Result<(), mpgs_rust::Error> {
//! let gateway = GatewayClient::builder("TESTMERCH", "my-api-password")
//!     .with_environment(Environment::Test)
//!     .with_timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `GatewayClient` connects to the Asia Pacific production gateway
//! using version `53` of the REST API.
//!
//! ## Pay with a session
//!
//! ```rust,no_run
//! # use mpgs_rust::{GatewayClient, Error, apis::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let gateway: GatewayClient = unreachable!();
//! #
//! let session = gateway.sessions.create().await?;
//! let session_id = session["session"]["id"].as_str().unwrap_or_default();
//!
//! let card = CardDetailsBuilder::default()
//!     .number("5123450000000008")
//!     .expiry_month("05")
//!     .expiry_year("21")
//!     .security_code("100")
//!     .build()
//!     .unwrap();
//! gateway.sessions.update(session_id, &card, true).await?;
//!
//! let res = gateway
//!     .orders
//!     .pay(
//!         &OrderTransactionKey::new("order-1", "txn-1"),
//!         &Money::new("10.00".parse().unwrap(), "SGD"),
//!         session_id,
//!     )
//!     .await?;
//!
//! tracing::info!("Payment result: {}", res["result"]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::GatewayClient;
pub use error::Error;

use crate::Error;
use urlencoding::encode;

/// Gateway REST resource addressed by a request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Resource<'a> {
    ThreeDSecure {
        three_ds_id: &'a str,
    },
    Session {
        session_id: Option<&'a str>,
    },
    Token {
        token: Option<&'a str>,
    },
    TokenSearch,
    Order {
        order_id: &'a str,
    },
    Transaction {
        order_id: &'a str,
        transaction_id: &'a str,
    },
}

/// Builds the path of a resource, relative to the gateway base URL.
///
/// Every path is scoped to the given API version and merchant:
///
/// ```rust
/// # use mpgs_rust::apis::{build_path, Resource};
/// let path = build_path(
///     Resource::Transaction {
///         order_id: "O1",
///         transaction_id: "T1",
///     },
///     53,
///     "TESTMERCH",
/// )
/// .unwrap();
///
/// assert_eq!(path, "api/rest/version/53/merchant/TESTMERCH/order/O1/transaction/T1");
/// ```
///
/// Identifiers are percent-encoded. Empty identifiers are rejected with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
pub fn build_path(resource: Resource<'_>, api_version: u32, merchant_id: &str) -> Result<String, Error> {
    let prefix = format!(
        "api/rest/version/{}/merchant/{}",
        api_version,
        segment("merchant id", merchant_id)?
    );

    let path = match resource {
        Resource::ThreeDSecure { three_ds_id } => {
            format!("{}/3DSecureId/{}", prefix, segment("3DS id", three_ds_id)?)
        }
        Resource::Session { session_id: None } => format!("{}/session", prefix),
        Resource::Session {
            session_id: Some(session_id),
        } => format!("{}/session/{}", prefix, segment("session id", session_id)?),
        Resource::Token { token: None } => format!("{}/token", prefix),
        Resource::Token { token: Some(token) } => {
            format!("{}/token/{}", prefix, segment("token", token)?)
        }
        Resource::TokenSearch => format!("{}/tokenSearch", prefix),
        Resource::Order { order_id } => {
            format!("{}/order/{}", prefix, segment("order id", order_id)?)
        }
        Resource::Transaction {
            order_id,
            transaction_id,
        } => format!(
            "{}/order/{}/transaction/{}",
            prefix,
            segment("order id", order_id)?,
            segment("transaction id", transaction_id)?
        ),
    };

    Ok(path)
}

fn segment<'a>(name: &str, value: &'a str) -> Result<std::borrow::Cow<'a, str>, Error> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", name)));
    }

    Ok(encode(value))
}

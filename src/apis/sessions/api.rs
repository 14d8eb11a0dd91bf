use crate::{
    apis::{
        sessions::UpdateSessionRequest, CardDetails, EmptyBody, GatewayClientInner, Resource,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Gateway session APIs client.
///
/// A session holds card details submitted once, so that later operations
/// can reference the session instead of the raw card.
#[derive(Clone, Debug)]
pub struct SessionsApi {
    pub(crate) inner: Arc<GatewayClientInner>,
}

impl SessionsApi {
    pub(crate) fn new(inner: Arc<GatewayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new, empty session.
    #[tracing::instrument(name = "Create Session", skip(self))]
    pub async fn create(&self) -> Result<Value, Error> {
        self.inner
            .send_json(
                Method::POST,
                Resource::Session { session_id: None },
                &EmptyBody {},
            )
            .await
    }

    /// Gets the details of an existing session.
    #[tracing::instrument(name = "Retrieve Session", skip(self))]
    pub async fn retrieve(&self, session_id: &str) -> Result<Value, Error> {
        self.inner
            .send_empty(
                Method::GET,
                Resource::Session {
                    session_id: Some(session_id),
                },
            )
            .await
    }

    /// Stores card details in an existing session.
    ///
    /// When `include_security_code` is `false`, neither the security code nor
    /// the name on card are sent, even if present in `card`.
    #[tracing::instrument(name = "Update Session", skip(self, card))]
    pub async fn update(
        &self,
        session_id: &str,
        card: &CardDetails,
        include_security_code: bool,
    ) -> Result<Value, Error> {
        self.inner
            .send_json(
                Method::PUT,
                Resource::Session {
                    session_id: Some(session_id),
                },
                &UpdateSessionRequest::new(card, include_security_code),
            )
            .await
    }
}

use crate::{
    apis::{
        tokens::{CreateTokenRequest, SearchTokensRequest},
        GatewayClientInner, Resource,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Gateway tokenization APIs client.
#[derive(Clone, Debug)]
pub struct TokensApi {
    pub(crate) inner: Arc<GatewayClientInner>,
}

impl TokensApi {
    pub(crate) fn new(inner: Arc<GatewayClientInner>) -> Self {
        Self { inner }
    }

    /// Stores the card held by a session as a new token.
    #[tracing::instrument(name = "Create Token", skip(self))]
    pub async fn create(&self, session_id: &str) -> Result<Value, Error> {
        self.inner
            .send_json(
                Method::POST,
                Resource::Token { token: None },
                &CreateTokenRequest::new(session_id),
            )
            .await
    }

    /// Deletes a token.
    #[tracing::instrument(name = "Delete Token", skip(self, token))]
    pub async fn delete(&self, token: &str) -> Result<Value, Error> {
        self.inner
            .send_empty(Method::DELETE, Resource::Token { token: Some(token) })
            .await
    }

    /// Gets the details of a token.
    ///
    /// `_session_id` is not sent to the gateway; it is only accepted for
    /// compatibility with existing callers.
    #[tracing::instrument(name = "Retrieve Token", skip_all)]
    pub async fn retrieve(&self, _session_id: &str, token: &str) -> Result<Value, Error> {
        self.inner
            .send_empty(Method::GET, Resource::Token { token: Some(token) })
            .await
    }

    /// Searches the tokens stored for a card number.
    #[tracing::instrument(name = "Search Tokens", skip_all)]
    pub async fn search(&self, card_number: &str) -> Result<Value, Error> {
        let req = SearchTokensRequest::by_card_number(card_number)?;

        self.inner.send_query(Resource::TokenSearch, &req).await
    }
}

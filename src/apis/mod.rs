//! Clients for the various gateway APIs.

use crate::{client::Environment, Error};
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Method,
};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

mod model;
mod resource;

pub mod orders;
pub mod sessions;
pub mod three_ds;
pub mod tokens;

pub use model::*;
pub use resource::{build_path, Resource};

pub(crate) struct GatewayClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
    pub(crate) merchant_id: String,
    pub(crate) api_version: u32,
    pub(crate) channel_name: String,
    pub(crate) timeout: Duration,
    pub(crate) verify_currency: String,
    pub(crate) three_ds_placeholder_card: PlaceholderCard,
}

impl Debug for GatewayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClientInner")
            .field("environment", &self.environment)
            .field("merchant_id", &self.merchant_id)
            .field("api_version", &self.api_version)
            .field("channel_name", &self.channel_name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Body sent by operations which carry no parameters but still expect a JSON document.
#[derive(Serialize, Debug)]
pub(crate) struct EmptyBody {}

impl GatewayClientInner {
    /// Sends a request without a body.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        resource: Resource<'_>,
    ) -> Result<Value, Error> {
        self.execute(method, resource, |req| req).await
    }

    /// Sends a request with the given JSON body.
    pub(crate) async fn send_json<B>(
        &self,
        method: Method,
        resource: Resource<'_>,
        body: &B,
    ) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, resource, |req| req.json(body)).await
    }

    /// Sends a `GET` request with the given document encoded as query parameters.
    pub(crate) async fn send_query<Q>(&self, resource: Resource<'_>, query: &Q) -> Result<Value, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, resource, |req| req.query(query))
            .await
    }

    fn endpoint(&self, resource: Resource<'_>) -> Result<reqwest::Url, Error> {
        let path = resource::build_path(resource, self.api_version, &self.merchant_id)?;
        Ok(self.environment.gateway_url()?.join(&path)?)
    }

    #[tracing::instrument(
        name = "Gateway Request",
        level = "debug",
        skip(self, resource, attach_body),
        fields(channel = %self.channel_name)
    )]
    async fn execute<F>(
        &self,
        method: Method,
        resource: Resource<'_>,
        attach_body: F,
    ) -> Result<Value, Error>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.endpoint(resource)?;
        tracing::debug!(%url, "Sending request to the gateway");

        let req = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .timeout(self.timeout);

        let bytes = attach_body(req).send().await?.bytes().await?;

        // Some operations legitimately answer with an empty body
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

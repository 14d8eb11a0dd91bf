use crate::{
    apis::{
        new_reference,
        three_ds::{CheckEnrollmentRequest, EnrollmentSource, ProcessAcsResultRequest},
        GatewayClientInner, Money, Resource,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Gateway 3-D Secure APIs client.
#[derive(Clone, Debug)]
pub struct ThreeDSecureApi {
    pub(crate) inner: Arc<GatewayClientInner>,
}

impl ThreeDSecureApi {
    pub(crate) fn new(inner: Arc<GatewayClientInner>) -> Self {
        Self { inner }
    }

    /// Checks whether the card behind a session or a token is enrolled in 3-D Secure.
    ///
    /// Exactly one of `session_id` and `token` must be provided, otherwise
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) is returned without contacting the gateway.
    ///
    /// If `three_ds_id` is `None`, a new random identifier is generated. The gateway
    /// echoes it back in the `3DSecureId` field of the response.
    #[tracing::instrument(
        name = "Check 3DS Enrollment",
        skip(self, session_id, token, money),
        fields(
            amount = %money.amount,
            currency = %money.currency,
        )
    )]
    pub async fn check_enrollment(
        &self,
        three_ds_id: Option<&str>,
        session_id: Option<&str>,
        token: Option<&str>,
        response_url: &str,
        money: &Money,
    ) -> Result<Value, Error> {
        let source = EnrollmentSource::from_options(session_id, token)?;
        let three_ds_id = three_ds_id.map_or_else(new_reference, str::to_string);

        self.inner
            .send_json(
                Method::PUT,
                Resource::ThreeDSecure {
                    three_ds_id: &three_ds_id,
                },
                &CheckEnrollmentRequest::new(&source, response_url, money),
            )
            .await
    }

    /// Submits the payer authentication response (PARes) returned by the card issuer.
    #[tracing::instrument(name = "Process ACS Result", skip(self, pa_res))]
    pub async fn process_acs_result(&self, three_ds_id: &str, pa_res: &str) -> Result<Value, Error> {
        self.inner
            .send_json(
                Method::POST,
                Resource::ThreeDSecure { three_ds_id },
                &ProcessAcsResultRequest::new(pa_res),
            )
            .await
    }

    /// Gets the result of a 3-D Secure authentication.
    #[tracing::instrument(name = "Retrieve 3DS Result", skip(self))]
    pub async fn retrieve_result(&self, three_ds_id: &str) -> Result<Value, Error> {
        self.inner
            .send_empty(Method::GET, Resource::ThreeDSecure { three_ds_id })
            .await
    }
}

use crate::{
    apis::{
        orders::{
            AuthorizeRequest, CaptureRequest, PayRequest, RefundRequest, VerifyRequest,
            VoidRequest,
        },
        CardDetails, GatewayClientInner, Money, OrderTransactionKey, Resource,
    },
    Error,
};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Gateway order and transaction APIs client.
///
/// Financial operations are sent as `PUT` requests on the transaction
/// identified by an [`OrderTransactionKey`](crate::apis::OrderTransactionKey).
#[derive(Clone, Debug)]
pub struct OrdersApi {
    pub(crate) inner: Arc<GatewayClientInner>,
}

impl OrdersApi {
    pub(crate) fn new(inner: Arc<GatewayClientInner>) -> Self {
        Self { inner }
    }

    async fn put_transaction<B: Serialize>(
        &self,
        key: &OrderTransactionKey,
        body: &B,
    ) -> Result<Value, Error> {
        self.inner
            .send_json(
                Method::PUT,
                Resource::Transaction {
                    order_id: &key.order_id,
                    transaction_id: &key.transaction_id,
                },
                body,
            )
            .await
    }

    /// Authorizes the card held by a session.
    #[tracing::instrument(
        name = "Authorize",
        skip(self, key, money, session_id),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn authorize(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        session_id: &str,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &AuthorizeRequest::with_session(money, session_id))
            .await
    }

    /// Authorizes a stored token.
    #[tracing::instrument(
        name = "Authorize with Token",
        skip(self, key, money, token),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn authorize_with_token(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        token: &str,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &AuthorizeRequest::with_token(money, token))
            .await
    }

    /// Authorizes an order after a 3-D Secure authentication.
    ///
    /// The source of funds sent to the gateway is the placeholder card configured with
    /// [`with_three_ds_placeholder_card`](crate::client::GatewayClientBuilder::with_three_ds_placeholder_card),
    /// not the card the payer authenticated with.
    #[tracing::instrument(
        name = "Authorize with 3DS",
        skip(self, key, money),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn authorize_with_3ds(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        three_ds_id: &str,
    ) -> Result<Value, Error> {
        let req =
            AuthorizeRequest::with_3ds(money, three_ds_id, &self.inner.three_ds_placeholder_card);

        self.put_transaction(key, &req).await
    }

    /// Captures funds previously authorized.
    #[tracing::instrument(
        name = "Capture",
        skip(self, key, money),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn capture(&self, key: &OrderTransactionKey, money: &Money) -> Result<Value, Error> {
        self.put_transaction(key, &CaptureRequest::new(money)).await
    }

    /// Authorizes and captures the card held by a session in a single operation.
    #[tracing::instrument(
        name = "Pay",
        skip(self, key, money, session_id),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn pay(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        session_id: &str,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &PayRequest::with_session(money, session_id))
            .await
    }

    /// Pays with a stored token.
    #[tracing::instrument(
        name = "Pay with Token",
        skip(self, key, money, token),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn pay_with_token(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        token: &str,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &PayRequest::with_token(money, token))
            .await
    }

    /// Pays with a stored token after a 3-D Secure authentication.
    #[tracing::instrument(
        name = "Pay with 3DS",
        skip(self, key, money, token),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn pay_with_3ds(
        &self,
        key: &OrderTransactionKey,
        money: &Money,
        three_ds_id: &str,
        token: &str,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &PayRequest::with_3ds(money, three_ds_id, token))
            .await
    }

    /// Refunds a captured amount.
    ///
    /// The transaction id in `key` is sent as transaction reference.
    #[tracing::instrument(
        name = "Refund",
        skip(self, key, money),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn refund(&self, key: &OrderTransactionKey, money: &Money) -> Result<Value, Error> {
        self.put_transaction(key, &RefundRequest::new(key, money))
            .await
    }

    /// Gets the details of an order, including all of its transactions.
    #[tracing::instrument(name = "Retrieve Order", skip(self))]
    pub async fn retrieve_order(&self, order_id: &str) -> Result<Value, Error> {
        self.inner
            .send_empty(Method::GET, Resource::Order { order_id })
            .await
    }

    /// Gets the details of a single transaction.
    #[tracing::instrument(
        name = "Retrieve Transaction",
        skip(self, key),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn retrieve_transaction(&self, key: &OrderTransactionKey) -> Result<Value, Error> {
        self.inner
            .send_empty(
                Method::GET,
                Resource::Transaction {
                    order_id: &key.order_id,
                    transaction_id: &key.transaction_id,
                },
            )
            .await
    }

    /// Verifies a card without moving funds.
    ///
    /// The order currency is the one configured with
    /// [`with_verify_currency`](crate::client::GatewayClientBuilder::with_verify_currency).
    ///
    /// The card must carry a security code.
    #[tracing::instrument(
        name = "Verify",
        skip(self, key, card),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn verify(&self, key: &OrderTransactionKey, card: &CardDetails) -> Result<Value, Error> {
        if card.security_code.is_none() {
            return Err(Error::InvalidArgument(
                "card verification requires a security code".into(),
            ));
        }

        self.put_transaction(key, &VerifyRequest::new(card, &self.inner.verify_currency))
            .await
    }

    /// Voids a previous transaction of the same order.
    #[tracing::instrument(
        name = "Void",
        skip(self, key),
        fields(order_id = %key.order_id, transaction_id = %key.transaction_id)
    )]
    pub async fn void(
        &self,
        key: &OrderTransactionKey,
        target_transaction_id: &str,
        amount: Decimal,
    ) -> Result<Value, Error> {
        self.put_transaction(key, &VoidRequest::new(key, target_transaction_id, amount))
            .await
    }
}

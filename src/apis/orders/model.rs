use crate::apis::{
    ApiOperation, CardDetails, Money, OrderSection, OrderTransactionKey, PlaceholderCard,
    ProvidedCard, SessionSection, SourceOfFunds, TransactionSection,
};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub api_operation: ApiOperation,
    pub order: OrderSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionSection>,
    #[serde(rename = "3DSecureId", skip_serializing_if = "Option::is_none")]
    pub three_d_secure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<SourceOfFunds>,
}

impl AuthorizeRequest {
    /// Authorizes the card held by a session.
    pub fn with_session(money: &Money, session_id: &str) -> Self {
        Self {
            api_operation: ApiOperation::Authorize,
            order: OrderSection::from_money(money),
            transaction: None,
            session: Some(SessionSection::new(session_id)),
            three_d_secure_id: None,
            source_of_funds: None,
        }
    }

    /// Authorizes a stored token. Fresh order and transaction references are generated.
    pub fn with_token(money: &Money, token: &str) -> Self {
        Self {
            api_operation: ApiOperation::Authorize,
            order: OrderSection::from_money(money).with_fresh_reference(),
            transaction: Some(TransactionSection::fresh_reference()),
            session: None,
            three_d_secure_id: None,
            source_of_funds: Some(SourceOfFunds::token(token)),
        }
    }

    /// Authorizes after a 3-D Secure authentication.
    ///
    /// The gateway is sent `placeholder` as source of funds rather than the
    /// session or token the payer authenticated with.
    pub fn with_3ds(money: &Money, three_ds_id: &str, placeholder: &PlaceholderCard) -> Self {
        Self {
            api_operation: ApiOperation::Authorize,
            order: OrderSection::from_money(money),
            transaction: None,
            session: None,
            three_d_secure_id: Some(three_ds_id.to_string()),
            source_of_funds: Some(SourceOfFunds::card(ProvidedCard::placeholder(placeholder))),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub api_operation: ApiOperation,
    pub transaction: TransactionSection,
}

impl CaptureRequest {
    pub fn new(money: &Money) -> Self {
        Self {
            api_operation: ApiOperation::Capture,
            transaction: TransactionSection {
                amount: Some(money.amount),
                currency: Some(money.currency.clone()),
                ..Default::default()
            },
        }
    }
}

/// Body of a `PAY` operation.
///
/// Every constructor generates two new, independent random references
/// for `order.reference` and `transaction.reference`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub api_operation: ApiOperation,
    pub order: OrderSection,
    pub transaction: TransactionSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionSection>,
    #[serde(rename = "3DSecureId", skip_serializing_if = "Option::is_none")]
    pub three_d_secure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<SourceOfFunds>,
}

impl PayRequest {
    fn base(money: &Money) -> Self {
        Self {
            api_operation: ApiOperation::Pay,
            order: OrderSection::from_money(money).with_fresh_reference(),
            transaction: TransactionSection::fresh_reference(),
            session: None,
            three_d_secure_id: None,
            source_of_funds: None,
        }
    }

    pub fn with_session(money: &Money, session_id: &str) -> Self {
        Self {
            session: Some(SessionSection::new(session_id)),
            ..Self::base(money)
        }
    }

    pub fn with_token(money: &Money, token: &str) -> Self {
        Self {
            source_of_funds: Some(SourceOfFunds::token(token)),
            ..Self::base(money)
        }
    }

    pub fn with_3ds(money: &Money, three_ds_id: &str, token: &str) -> Self {
        Self {
            three_d_secure_id: Some(three_ds_id.to_string()),
            source_of_funds: Some(SourceOfFunds::token(token)),
            ..Self::base(money)
        }
    }
}

/// Body of a `REFUND` operation.
///
/// The caller's transaction id is used as transaction reference, so the body
/// is the same every time it is built from the same arguments.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub api_operation: ApiOperation,
    pub transaction: TransactionSection,
}

impl RefundRequest {
    pub fn new(key: &OrderTransactionKey, money: &Money) -> Self {
        Self {
            api_operation: ApiOperation::Refund,
            transaction: TransactionSection {
                amount: Some(money.amount),
                currency: Some(money.currency.clone()),
                reference: Some(key.transaction_id.clone()),
                target_transaction_id: None,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub api_operation: ApiOperation,
    pub order: OrderSection,
    pub source_of_funds: SourceOfFunds,
}

impl VerifyRequest {
    /// Verifies a card. The order carries a currency only, no amount.
    pub fn new(card: &CardDetails, currency: &str) -> Self {
        Self {
            api_operation: ApiOperation::Verify,
            order: OrderSection {
                currency: Some(currency.to_string()),
                ..Default::default()
            },
            source_of_funds: SourceOfFunds::card(
                ProvidedCard::number_and_expiry(card).with_security_code(card),
            ),
        }
    }
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoidRequest {
    pub api_operation: ApiOperation,
    pub transaction: TransactionSection,
    pub order: OrderSection,
}

impl VoidRequest {
    pub fn new(key: &OrderTransactionKey, target_transaction_id: &str, amount: Decimal) -> Self {
        Self {
            api_operation: ApiOperation::Void,
            transaction: TransactionSection {
                target_transaction_id: Some(target_transaction_id.to_string()),
                reference: Some(key.transaction_id.clone()),
                ..Default::default()
            },
            order: OrderSection {
                amount: Some(amount),
                ..Default::default()
            },
        }
    }
}

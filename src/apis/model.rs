//! Value objects and body fragments shared by all the gateway APIs.

use derive_builder::Builder;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// Used for the API password, card numbers and security codes.
///
/// ```rust
/// # use mpgs_rust::apis::Sensitive;
/// let password = Sensitive::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", password).contains("supersecret"));
///
/// // But it's sent as-is when serialized
/// let serialized = serde_json::to_string(&password).unwrap();
/// assert_eq!(serialized, "\"supersecret\"");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Sensitive(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Sensitive {
    /// Wraps a secret string in a new `Sensitive`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Sensitive
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Sensitive::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}

/// An amount in a given currency.
///
/// Neither the amount nor the currency are validated or reformatted:
/// the amount is sent with the same scale it was built with (`10.00` stays `"10.00"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Identifies a single financial transaction within an order.
///
/// Both identifiers are chosen by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderTransactionKey {
    pub order_id: String,
    pub transaction_id: String,
}

impl OrderTransactionKey {
    pub fn new(order_id: impl Into<String>, transaction_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            transaction_id: transaction_id.into(),
        }
    }
}

/// Raw card details.
///
/// ```rust
/// # use mpgs_rust::apis::CardDetailsBuilder;
/// let card = CardDetailsBuilder::default()
///     .number("5123450000000008")
///     .expiry_month("05")
///     .expiry_year("21")
///     .security_code("100")
///     .build()
///     .unwrap();
///
/// assert_eq!(card.name_on_card, None);
/// ```
#[derive(Deserialize, Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct CardDetails {
    pub number: Sensitive,
    pub expiry_month: String,
    pub expiry_year: String,
    #[builder(default, setter(into, strip_option))]
    pub security_code: Option<Sensitive>,
    #[builder(default, setter(into, strip_option))]
    pub name_on_card: Option<String>,
}

/// Fixed card used as source of funds when authorizing a 3-D Secure authenticated order.
///
/// The gateway is sent this card instead of the session the payer authenticated with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCard {
    pub name_on_card: String,
    pub number: String,
}

impl PlaceholderCard {
    pub fn new(name_on_card: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name_on_card: name_on_card.into(),
            number: number.into(),
        }
    }
}

/// Operation requested in a body, serialized in the `apiOperation` field.
#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ApiOperation {
    #[serde(rename = "CHECK_3DS_ENROLLMENT")]
    Check3dsEnrollment,
    #[serde(rename = "PROCESS_ACS_RESULT")]
    ProcessAcsResult,
    #[serde(rename = "AUTHORIZE")]
    Authorize,
    #[serde(rename = "CAPTURE")]
    Capture,
    #[serde(rename = "PAY")]
    Pay,
    #[serde(rename = "REFUND")]
    Refund,
    #[serde(rename = "VERIFY")]
    Verify,
    #[serde(rename = "VOID")]
    Void,
}

/// The `order` section of a body.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl OrderSection {
    pub(crate) fn from_money(money: &Money) -> Self {
        Self {
            amount: Some(money.amount),
            currency: Some(money.currency.clone()),
            reference: None,
        }
    }

    pub(crate) fn with_fresh_reference(self) -> Self {
        Self {
            reference: Some(new_reference()),
            ..self
        }
    }
}

/// The `transaction` section of a body.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_transaction_id: Option<String>,
}

impl TransactionSection {
    pub(crate) fn fresh_reference() -> Self {
        Self {
            reference: Some(new_reference()),
            ..Default::default()
        }
    }
}

/// The `session` section of a body.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct SessionSection {
    pub id: String,
}

impl SessionSection {
    pub(crate) fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceOfFundsType {
    #[serde(rename = "CARD")]
    Card,
}

/// The `sourceOfFunds` section of a body: either a stored token or a provided card.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SourceOfFunds {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceOfFundsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided: Option<Provided>,
}

impl SourceOfFunds {
    pub(crate) fn token(token: &str) -> Self {
        Self {
            kind: None,
            token: Some(token.to_string()),
            provided: None,
        }
    }

    pub(crate) fn card(card: ProvidedCard) -> Self {
        Self {
            kind: Some(SourceOfFundsType::Card),
            token: None,
            provided: Some(Provided { card }),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Provided {
    pub card: ProvidedCard,
}

/// Card details as they are laid out in the `sourceOfFunds.provided.card` section.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProvidedCard {
    pub number: Sensitive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<CardExpiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<Sensitive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_on_card: Option<String>,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct CardExpiry {
    pub month: String,
    pub year: String,
}

impl ProvidedCard {
    /// Only number and expiry date of the given card.
    pub(crate) fn number_and_expiry(card: &CardDetails) -> Self {
        Self {
            number: card.number.clone(),
            expiry: Some(CardExpiry {
                month: card.expiry_month.clone(),
                year: card.expiry_year.clone(),
            }),
            security_code: None,
            name_on_card: None,
        }
    }

    pub(crate) fn with_security_code(self, card: &CardDetails) -> Self {
        Self {
            security_code: card.security_code.clone(),
            ..self
        }
    }

    pub(crate) fn with_name_on_card(self, card: &CardDetails) -> Self {
        Self {
            name_on_card: card.name_on_card.clone(),
            ..self
        }
    }

    pub(crate) fn placeholder(card: &PlaceholderCard) -> Self {
        Self {
            number: Sensitive::new(card.number.as_str()),
            expiry: None,
            security_code: None,
            name_on_card: Some(card.name_on_card.clone()),
        }
    }
}

/// Generates a new random reference sent to the gateway as an idempotency hint.
pub(crate) fn new_reference() -> String {
    Uuid::new_v4().to_string()
}

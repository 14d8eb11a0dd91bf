use crate::{apis::SessionSection, Error};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CreateTokenRequest {
    pub session: SessionSection,
}

impl CreateTokenRequest {
    pub fn new(session_id: &str) -> Self {
        Self {
            session: SessionSection::new(session_id),
        }
    }
}

/// Token search document.
///
/// The gateway expects the `query` field to hold a JSON document encoded as a string.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct SearchTokensRequest {
    pub query: String,
}

impl SearchTokensRequest {
    /// Searches the tokens of the given card number.
    ///
    /// ```rust
    /// # use mpgs_rust::apis::tokens::SearchTokensRequest;
    /// let req = SearchTokensRequest::by_card_number("4111111111111111").unwrap();
    ///
    /// assert_eq!(
    ///     req.query,
    ///     r#"{"EQ": ["sourceOfFunds.provided.card.number", "4111111111111111"]}"#
    /// );
    /// ```
    pub fn by_card_number(card_number: &str) -> Result<Self, Error> {
        // The gateway matches on this exact layout, separators included
        let query = format!(
            r#"{{"EQ": ["sourceOfFunds.provided.card.number", {}]}}"#,
            serde_json::to_string(card_number)?
        );

        Ok(Self { query })
    }
}

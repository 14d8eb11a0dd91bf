use crate::apis::{CardDetails, ProvidedCard, SourceOfFunds};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    pub source_of_funds: SourceOfFunds,
}

impl UpdateSessionRequest {
    /// Stores the card in a session.
    ///
    /// Security code and name on card are only included when `include_security_code` is set.
    pub fn new(card: &CardDetails, include_security_code: bool) -> Self {
        let mut provided = ProvidedCard::number_and_expiry(card);
        if include_security_code {
            provided = provided.with_security_code(card).with_name_on_card(card);
        }

        Self {
            source_of_funds: SourceOfFunds::card(provided),
        }
    }
}

use crate::{
    apis::{ApiOperation, Money, OrderSection, SessionSection, SourceOfFunds},
    Error,
};
use serde::Serialize;

/// Payment instrument whose 3-D Secure enrollment is checked.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EnrollmentSource {
    /// Card details previously stored in a session.
    Session(String),
    /// Stored payment instrument.
    Token(String),
}

impl EnrollmentSource {
    /// Picks the source from a pair of optional identifiers.
    ///
    /// Exactly one of them must be set.
    pub fn from_options(session_id: Option<&str>, token: Option<&str>) -> Result<Self, Error> {
        match (session_id, token) {
            (Some(session_id), None) => Ok(EnrollmentSource::Session(session_id.to_string())),
            (None, Some(token)) => Ok(EnrollmentSource::Token(token.to_string())),
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "either a session id or a token must be provided, not both".into(),
            )),
            (None, None) => Err(Error::InvalidArgument(
                "a session id or a token must be provided".into(),
            )),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PageGenerationMode {
    #[serde(rename = "CUSTOMIZED")]
    Customized,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckEnrollmentRequest {
    pub api_operation: ApiOperation,
    #[serde(rename = "3DSecure")]
    pub three_d_secure: EnrollmentDetails,
    pub order: OrderSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<SourceOfFunds>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetails {
    pub authentication_redirect: AuthenticationRedirect,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRedirect {
    pub response_url: String,
    pub page_generation_mode: PageGenerationMode,
}

impl CheckEnrollmentRequest {
    pub fn new(source: &EnrollmentSource, response_url: &str, money: &Money) -> Self {
        let (session, source_of_funds) = match source {
            EnrollmentSource::Session(session_id) => (Some(SessionSection::new(session_id)), None),
            EnrollmentSource::Token(token) => (None, Some(SourceOfFunds::token(token))),
        };

        Self {
            api_operation: ApiOperation::Check3dsEnrollment,
            three_d_secure: EnrollmentDetails {
                authentication_redirect: AuthenticationRedirect {
                    response_url: response_url.to_string(),
                    page_generation_mode: PageGenerationMode::Customized,
                },
            },
            order: OrderSection::from_money(money),
            session,
            source_of_funds,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAcsResultRequest {
    pub api_operation: ApiOperation,
    #[serde(rename = "3DSecure")]
    pub three_d_secure: AcsResult,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AcsResult {
    pub pa_res: String,
}

impl ProcessAcsResultRequest {
    pub fn new(pa_res: &str) -> Self {
        Self {
            api_operation: ApiOperation::ProcessAcsResult,
            three_d_secure: AcsResult {
                pa_res: pa_res.to_string(),
            },
        }
    }
}

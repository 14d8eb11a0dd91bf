use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use serde_json::Value;
use task_local_extensions::Extensions;

/// Reqwest middleware which turns non-successful gateway responses
/// into [`Error::ApiError`](crate::error::Error)s.
///
/// The gateway payload is kept verbatim.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status().as_u16();

    let bytes = response.bytes().await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    Ok(ApiError { status, body })
}

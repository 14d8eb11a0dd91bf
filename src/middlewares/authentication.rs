use crate::{apis::Sensitive, Error};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the merchant basic-auth credentials into outgoing HTTP requests.
///
/// The header value is encoded once, when the middleware is built.
pub struct BasicAuthMiddleware {
    header_value: HeaderValue,
}

impl BasicAuthMiddleware {
    pub fn new(username: &str, password: &Sensitive) -> Result<Self, Error> {
        let credentials = STANDARD.encode(format!("{}:{}", username, password.expose_secret()));

        let mut header_value = HeaderValue::from_str(&format!("Basic {}", credentials))
            .map_err(|e| Error::Configuration(format!("invalid credentials: {}", e)))?;
        header_value.set_sensitive(true);

        Ok(Self { header_value })
    }
}

#[async_trait]
impl Middleware for BasicAuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.header_value.clone());

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}

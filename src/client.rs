//! Module containing the main gateway API client.

use crate::{
    apis::{
        orders::OrdersApi, sessions::SessionsApi, three_ds::ThreeDSecureApi, tokens::TokensApi,
        GatewayClientInner, PlaceholderCard, Sensitive,
    },
    common::{
        DEFAULT_API_VERSION, DEFAULT_ASIA_PACIFIC_GATEWAY_URL, DEFAULT_CHANNEL_NAME,
        DEFAULT_EUROPE_GATEWAY_URL, DEFAULT_NORTH_AMERICA_GATEWAY_URL,
        DEFAULT_PLACEHOLDER_CARD_NAME, DEFAULT_PLACEHOLDER_CARD_NUMBER, DEFAULT_TEST_GATEWAY_URL,
        DEFAULT_TIMEOUT_SECS, DEFAULT_VERIFY_CURRENCY, MERCHANT_USERNAME_PREFIX,
    },
    middlewares::{
        authentication::BasicAuthMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use serde::Deserialize;
use std::{sync::Arc, time::Duration};

/// Client for the gateway REST APIs of a single merchant.
///
/// Cloning a `GatewayClient` is cheap: all the clones share the same
/// connection pool and configuration, and can be used concurrently.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// 3-D Secure APIs client.
    pub three_ds: ThreeDSecureApi,
    /// Session APIs client.
    pub sessions: SessionsApi,
    /// Tokenization APIs client.
    pub tokens: TokensApi,
    /// Order and transaction APIs client.
    pub orders: OrdersApi,
}

impl GatewayClient {
    /// Builds a new [`GatewayClient`](crate::client::GatewayClient) with the default configuration.
    pub fn new(
        merchant_id: impl Into<String>,
        api_password: impl Into<Sensitive>,
    ) -> Result<GatewayClient, Error> {
        GatewayClientBuilder::new(merchant_id, api_password).build()
    }

    /// Returns a new builder to configure a new [`GatewayClient`](crate::client::GatewayClient).
    pub fn builder(
        merchant_id: impl Into<String>,
        api_password: impl Into<Sensitive>,
    ) -> GatewayClientBuilder {
        GatewayClientBuilder::new(merchant_id, api_password)
    }

    /// Builds a new [`GatewayClient`](crate::client::GatewayClient) from a deserialized configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<GatewayClient, Error> {
        let mut builder = GatewayClientBuilder::new(
            config.merchant_id.clone(),
            config.api_password.clone(),
        )
        .with_api_version(config.api_version)
        .with_channel_name(config.channel_name.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs))
        .with_verify_currency(config.verify_currency.clone())
        .with_three_ds_placeholder_card(config.three_ds_placeholder_card.clone());

        if let Some(ref gateway_url) = config.gateway_url {
            builder = builder.with_environment(Environment::from_single_url(gateway_url));
        }

        builder.build()
    }
}

/// Gateway environment to connect to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Environment {
    /// Asia Pacific production gateway.
    AsiaPacific,
    /// Europe production gateway.
    Europe,
    /// North America production gateway.
    NorthAmerica,
    /// Test gateway.
    Test,
    /// Custom environment, e.g. a mock gateway.
    Custom { gateway_url: Url },
}

impl Environment {
    /// Builds a custom environment which sends every request to the given base URL.
    ///
    /// Request paths are appended to the full base path, e.g. `http://host/proxy`
    /// receives requests on `/proxy/api/rest/...`.
    pub fn from_single_url(url: &Url) -> Self {
        Self::Custom {
            gateway_url: url.clone(),
        }
    }

    /// Base URL of the gateway REST APIs.
    pub fn gateway_url(&self) -> Result<Url, Error> {
        let url = match self {
            Environment::AsiaPacific => Url::parse(DEFAULT_ASIA_PACIFIC_GATEWAY_URL)?,
            Environment::Europe => Url::parse(DEFAULT_EUROPE_GATEWAY_URL)?,
            Environment::NorthAmerica => Url::parse(DEFAULT_NORTH_AMERICA_GATEWAY_URL)?,
            Environment::Test => Url::parse(DEFAULT_TEST_GATEWAY_URL)?,
            Environment::Custom { gateway_url } => with_trailing_slash(gateway_url),
        };

        Ok(url)
    }
}

// `Url::join` replaces the last path segment unless the base ends with a slash
fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl Default for Environment {
    fn default() -> Self {
        Environment::AsiaPacific
    }
}

/// Serializable client configuration, e.g. loaded with the `config` crate.
///
/// ```rust
/// # use mpgs_rust::client::GatewayConfig;
/// let config: GatewayConfig = serde_json::from_str(r#"{
///     "merchant_id": "TESTMERCH",
///     "api_password": "secret"
/// }"#).unwrap();
///
/// assert_eq!(config.api_version, 53);
/// assert_eq!(config.channel_name, "MPGS");
/// assert_eq!(config.timeout_secs, 20);
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct GatewayConfig {
    pub merchant_id: String,
    pub api_password: Sensitive,
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// Overrides the default (Asia Pacific) gateway URL.
    #[serde(default)]
    pub gateway_url: Option<Url>,
    #[serde(default = "default_channel_name")]
    pub channel_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_verify_currency")]
    pub verify_currency: String,
    /// Card sent as source of funds when authorizing after 3-D Secure authentication.
    #[serde(default = "default_three_ds_placeholder_card")]
    pub three_ds_placeholder_card: PlaceholderCard,
}

fn default_api_version() -> u32 {
    DEFAULT_API_VERSION
}

fn default_channel_name() -> String {
    DEFAULT_CHANNEL_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_verify_currency() -> String {
    DEFAULT_VERIFY_CURRENCY.to_string()
}

fn default_three_ds_placeholder_card() -> PlaceholderCard {
    PlaceholderCard::new(DEFAULT_PLACEHOLDER_CARD_NAME, DEFAULT_PLACEHOLDER_CARD_NUMBER)
}

/// Builder for a [`GatewayClient`](crate::client::GatewayClient).
#[derive(Debug)]
pub struct GatewayClientBuilder {
    client: Option<reqwest::Client>,
    merchant_id: String,
    api_password: Sensitive,
    api_version: u32,
    channel_name: String,
    timeout: Duration,
    environment: Environment,
    verify_currency: String,
    three_ds_placeholder_card: PlaceholderCard,
}

impl GatewayClientBuilder {
    /// Creates a new builder to configure a [`GatewayClient`](crate::client::GatewayClient).
    pub fn new(merchant_id: impl Into<String>, api_password: impl Into<Sensitive>) -> Self {
        Self {
            client: None,
            merchant_id: merchant_id.into(),
            api_password: api_password.into(),
            api_version: DEFAULT_API_VERSION,
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            environment: Environment::default(),
            verify_currency: DEFAULT_VERIFY_CURRENCY.to_string(),
            three_ds_placeholder_card: default_three_ds_placeholder_card(),
        }
    }

    /// Consumes the builder and builds a new [`GatewayClient`](crate::client::GatewayClient).
    ///
    /// No request is sent to the gateway.
    pub fn build(self) -> Result<GatewayClient, Error> {
        if self.merchant_id.trim().is_empty() {
            return Err(Error::Configuration("merchant id must not be empty".into()));
        }
        if self.api_password.expose_secret().is_empty() {
            return Err(Error::Configuration("API password must not be empty".into()));
        }
        if self.channel_name.trim().is_empty() {
            return Err(Error::Configuration("channel name must not be empty".into()));
        }

        // Reuse the caller's connection pool, or build one honoring the timeout
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?,
        };

        let auth_middleware = BasicAuthMiddleware::new(
            &format!("{}{}", MERCHANT_USERNAME_PREFIX, self.merchant_id),
            &self.api_password,
        )?;

        let inner = Arc::new(GatewayClientInner {
            client: build_client_with_middleware(client, auth_middleware),
            environment: self.environment,
            merchant_id: self.merchant_id,
            api_version: self.api_version,
            channel_name: self.channel_name,
            timeout: self.timeout,
            verify_currency: self.verify_currency,
            three_ds_placeholder_card: self.three_ds_placeholder_card,
        });

        Ok(GatewayClient {
            three_ds: ThreeDSecureApi::new(inner.clone()),
            sessions: SessionsApi::new(inner.clone()),
            tokens: TokensApi::new(inner.clone()),
            orders: OrdersApi::new(inner),
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use as connection pool.
    ///
    /// The timeout configured with [`with_timeout`](Self::with_timeout) is still applied
    /// to every request.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the REST API version used in every request path.
    ///
    /// Defaults to: `53`
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Sets the channel name recorded in the logs of every request.
    ///
    /// Defaults to: `MPGS`
    pub fn with_channel_name(mut self, channel_name: impl Into<String>) -> Self {
        self.channel_name = channel_name.into();
        self
    }

    /// Sets the timeout of every request, including requests sent through a client
    /// provided with [`with_http_client`](Self::with_http_client).
    ///
    /// Defaults to: 20 seconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the environment to which requests are sent.
    ///
    /// Defaults to: [`Environment::AsiaPacific`]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the currency sent in the `order.currency` field of card verifications.
    ///
    /// Defaults to: `SGDD`, which is not an ISO 4217 code. The default is kept for
    /// compatibility with existing integrations.
    pub fn with_verify_currency(mut self, currency: impl Into<String>) -> Self {
        self.verify_currency = currency.into();
        self
    }

    /// Sets the card sent as source of funds when authorizing after 3-D Secure authentication.
    ///
    /// Defaults to: name `xx`, number `512345xxxxxx0008`.
    pub fn with_three_ds_placeholder_card(mut self, card: PlaceholderCard) -> Self {
        self.three_ds_placeholder_card = card;
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: BasicAuthMiddleware,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware)
        .with(InjectUserAgentMiddleware::new())
        .with(ErrorHandlingMiddleware)
        .with(auth_middleware)
        .build()
}

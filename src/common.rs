// Default URLs
pub static DEFAULT_ASIA_PACIFIC_GATEWAY_URL: &str = "https://ap-gateway.mastercard.com";
pub static DEFAULT_EUROPE_GATEWAY_URL: &str = "https://eu-gateway.mastercard.com";
pub static DEFAULT_NORTH_AMERICA_GATEWAY_URL: &str = "https://na-gateway.mastercard.com";
pub static DEFAULT_TEST_GATEWAY_URL: &str = "https://test-gateway.mastercard.com";

// Client defaults
pub const DEFAULT_API_VERSION: u32 = 53;
pub static DEFAULT_CHANNEL_NAME: &str = "MPGS";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

// Gateway quirks, see `GatewayClientBuilder`
pub static DEFAULT_VERIFY_CURRENCY: &str = "SGDD";
pub static DEFAULT_PLACEHOLDER_CARD_NAME: &str = "xx";
pub static DEFAULT_PLACEHOLDER_CARD_NUMBER: &str = "512345xxxxxx0008";

// Basic auth
pub static MERCHANT_USERNAME_PREFIX: &str = "merchant.";

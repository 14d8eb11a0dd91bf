use crate::common::mock_gateway::MockGateway;
use mpgs_rust::{client::Environment, GatewayClient};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

pub struct TestContext {
    pub client: GatewayClient,
    pub gateway: MockGateway,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::start_with_version(53).await
    }

    pub async fn start_with_version(api_version: u32) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        // Generate a new set of random credentials for this specific test
        let merchant_id = format!("TEST{}", Uuid::new_v4().simple()).to_uppercase();
        let api_password = Uuid::new_v4().to_string();

        let gateway = MockGateway::start(&merchant_id, &api_password, api_version).await;

        // Configure a new GatewayClient to point to the mock gateway
        let client = GatewayClient::builder(merchant_id, api_password)
            .with_api_version(api_version)
            .with_channel_name("MPGS-TEST")
            .with_timeout(Duration::from_secs(5))
            .with_environment(Environment::from_single_url(
                &Url::parse(&gateway.uri()).unwrap(),
            ))
            .build()
            .unwrap();

        Self { client, gateway }
    }
}

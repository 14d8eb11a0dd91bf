use crate::common::test_context::TestContext;
use futures::future::join_all;
use mpgs_rust::{
    apis::{Money, OrderTransactionKey},
    client::{Environment, GatewayConfig},
    Error, GatewayClient,
};
use serde_json::{json, Value};
use std::{
    collections::HashSet,
    time::{Duration, Instant},
};
use url::Url;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn client_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path(
            "/api/rest/version/61/merchant/CONFIGMERCH/order/O1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "O1" })))
        .expect(1)
        .mount(&server)
        .await;

    let toml = format!(
        r#"
        merchant_id = "CONFIGMERCH"
        api_password = "secret"
        api_version = 61
        gateway_url = "{}"
        "#,
        server.uri()
    );
    let config = config::Config::builder()
        .add_source(config::File::from_str(&toml, config::FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize::<GatewayConfig>()
        .unwrap();

    assert_eq!(config.channel_name, "MPGS");
    assert_eq!(config.timeout_secs, 20);
    assert_eq!(config.verify_currency, "SGDD");

    let client = GatewayClient::from_config(&config).unwrap();
    let res = client.orders.retrieve_order("O1").await.unwrap();

    assert_eq!(res["id"], "O1");
}

#[tokio::test]
async fn custom_api_version_is_used_in_paths() {
    let ctx = TestContext::start_with_version(45).await;

    ctx.gateway
        .expect(
            "POST",
            "session",
            None,
            ResponseTemplate::new(201).set_body_json(json!({
                "session": { "id": "SESSION0001" }
            })),
        )
        .await;

    ctx.client.sessions.create().await.unwrap();
}

#[tokio::test]
async fn gateway_errors_are_surfaced() {
    let ctx = TestContext::start().await;
    let error_body = json!({
        "error": {
            "cause": "INVALID_REQUEST",
            "explanation": "Value '-1.00' is invalid. Amount must be positive",
            "field": "order.amount"
        },
        "result": "ERROR"
    });

    ctx.gateway
        .expect(
            "PUT",
            "order/O1/transaction/T1",
            None,
            ResponseTemplate::new(400).set_body_json(error_body.clone()),
        )
        .await;

    let res = ctx
        .client
        .orders
        .pay(
            &OrderTransactionKey::new("O1", "T1"),
            &Money::new("-1.00".parse().unwrap(), "SGD"),
            "SESSION0001",
        )
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.body, error_body);
            assert_eq!(e.cause(), Some("INVALID_REQUEST"));
        }
        _ => panic!("Expected an ApiError"),
    }
}

#[tokio::test]
async fn invalid_identifiers_are_rejected_locally() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(ctx.gateway.server())
        .await;

    let res = ctx.client.orders.retrieve_order("").await;

    assert!(matches!(res, Err(Error::InvalidArgument(_))));
    assert_eq!(ctx.gateway.received_request_count().await, 0);
}

#[tokio::test]
async fn timeout_applies_to_a_custom_http_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = GatewayClient::builder("TESTMERCH", "secret")
        .with_http_client(reqwest::Client::new())
        .with_timeout(Duration::from_millis(200))
        .with_environment(Environment::from_single_url(
            &Url::parse(&server.uri()).unwrap(),
        ))
        .build()
        .unwrap();

    let started = Instant::now();
    let res = client.orders.retrieve_order("O1").await;

    match res {
        Err(Error::HttpError(e)) => assert!(e.is_timeout()),
        _ => panic!("Expected a timeout"),
    }
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn custom_gateway_url_keeps_its_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path(
            "/proxy/api/rest/version/53/merchant/TESTMERCH/order/O1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "O1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GatewayClient::builder("TESTMERCH", "secret")
        .with_environment(Environment::from_single_url(
            &Url::parse(&format!("{}/proxy", server.uri())).unwrap(),
        ))
        .build()
        .unwrap();

    let res = client.orders.retrieve_order("O1").await.unwrap();

    assert_eq!(res["id"], "O1");
}

#[tokio::test]
async fn concurrent_payments_on_a_shared_client() {
    let ctx = TestContext::start().await;

    Mock::given(method("PUT"))
        .and(path_regex(r"/order/O[0-9]+/transaction/T1$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })))
        .expect(10)
        .mount(ctx.gateway.server())
        .await;

    let money = Money::new("1.00".parse().unwrap(), "SGD");
    let keys = (0..10)
        .map(|i| OrderTransactionKey::new(format!("O{}", i), "T1"))
        .collect::<Vec<_>>();

    let results = join_all(
        keys.iter()
            .map(|key| ctx.client.orders.pay(key, &money, "SESSION0001")),
    )
    .await;
    assert!(results.iter().all(Result::is_ok));

    // Every request carries its own pair of references
    let bodies = ctx.gateway.received_bodies().await;
    let references = bodies
        .iter()
        .flat_map(|body| {
            [
                body["order"]["reference"].clone(),
                body["transaction"]["reference"].clone(),
            ]
        })
        .filter_map(|reference| match reference {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect::<HashSet<_>>();
    assert_eq!(references.len(), 20);
}

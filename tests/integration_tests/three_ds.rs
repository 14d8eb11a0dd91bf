use crate::common::test_context::TestContext;
use mpgs_rust::{
    apis::{Money, OrderTransactionKey},
    Error,
};
use serde_json::json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn authenticate_then_authorize_and_capture() {
    let ctx = TestContext::start().await;
    let money = Money::new("100.00".parse().unwrap(), "SGD");

    ctx.gateway
        .expect(
            "PUT",
            "3DSecureId/3DS1",
            Some(json!({
                "apiOperation": "CHECK_3DS_ENROLLMENT",
                "order": { "amount": "100.00", "currency": "SGD" },
                "session": { "id": "SESSION0001" }
            })),
            ResponseTemplate::new(201).set_body_json(json!({
                "3DSecureId": "3DS1",
                "3DSecure": {
                    "summaryStatus": "CARD_ENROLLED",
                    "authenticationRedirect": { "customized": { "acsUrl": "https://acs.example" } }
                }
            })),
        )
        .await;
    ctx.gateway
        .expect(
            "POST",
            "3DSecureId/3DS1",
            Some(json!({
                "apiOperation": "PROCESS_ACS_RESULT",
                "3DSecure": { "paRes": "eJzVWFmzokgW" }
            })),
            ResponseTemplate::new(200).set_body_json(json!({
                "3DSecure": { "summaryStatus": "AUTHENTICATION_SUCCESSFUL" }
            })),
        )
        .await;
    ctx.gateway
        .expect(
            "GET",
            "3DSecureId/3DS1",
            None,
            ResponseTemplate::new(200).set_body_json(json!({
                "3DSecure": { "summaryStatus": "AUTHENTICATION_SUCCESSFUL" }
            })),
        )
        .await;
    ctx.gateway
        .expect(
            "PUT",
            "order/O1/transaction/T1",
            Some(json!({
                "apiOperation": "AUTHORIZE",
                "3DSecureId": "3DS1",
                "sourceOfFunds": {
                    "type": "CARD",
                    "provided": { "card": { "nameOnCard": "xx", "number": "512345xxxxxx0008" } }
                }
            })),
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })),
        )
        .await;
    ctx.gateway
        .expect(
            "PUT",
            "order/O1/transaction/T2",
            Some(json!({
                "apiOperation": "CAPTURE",
                "transaction": { "amount": "100.00", "currency": "SGD" }
            })),
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })),
        )
        .await;

    let enrollment = ctx
        .client
        .three_ds
        .check_enrollment(
            Some("3DS1"),
            Some("SESSION0001"),
            None,
            "https://merchant.example/3ds",
            &money,
        )
        .await
        .unwrap();
    assert_eq!(enrollment["3DSecure"]["summaryStatus"], "CARD_ENROLLED");

    ctx.client
        .three_ds
        .process_acs_result("3DS1", "eJzVWFmzokgW")
        .await
        .unwrap();

    let result = ctx.client.three_ds.retrieve_result("3DS1").await.unwrap();
    assert_eq!(
        result["3DSecure"]["summaryStatus"],
        "AUTHENTICATION_SUCCESSFUL"
    );

    ctx.client
        .orders
        .authorize_with_3ds(&OrderTransactionKey::new("O1", "T1"), &money, "3DS1")
        .await
        .unwrap();
    ctx.client
        .orders
        .capture(&OrderTransactionKey::new("O1", "T2"), &money)
        .await
        .unwrap();
}

#[tokio::test]
async fn enrollment_requires_exactly_one_source() {
    let ctx = TestContext::start().await;
    let money = Money::new("100.00".parse().unwrap(), "SGD");

    let both = ctx
        .client
        .three_ds
        .check_enrollment(
            Some("3DS1"),
            Some("SESSION0001"),
            Some("9999999999999999"),
            "https://merchant.example/3ds",
            &money,
        )
        .await;
    let neither = ctx
        .client
        .three_ds
        .check_enrollment(Some("3DS1"), None, None, "https://merchant.example/3ds", &money)
        .await;

    assert!(matches!(both, Err(Error::InvalidArgument(_))));
    assert!(matches!(neither, Err(Error::InvalidArgument(_))));
    assert_eq!(ctx.gateway.received_request_count().await, 0);
}

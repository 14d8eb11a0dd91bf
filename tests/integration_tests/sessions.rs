use crate::common::test_context::TestContext;
use mpgs_rust::apis::CardDetailsBuilder;
use serde_json::json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn create_update_and_retrieve_session() {
    let ctx = TestContext::start().await;

    ctx.gateway
        .expect(
            "POST",
            "session",
            Some(json!({})),
            ResponseTemplate::new(201).set_body_json(json!({
                "result": "SUCCESS",
                "session": { "id": "SESSION0001", "updateStatus": "NO_UPDATE" }
            })),
        )
        .await;
    ctx.gateway
        .expect(
            "PUT",
            "session/SESSION0001",
            Some(json!({
                "sourceOfFunds": {
                    "type": "CARD",
                    "provided": {
                        "card": {
                            "number": "5123450000000008",
                            "securityCode": "100",
                            "nameOnCard": "Some One",
                            "expiry": { "month": "05", "year": "21" }
                        }
                    }
                }
            })),
            ResponseTemplate::new(200).set_body_json(json!({
                "session": { "id": "SESSION0001", "updateStatus": "SUCCESS" }
            })),
        )
        .await;
    ctx.gateway
        .expect(
            "GET",
            "session/SESSION0001",
            None,
            ResponseTemplate::new(200).set_body_json(json!({
                "session": { "id": "SESSION0001", "updateStatus": "SUCCESS" },
                "sourceOfFunds": {
                    "provided": { "card": { "number": "512345xxxxxx0008" } }
                }
            })),
        )
        .await;

    // Create a session
    let session = ctx.client.sessions.create().await.unwrap();
    let session_id = session["session"]["id"].as_str().unwrap();

    // Store the card in it
    let card = CardDetailsBuilder::default()
        .number("5123450000000008")
        .expiry_month("05")
        .expiry_year("21")
        .security_code("100")
        .name_on_card("Some One")
        .build()
        .unwrap();
    let updated = ctx
        .client
        .sessions
        .update(session_id, &card, true)
        .await
        .unwrap();
    assert_eq!(updated["session"]["updateStatus"], "SUCCESS");

    // Retrieve it
    let retrieved = ctx.client.sessions.retrieve(session_id).await.unwrap();
    assert_eq!(
        retrieved["sourceOfFunds"]["provided"]["card"]["number"],
        "512345xxxxxx0008"
    );
}

#[tokio::test]
async fn update_session_without_security_code() {
    let ctx = TestContext::start().await;

    ctx.gateway
        .expect(
            "PUT",
            "session/SESSION0001",
            None,
            ResponseTemplate::new(200).set_body_json(json!({
                "session": { "id": "SESSION0001", "updateStatus": "SUCCESS" }
            })),
        )
        .await;

    let card = CardDetailsBuilder::default()
        .number("5123450000000008")
        .expiry_month("05")
        .expiry_year("21")
        .security_code("100")
        .name_on_card("Some One")
        .build()
        .unwrap();
    ctx.client
        .sessions
        .update("SESSION0001", &card, false)
        .await
        .unwrap();

    let bodies = ctx.gateway.received_bodies().await;
    let provided_card = &bodies[0]["sourceOfFunds"]["provided"]["card"];
    assert!(provided_card.get("securityCode").is_none());
    assert!(provided_card.get("nameOnCard").is_none());
    assert_eq!(provided_card["number"], "5123450000000008");
}

//! Card control toggles against the mock API.

mod support;

use axum::http::Method;
use serde_json::json;
use starling_client::{CardControl, CardControlParams, StarlingConfig};
use support::*;

#[tokio::test]
async fn test_every_toggle_puts_enabled_to_its_segment() {
    let routes = CardControl::ALL
        .iter()
        .map(|c| {
            Route::json(
                Method::PUT,
                format!("/api/v2/cards/{CARD_UID}/controls/{}", c.path_segment()),
                "",
            )
        })
        .collect();
    let server = MockServer::start(routes).await;
    let cards = server.client(StarlingConfig::new().with_access_token(TOKEN)).card;

    cards.update_card_lock(CardControlParams::new(CARD_UID, false)).await.unwrap();
    cards.update_card_atm(CardControlParams::new(CARD_UID, true)).await.unwrap();
    cards.update_card_online(CardControlParams::new(CARD_UID, false)).await.unwrap();
    cards
        .update_card_mobile_wallet(CardControlParams::new(CARD_UID, true))
        .await
        .unwrap();
    cards.update_card_gambling(CardControlParams::new(CARD_UID, false)).await.unwrap();
    cards.update_card_pos(CardControlParams::new(CARD_UID, true)).await.unwrap();
    cards
        .update_card_mag_stripe(CardControlParams::new(CARD_UID, false))
        .await
        .unwrap();

    let requests = server.requests();
    let segments: Vec<_> = requests
        .iter()
        .map(|r| r.path.rsplit('/').next().unwrap().to_string())
        .collect();
    assert_eq!(
        segments,
        [
            "enabled",
            "atm-enabled",
            "online-enabled",
            "mobile-wallet-enabled",
            "gambling-enabled",
            "pos-enabled",
            "mag-stripe-enabled",
        ]
    );
    for (i, request) in requests.iter().enumerate() {
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.json(), json!({"enabled": i % 2 == 1}));
    }
}

#[tokio::test]
async fn test_body_is_exactly_enabled() {
    let server = MockServer::start(vec![]).await;
    let starling = server.client(StarlingConfig::new().with_access_token(TOKEN));

    starling
        .card
        .update_card_control(CardControl::Lock, CardControlParams::new(CARD_UID, true))
        .await
        .unwrap();

    assert_eq!(server.single_request().text(), r#"{"enabled":true}"#);
}

//! Token defaulting and pass-through behaviour of the `Starling` facade.

mod support;

use axum::http::{Method, StatusCode};
use starling_client::{ClientError, ResponseExt, StarlingConfig, TokenParams};
use support::*;

#[tokio::test]
async fn test_configured_token_is_used_when_none_is_given() {
    let server = MockServer::start(vec![Route::json(Method::GET, "/api/v1/me", "{}")]).await;
    let starling = server.client(StarlingConfig::new().with_access_token("static-token"));

    starling.get_me(None).await.unwrap();

    assert_eq!(
        server.single_request().header("authorization"),
        Some("Bearer static-token")
    );
}

#[tokio::test]
async fn test_caller_token_wins() {
    let server = MockServer::start(vec![Route::json(Method::GET, "/api/v2/payees", "{}")]).await;
    let starling = server.client(StarlingConfig::new().with_access_token("static-token"));

    starling.get_payees(Some("caller-token")).await.unwrap();

    assert_eq!(
        server.single_request().header("authorization"),
        Some("Bearer caller-token")
    );
}

#[tokio::test]
async fn test_convenience_methods_hit_their_paths() {
    let server = MockServer::start(vec![]).await;
    let starling = server.client(StarlingConfig::new().with_access_token(TOKEN));

    starling.get_account_holder(None).await.unwrap();
    starling.get_addresses(None).await.unwrap();
    starling.get_cards(None).await.unwrap();
    starling.get_customer(None).await.unwrap();
    starling.get_contacts(None).await.unwrap();
    starling.get_token_identity(None).await.unwrap();
    starling.list_mandates(None).await.unwrap();

    let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/api/v2/account-holder",
            "/api/v2/addresses",
            "/api/v2/cards",
            "/api/v1/customers",
            "/api/v1/contacts",
            "/api/v2/identity/token",
            "/api/v2/direct-debit/mandates",
        ]
    );
}

#[tokio::test]
async fn test_response_ext_turns_errors_into_api_errors() {
    let server = MockServer::start(vec![
        Route::json(Method::GET, "/api/v2/accounts", r#"{"error":"invalid_token"}"#)
            .status(StatusCode::FORBIDDEN),
    ])
    .await;
    let starling = server.client(StarlingConfig::new().with_access_token(TOKEN));

    let response = starling.get_accounts(None).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let err = response.text_body().await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, r#"{"error":"invalid_token"}"#);
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_account_holder_and_identity_details() {
    let server = MockServer::start(vec![]).await;
    let starling = server.client(StarlingConfig::new().with_access_token(TOKEN));
    let token = TokenParams::new;

    starling.account_holder.get_account_holder_name(token()).await.unwrap();
    starling.account_holder.get_account_holder_individual(token()).await.unwrap();
    starling.account_holder.get_account_holder_joint(token()).await.unwrap();
    starling.account_holder.get_account_holder_business(token()).await.unwrap();
    starling
        .account_holder
        .get_account_holder_business_registered_address(token())
        .await
        .unwrap();
    starling
        .account_holder
        .get_account_holder_business_correspondence_address(token())
        .await
        .unwrap();
    starling.identity.get_authorising_individual(token()).await.unwrap();
    starling.who_am_i.get_me(token()).await.unwrap();

    let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/api/v2/account-holder/name",
            "/api/v2/account-holder/individual",
            "/api/v2/account-holder/joint",
            "/api/v2/account-holder/business",
            "/api/v2/account-holder/business/registered-address",
            "/api/v2/account-holder/business/correspondence-address",
            "/api/v2/identity/individual",
            "/api/v1/me",
        ]
    );
}

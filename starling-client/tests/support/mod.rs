//! In-process mock of the Starling API for integration tests.
//!
//! Every request is recorded, then answered from the route table; anything
//! without a route gets a 404 JSON error.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use starling_client::{Starling, StarlingConfig};
use tokio::net::TcpListener;

pub const TOKEN: &str = "0123456789";
pub const ACCOUNT_UID: &str = "b0b20c9d-3b6b-42f1-a7d0-e70d4538e0d9";
pub const CARD_UID: &str = "8b1d9a33-2f14-4c1e-bd5a-0d9fbc2e7a41";

pub const ACCOUNTS_JSON: &str = include_str!("../fixtures/v2-get-accounts.json");
pub const BALANCE_JSON: &str = include_str!("../fixtures/v2-get-balance.json");
pub const STATEMENT_CSV: &str = include_str!("../fixtures/v2-get-statement.csv");
pub const ACCESS_TOKEN_JSON: &str = include_str!("../fixtures/oauth-access-token.json");

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    path: String,
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
}

impl Route {
    pub fn json(method: Method, path: impl Into<String>, body: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            status: StatusCode::OK,
            content_type: "application/json",
            body,
        }
    }

    pub fn csv(path: impl Into<String>, body: &'static str) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            status: StatusCode::OK,
            content_type: "text/csv",
            body,
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let state = MockState {
            routes: Arc::new(routes),
            requests: Arc::default(),
        };
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// A facade pointed at this server for both the API and OAuth hosts.
    pub fn client(&self, config: StarlingConfig) -> Starling {
        Starling::new(
            config
                .with_api_url(&self.base_url)
                .with_oauth_url(&self.base_url),
        )
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received; fails if there were none or several.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    match state
        .routes
        .iter()
        .find(|r| r.method == method && r.path == path)
    {
        Some(route) => (
            route.status,
            [(header::CONTENT_TYPE, route.content_type)],
            route.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"not_found"}"#,
        )
            .into_response(),
    }
}

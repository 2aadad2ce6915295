//! OAuth token exchange against the OAuth host.

use reqwest::Response;
use serde_json::{Map, Value};
use starling_types::{Field, Primitive, Rule, Schema, TokenRequest};

use super::{ResourceContext, check};
use crate::error::ClientError;
use crate::http::form_headers;
use crate::request::ApiRequest;

const ACCESS_TOKEN_PATH: &str = "/oauth/access-token";

const CLIENT_ID: Field = Field::new("client_id", Rule::Required(Primitive::String));
const CLIENT_SECRET: Field = Field::new("client_secret", Rule::Required(Primitive::String));

const AUTHORIZATION_CODE: Schema = &[
    Field::new("code", Rule::Required(Primitive::String)),
    CLIENT_ID,
    CLIENT_SECRET,
    Field::new("redirect_uri", Rule::Required(Primitive::String)),
];
const REFRESH_TOKEN: Schema = &[
    Field::new("refresh_token", Rule::Required(Primitive::String)),
    CLIENT_ID,
    CLIENT_SECRET,
];

/// Client for the OAuth token endpoint. Uses the configured client credentials.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    ctx: ResourceContext,
}

impl OAuthClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Exchanges an authorization code for an access token.
    pub async fn get_access_token(
        &self,
        authorization_code: &str,
    ) -> Result<Response, ClientError> {
        let config = self.ctx.config();
        self.get_oauth_token(TokenRequest::AuthorizationCode {
            code: authorization_code.to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        })
        .await
    }

    /// Exchanges a refresh token for a new access token.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<Response, ClientError> {
        let config = self.ctx.config();
        self.get_oauth_token(TokenRequest::RefreshToken {
            refresh_token: refresh_token.to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
        .await
    }

    /// Posts a token request to `/oauth/access-token` as a form.
    #[tracing::instrument(skip(self, request), fields(grant_type = request.grant_type()))]
    pub async fn get_oauth_token(&self, request: TokenRequest) -> Result<Response, ClientError> {
        self.ctx.send(self.token_request(&request)?).await
    }

    fn token_request(&self, request: &TokenRequest) -> Result<ApiRequest, ClientError> {
        let pairs = request.form_pairs();
        let fields: Map<String, Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
            .collect();
        let schema = match request {
            TokenRequest::AuthorizationCode { .. } => AUTHORIZATION_CODE,
            TokenRequest::RefreshToken { .. } => REFRESH_TOKEN,
        };
        check(&fields, schema)?;

        Ok(ApiRequest::post(self.ctx.oauth_url(ACCESS_TOKEN_PATH))
            .headers(form_headers())
            .form(pairs))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use starling_types::StarlingConfig;

    use super::*;
    use crate::request::RequestBody;

    fn client() -> OAuthClient {
        let config = StarlingConfig::new()
            .with_oauth_url("http://localhost")
            .with_client_credentials("id", "secret");
        OAuthClient::new(ResourceContext::new(Arc::new(config), reqwest::Client::new()))
    }

    fn form_keys(request: &ApiRequest) -> Vec<&'static str> {
        match &request.body {
            Some(RequestBody::Form(pairs)) => pairs.iter().map(|(k, _)| *k).collect(),
            other => panic!("expected a form body, got {other:?}"),
        }
    }

    #[test]
    fn test_authorization_code_grant() {
        let request = client()
            .token_request(&TokenRequest::AuthorizationCode {
                code: "abc".into(),
                client_id: "id".into(),
                client_secret: "secret".into(),
                redirect_uri: Some("https://example.com/cb".into()),
            })
            .unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://localhost/oauth/access-token");
        assert_eq!(
            request.headers[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert!(request.headers.get(AUTHORIZATION).is_none());
        assert_eq!(
            form_keys(&request),
            ["grant_type", "code", "client_id", "client_secret", "redirect_uri"]
        );
    }

    #[test]
    fn test_refresh_grant_never_sends_code_fields() {
        let request = client()
            .token_request(&TokenRequest::RefreshToken {
                refresh_token: "rt".into(),
                client_id: "id".into(),
                client_secret: "secret".into(),
            })
            .unwrap();
        assert_eq!(
            form_keys(&request),
            ["grant_type", "refresh_token", "client_id", "client_secret"]
        );
    }

    #[test]
    fn test_missing_redirect_uri_is_a_violation() {
        let err = client()
            .token_request(&TokenRequest::AuthorizationCode {
                code: "abc".into(),
                client_id: "id".into(),
                client_secret: "secret".into(),
                redirect_uri: None,
            })
            .unwrap_err();
        assert_eq!(
            err.validation_messages().unwrap(),
            ["redirect_uri is a required string but was undefined"]
        );
    }
}

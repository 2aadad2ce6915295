//! One client per API resource.
//!
//! Every operation follows the same steps: merge the configured defaults under the
//! caller's parameters, validate them against the operation's static [`Schema`],
//! build an [`ApiRequest`] and send it once. The response comes back untouched.

use std::sync::Arc;

use reqwest::{Client, Response, Url};
use serde::Serialize;
use starling_types::{Field, Schema, StarlingConfig, validate_params};

use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

/// Declares a parameter struct whose first field is the optional bearer token.
///
/// Fields serialize in camelCase so violation messages use the API's names.
macro_rules! params {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Overrides the configured access token for this call.
            pub access_token: Option<String>,
            $( $(#[$field_meta])* pub $field: $ty, )*
        }

        impl $name {
            pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
                self.access_token = Some(token.into());
                self
            }
        }

        impl $crate::resources::AccessToken for $name {
            fn access_token_mut(&mut self) -> &mut Option<String> {
                &mut self.access_token
            }
        }
    };
}

pub mod account;
pub mod account_holder;
pub mod address;
pub mod card;
pub mod contact;
pub mod customer;
pub mod feed_item;
pub mod identity;
pub mod mandate;
pub mod merchant;
pub mod oauth;
pub mod payee;
pub mod payment;
pub mod savings_goal;
pub mod transaction;
pub mod who_am_i;

/// Parameter structs that carry a bearer token.
pub trait AccessToken {
    fn access_token_mut(&mut self) -> &mut Option<String>;
}

params! {
    /// Parameters of operations that need nothing but the token.
    #[derive(Default)]
    TokenParams {}
}

impl TokenParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given token, or the configured one when `None`.
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            access_token: token.map(str::to_string),
        }
    }
}

/// Schema shared by every token-only operation.
pub(crate) const TOKEN_ONLY: Schema = &[starling_types::validation::ACCESS_TOKEN];

/// Configuration and HTTP client shared by all resource clients.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    config: Arc<StarlingConfig>,
    http: Client,
}

impl ResourceContext {
    pub fn new(config: Arc<StarlingConfig>, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &StarlingConfig {
        &self.config
    }

    /// Joins a path onto the configured API base.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    /// Joins a path onto the configured API base, then appends each segment
    /// percent-encoded so a caller-supplied id stays a single path segment.
    pub(crate) fn api_url_with_segments(
        &self,
        path: &str,
        segments: &[&str],
    ) -> Result<String, ClientError> {
        let mut url = Url::parse(&self.api_url(path))
            .map_err(|e| ClientError::InvalidUrl(format!("parse error: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::InvalidUrl(format!("{} cannot be a base", self.config.api_url))
            })?
            .extend(segments);
        Ok(url.into())
    }

    /// Joins a path onto the configured OAuth base.
    pub(crate) fn oauth_url(&self, path: &str) -> String {
        format!("{}{}", self.config.oauth_url, path)
    }

    /// Fills in the configured token, validates, and hands back the token for the headers.
    pub(crate) fn authorize<P>(
        &self,
        mut params: P,
        schema: &[Field],
    ) -> Result<(P, String), ClientError>
    where
        P: Serialize + AccessToken,
    {
        let token = params.access_token_mut();
        if token.is_none() {
            token.clone_from(&self.config.access_token);
        }
        check(&params, schema)?;
        let token = params.access_token_mut().take().unwrap_or_default();
        Ok((params, token))
    }

    /// Builds a GET for an operation that takes nothing but the token.
    pub(crate) fn token_only_get(
        &self,
        params: TokenParams,
        path: &str,
    ) -> Result<ApiRequest, ClientError> {
        let (_, token) = self.authorize(params, TOKEN_ONLY)?;
        Ok(ApiRequest::get(self.api_url(path)).headers(default_headers(&token)))
    }

    /// Sends a built request exactly once.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<Response, ClientError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = request.into_builder(&self.http)?.send().await?;
        Ok(response)
    }
}

/// Validates parameters, logging the violation count on failure.
pub(crate) fn check<P: Serialize + ?Sized>(
    params: &P,
    schema: &[Field],
) -> Result<(), ClientError> {
    validate_params(params, schema).map_err(|e| {
        tracing::warn!(violations = e.len(), "parameter validation failed");
        ClientError::from(e)
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use starling_types::StarlingConfig;

    use super::ResourceContext;

    pub const TOKEN: &str = "0123456789";
    pub const TEST_ACCOUNT_UID: &str = "b0b20c9d-3b6b-42f1-a7d0-e70d4538e0d9";
    pub const TEST_CATEGORY_UID: &str = "4d2aa1a5-6c2e-4d86-9a5c-4c1f0a1e0f3b";
    pub const TEST_UID: &str = "8b1d9a33-2f14-4c1e-bd5a-0d9fbc2e7a41";

    pub fn context() -> ResourceContext {
        ResourceContext::new(
            Arc::new(StarlingConfig::new().with_api_url("http://localhost")),
            reqwest::Client::new(),
        )
    }

    pub fn context_with_token(token: &str) -> ResourceContext {
        ResourceContext::new(
            Arc::new(
                StarlingConfig::new()
                    .with_api_url("http://localhost")
                    .with_access_token(token),
            ),
            reqwest::Client::new(),
        )
    }
}

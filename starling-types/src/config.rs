//! Client configuration.

use std::env;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.starlingbank.com";
pub const DEFAULT_OAUTH_URL: &str = "https://oauth.starlingbank.com";
pub const SANDBOX_API_URL: &str = "https://api-sandbox.starlingbank.com";
pub const SANDBOX_OAUTH_URL: &str = "https://oauth-sandbox.starlingbank.com";

/// Settings shared by every resource client.
///
/// Built once, then shared read-only. Deserializes from an options object with
/// the keys `apiUrl`, `oauthUrl`, `clientId`, `clientSecret`, `accessToken` and
/// `redirectUri`; missing keys take the production defaults.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarlingConfig {
    #[serde(deserialize_with = "deserialize_url")]
    pub api_url: String,
    #[serde(deserialize_with = "deserialize_url")]
    pub oauth_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Bearer token used when a call does not supply its own.
    pub access_token: Option<String>,
    /// Redirect URI registered for the authorization-code flow.
    pub redirect_uri: Option<String>,
}

impl Default for StarlingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            access_token: None,
            redirect_uri: None,
        }
    }
}

impl StarlingConfig {
    /// Creates a configuration with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration pointing at the sandbox environment.
    pub fn sandbox() -> Self {
        Self {
            api_url: SANDBOX_API_URL.to_string(),
            oauth_url: SANDBOX_OAUTH_URL.to_string(),
            ..Self::default()
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_url(url.into());
        self
    }

    pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = trim_url(url.into());
        self
    }

    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_secret = client_secret.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Loads configuration from `STARLING_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("STARLING_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(url) = lookup("STARLING_OAUTH_URL") {
            config = config.with_oauth_url(url);
        }
        if let Some(id) = lookup("STARLING_CLIENT_ID") {
            config.client_id = id;
        }
        if let Some(secret) = lookup("STARLING_CLIENT_SECRET") {
            config.client_secret = secret;
        }
        config.access_token = lookup("STARLING_ACCESS_TOKEN").or(config.access_token);
        config.redirect_uri = lookup("STARLING_REDIRECT_URI").or(config.redirect_uri);
        config
    }
}

impl fmt::Debug for StarlingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarlingConfig")
            .field("api_url", &self.api_url)
            .field("oauth_url", &self.oauth_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(!self.client_secret.is_empty()))
            .field("access_token", &redacted(self.access_token.is_some()))
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

fn redacted(present: bool) -> &'static str {
    if present { "<redacted>" } else { "<unset>" }
}

fn deserialize_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(trim_url)
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

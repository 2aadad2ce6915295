//! Identity of the token and of the individual who authorised it.

use reqwest::Response;

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;

/// Client for `/api/v2/identity`.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    ctx: ResourceContext,
}

impl IdentityClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Gets the scopes and expiry of the token.
    pub async fn get_token_identity(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, "/api/v2/identity/token")?;
        self.ctx.send(request).await
    }

    /// Gets the individual who authorised the token.
    pub async fn get_authorising_individual(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        let request = self
            .ctx
            .token_only_get(params, "/api/v2/identity/individual")?;
        self.ctx.send(request).await
    }
}

//! The customer and permissions behind the token, through the v1 API.

use reqwest::Response;

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct WhoAmIClient {
    ctx: ResourceContext,
}

impl WhoAmIClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn get_me(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, "/api/v1/me")?;
        self.ctx.send(request).await
    }
}

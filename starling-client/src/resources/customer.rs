//! Customer details through the v1 API.

use reqwest::Response;

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct CustomerClient {
    ctx: ResourceContext,
}

impl CustomerClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn get_customer(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, "/api/v1/customers")?;
        self.ctx.send(request).await
    }
}

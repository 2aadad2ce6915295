//! Addresses of the account holder.

use reqwest::Response;

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;

/// Client for `/api/v2/addresses`.
#[derive(Debug, Clone)]
pub struct AddressClient {
    ctx: ResourceContext,
}

impl AddressClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Gets the current and previous addresses of the account holder.
    pub async fn get_addresses(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, "/api/v2/addresses")?;
        self.ctx.send(request).await
    }
}

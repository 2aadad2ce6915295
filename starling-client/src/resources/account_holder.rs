//! The account holder behind the token.

use reqwest::Response;

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::request::ApiRequest;

const ACCOUNT_HOLDER: &str = "/api/v2/account-holder";

/// Client for `/api/v2/account-holder`.
#[derive(Debug, Clone)]
pub struct AccountHolderClient {
    ctx: ResourceContext,
}

impl AccountHolderClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Gets the account holder's uid and type.
    pub async fn get_account_holder(&self, params: TokenParams) -> Result<Response, ClientError> {
        self.ctx.send(self.request(params, "")?).await
    }

    pub async fn get_account_holder_name(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.request(params, "/name")?).await
    }

    /// Details of an individual account holder.
    pub async fn get_account_holder_individual(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.request(params, "/individual")?).await
    }

    /// Details of a joint account holder.
    pub async fn get_account_holder_joint(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.request(params, "/joint")?).await
    }

    /// Details of a business account holder.
    pub async fn get_account_holder_business(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.request(params, "/business")?).await
    }

    pub async fn get_account_holder_business_registered_address(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.request(params, "/business/registered-address")?)
            .await
    }

    pub async fn get_account_holder_business_correspondence_address(
        &self,
        params: TokenParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.request(params, "/business/correspondence-address")?)
            .await
    }

    fn request(&self, params: TokenParams, suffix: &str) -> Result<ApiRequest, ClientError> {
        self.ctx
            .token_only_get(params, &format!("{ACCOUNT_HOLDER}{suffix}"))
    }
}

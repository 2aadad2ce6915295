//! Merchants through the v1 API.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Primitive, Rule, Schema};

use super::ResourceContext;
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

params! {
    #[derive(Default)]
    MerchantParams {
        merchant_uid: String,
    }
}

const MERCHANT: Schema = &[
    ACCESS_TOKEN,
    Field::new("merchantUid", Rule::Required(Primitive::String)),
];

#[derive(Debug, Clone)]
pub struct MerchantClient {
    ctx: ResourceContext,
}

impl MerchantClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(skip(self, params), fields(merchant_uid = %params.merchant_uid))]
    pub async fn get_merchant(&self, params: MerchantParams) -> Result<Response, ClientError> {
        self.ctx.send(self.merchant_request(params)?).await
    }

    fn merchant_request(&self, params: MerchantParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, MERCHANT)?;
        let url = self
            .ctx
            .api_url_with_segments("/api/v1/merchants", &[params.merchant_uid.as_str()])?;
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }
}

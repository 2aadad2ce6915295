//! Transactions through the v1 API.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Format, Primitive, Rule, Schema};

use super::ResourceContext;
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

const TRANSACTIONS: &str = "/api/v1/transactions";

params! {
    /// Transactions between two dates; either end may be left open.
    #[derive(Default)]
    TransactionsParams {
        /// `yyyy-MM-dd`
        from: Option<String>,
        /// `yyyy-MM-dd`
        to: Option<String>,
    }
}

params! {
    #[derive(Default)]
    TransactionParams {
        transaction_id: String,
    }
}

const LIST: Schema = &[
    ACCESS_TOKEN,
    Field::new("from", Rule::OptionalFormat(Format::Date)),
    Field::new("to", Rule::OptionalFormat(Format::Date)),
];
const SINGLE: Schema = &[
    ACCESS_TOKEN,
    Field::new("transactionId", Rule::Required(Primitive::String)),
];

#[derive(Debug, Clone)]
pub struct TransactionClient {
    ctx: ResourceContext,
}

impl TransactionClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn get_transactions(
        &self,
        params: TransactionsParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.list_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(transaction_id = %params.transaction_id))]
    pub async fn get_transaction(
        &self,
        params: TransactionParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.single_request(params)?).await
    }

    fn list_request(&self, params: TransactionsParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, LIST)?;
        Ok(ApiRequest::get(self.ctx.api_url(TRANSACTIONS))
            .headers(default_headers(&token))
            .query_opt("from", params.from)
            .query_opt("to", params.to))
    }

    fn single_request(&self, params: TransactionParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, SINGLE)?;
        let url = self
            .ctx
            .api_url_with_segments(TRANSACTIONS, &[params.transaction_id.as_str()])?;
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }
}

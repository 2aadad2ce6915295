//! Saved contacts through the v1 API.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{ContactRequest, Field, Primitive, Rule, Schema};

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::http::{default_headers, payload_headers};
use crate::request::ApiRequest;

const CONTACTS: &str = "/api/v1/contacts";

params! {
    #[derive(Default)]
    ContactParams {
        contact_id: String,
    }
}

params! {
    /// A new contact and the account to pay them at.
    #[derive(Default)]
    CreateContactParams {
        name: String,
        account_type: String,
        account_number: String,
        sort_code: String,
        customer_id: Option<String>,
    }
}

const CONTACT: Schema = &[
    ACCESS_TOKEN,
    Field::new("contactId", Rule::Required(Primitive::String)),
];
const CREATE_CONTACT: Schema = &[
    ACCESS_TOKEN,
    Field::new("name", Rule::Required(Primitive::String)),
    Field::new("accountType", Rule::Required(Primitive::String)),
    Field::new("accountNumber", Rule::Required(Primitive::String)),
    Field::new("sortCode", Rule::Required(Primitive::String)),
    Field::new("customerId", Rule::Optional(Primitive::String)),
];

/// Client for `/api/v1/contacts`.
#[derive(Debug, Clone)]
pub struct ContactClient {
    ctx: ResourceContext,
}

impl ContactClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn get_contacts(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, CONTACTS)?;
        self.ctx.send(request).await
    }

    /// Lists the accounts saved against a contact.
    #[tracing::instrument(skip(self, params), fields(contact_id = %params.contact_id))]
    pub async fn get_contact_account(
        &self,
        params: ContactParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.contact_account_request(params)?).await
    }

    pub async fn create_contact(
        &self,
        params: CreateContactParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.create_request(params)?).await
    }

    fn contact_account_request(&self, params: ContactParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CONTACT)?;
        let url = self
            .ctx
            .api_url_with_segments(CONTACTS, &[params.contact_id.as_str(), "accounts"])?;
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }

    fn create_request(&self, params: CreateContactParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CREATE_CONTACT)?;
        let body = ContactRequest {
            name: params.name,
            account_type: params.account_type,
            account_number: params.account_number,
            sort_code: params.sort_code,
            customer_id: params.customer_id,
        };
        Ok(ApiRequest::post(self.ctx.api_url(CONTACTS))
            .headers(payload_headers(&token))
            .json(&body)?)
    }
}

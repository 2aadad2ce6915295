//! Payees and their accounts.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{
    BankIdentifierType, Field, Format, PayeeCreationRequest, PayeeType, Primitive, Rule, Schema,
};

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::http::{default_headers, payload_headers};
use crate::request::ApiRequest;

const PAYEES: &str = "/api/v2/payees";

params! {
    CreatePayeeParams {
        payee_creation_request: PayeeCreationRequest,
    }
}

impl CreatePayeeParams {
    pub fn new(payee_creation_request: PayeeCreationRequest) -> Self {
        Self {
            access_token: None,
            payee_creation_request,
        }
    }
}

params! {
    #[derive(Default)]
    PayeeParams {
        payee_uid: String,
    }
}

impl PayeeParams {
    pub fn new(payee_uid: impl Into<String>) -> Self {
        Self {
            payee_uid: payee_uid.into(),
            ..Default::default()
        }
    }
}

const PAYEE_ACCOUNT: Schema = &[
    Field::new("description", Rule::Required(Primitive::String)),
    Field::new("defaultAccount", Rule::Required(Primitive::Boolean)),
    Field::new("countryCode", Rule::Required(Primitive::String)),
    Field::new("accountIdentifier", Rule::Required(Primitive::String)),
    Field::new("bankIdentifier", Rule::Required(Primitive::String)),
    Field::new("bankIdentifierType", Rule::OneOf(BankIdentifierType::NAMES)),
];

const PAYEE_CREATION: Schema = &[
    Field::new("payeeName", Rule::Required(Primitive::String)),
    Field::new("phoneNumber", Rule::Optional(Primitive::String)),
    Field::new("payeeType", Rule::OneOf(PayeeType::NAMES)),
    Field::new("firstName", Rule::Optional(Primitive::String)),
    Field::new("middleName", Rule::Optional(Primitive::String)),
    Field::new("lastName", Rule::Optional(Primitive::String)),
    Field::new("businessName", Rule::Optional(Primitive::String)),
    Field::new("dateOfBirth", Rule::OptionalFormat(Format::Date)),
    Field::new("accounts", Rule::OptionalList(PAYEE_ACCOUNT)),
];

const CREATE_PAYEE: Schema = &[
    ACCESS_TOKEN,
    Field::new("payeeCreationRequest", Rule::Object(PAYEE_CREATION)),
];
const PAYEE: Schema = &[
    ACCESS_TOKEN,
    Field::new("payeeUid", Rule::Format(Format::Uuid)),
];

/// Client for `/api/v2/payees`.
#[derive(Debug, Clone)]
pub struct PayeeClient {
    ctx: ResourceContext,
}

impl PayeeClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn get_payees(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, PAYEES)?;
        self.ctx.send(request).await
    }

    /// Creates a payee, optionally with accounts to pay them at.
    pub async fn create_payee(&self, params: CreatePayeeParams) -> Result<Response, ClientError> {
        self.ctx.send(self.create_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(payee_uid = %params.payee_uid))]
    pub async fn delete_payee(&self, params: PayeeParams) -> Result<Response, ClientError> {
        self.ctx.send(self.delete_request(params)?).await
    }

    fn create_request(&self, params: CreatePayeeParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CREATE_PAYEE)?;
        Ok(ApiRequest::put(self.ctx.api_url(PAYEES))
            .headers(payload_headers(&token))
            .json(&params.payee_creation_request)?)
    }

    fn delete_request(&self, params: PayeeParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, PAYEE)?;
        let url = self
            .ctx
            .api_url(&format!("{PAYEES}/{}", params.payee_uid));
        Ok(ApiRequest::delete(url).headers(default_headers(&token)))
    }
}

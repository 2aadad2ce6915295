//! Savings goals and transfers in and out of them.

use reqwest::Response;
use starling_types::domain::DEFAULT_CURRENCY;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{
    CurrencyAndAmount, Field, Format, Primitive, Rule, SavingsGoalRequest,
    SavingsGoalTransferRequest, Schema,
};

use super::ResourceContext;
use crate::error::ClientError;
use crate::http::{default_headers, payload_headers};
use crate::request::ApiRequest;

params! {
    /// Parameters of operations on every goal of an account.
    #[derive(Default)]
    SavingsGoalsParams {
        account_uid: String,
    }
}

params! {
    #[derive(Default)]
    SavingsGoalParams {
        account_uid: String,
        savings_goal_uid: String,
    }
}

params! {
    /// A new goal. Currencies default to GBP and the target to zero.
    #[derive(Default)]
    CreateSavingsGoalParams {
        account_uid: String,
        name: String,
        /// ISO-4217 code of the goal.
        currency: Option<String>,
        /// Target in minor units, e.g. `1234` for £12.34.
        target_amount: Option<i64>,
        target_currency: Option<String>,
        base64_encoded_photo: Option<String>,
    }
}

params! {
    /// Money moved into or out of a goal.
    #[derive(Default)]
    SavingsGoalTransferParams {
        account_uid: String,
        savings_goal_uid: String,
        /// Caller-chosen uid that makes the transfer idempotent.
        transfer_uid: String,
        /// Minor units of `currency`.
        amount: i64,
        currency: String,
    }
}

const ACCOUNT_UID: Field = Field::new("accountUid", Rule::Format(Format::Uuid));
const SAVINGS_GOAL_UID: Field = Field::new("savingsGoalUid", Rule::Format(Format::Uuid));

const GOALS: Schema = &[ACCESS_TOKEN, ACCOUNT_UID];
const GOAL: Schema = &[ACCESS_TOKEN, ACCOUNT_UID, SAVINGS_GOAL_UID];
const CREATE: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    Field::new("name", Rule::Required(Primitive::String)),
    Field::new("currency", Rule::Required(Primitive::String)),
    Field::new("targetAmount", Rule::Required(Primitive::Number)),
    Field::new("targetCurrency", Rule::Required(Primitive::String)),
    Field::new("base64EncodedPhoto", Rule::Optional(Primitive::String)),
];
const TRANSFER: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    SAVINGS_GOAL_UID,
    Field::new("transferUid", Rule::Format(Format::Uuid)),
    Field::new("amount", Rule::Required(Primitive::Number)),
    Field::new("currency", Rule::Required(Primitive::String)),
];

#[derive(Debug, Clone, Copy)]
enum Transfer {
    AddMoney,
    WithdrawMoney,
}

impl Transfer {
    fn path_segment(self) -> &'static str {
        match self {
            Transfer::AddMoney => "add-money",
            Transfer::WithdrawMoney => "withdraw-money",
        }
    }
}

/// Client for `/api/v2/account/{accountUid}/savings-goals`.
#[derive(Debug, Clone)]
pub struct SavingsGoalClient {
    ctx: ResourceContext,
}

impl SavingsGoalClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_savings_goals(
        &self,
        params: SavingsGoalsParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.goals_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(savings_goal_uid = %params.savings_goal_uid))]
    pub async fn get_savings_goal(
        &self,
        params: SavingsGoalParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.goal_request(params, false)?).await
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn create_savings_goal(
        &self,
        params: CreateSavingsGoalParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.create_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(savings_goal_uid = %params.savings_goal_uid))]
    pub async fn delete_savings_goal(
        &self,
        params: SavingsGoalParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.goal_request(params, true)?).await
    }

    #[tracing::instrument(skip(self, params), fields(transfer_uid = %params.transfer_uid))]
    pub async fn add_money_to_savings_goal(
        &self,
        params: SavingsGoalTransferParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.transfer_request(params, Transfer::AddMoney)?)
            .await
    }

    #[tracing::instrument(skip(self, params), fields(transfer_uid = %params.transfer_uid))]
    pub async fn withdraw_money_from_savings_goal(
        &self,
        params: SavingsGoalTransferParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.transfer_request(params, Transfer::WithdrawMoney)?)
            .await
    }

    fn goals_url(&self, account_uid: &str) -> String {
        self.ctx
            .api_url(&format!("/api/v2/account/{account_uid}/savings-goals"))
    }

    fn goals_request(&self, params: SavingsGoalsParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, GOALS)?;
        Ok(ApiRequest::get(self.goals_url(&params.account_uid)).headers(default_headers(&token)))
    }

    fn goal_request(
        &self,
        params: SavingsGoalParams,
        delete: bool,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, GOAL)?;
        let url = format!(
            "{}/{}",
            self.goals_url(&params.account_uid),
            params.savings_goal_uid
        );
        let request = if delete {
            ApiRequest::delete(url)
        } else {
            ApiRequest::get(url)
        };
        Ok(request.headers(default_headers(&token)))
    }

    fn create_request(
        &self,
        mut params: CreateSavingsGoalParams,
    ) -> Result<ApiRequest, ClientError> {
        params
            .currency
            .get_or_insert_with(|| DEFAULT_CURRENCY.to_string());
        params.target_amount.get_or_insert(0);
        params
            .target_currency
            .get_or_insert_with(|| DEFAULT_CURRENCY.to_string());
        let (params, token) = self.ctx.authorize(params, CREATE)?;

        let body = SavingsGoalRequest {
            name: params.name,
            currency: params.currency.unwrap_or_default(),
            target: CurrencyAndAmount::new(
                params.target_currency.unwrap_or_default(),
                params.target_amount.unwrap_or_default(),
            ),
            base64_encoded_photo: params.base64_encoded_photo,
        };
        Ok(ApiRequest::put(self.goals_url(&params.account_uid))
            .headers(payload_headers(&token))
            .json(&body)?)
    }

    fn transfer_request(
        &self,
        params: SavingsGoalTransferParams,
        transfer: Transfer,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, TRANSFER)?;
        let url = format!(
            "{}/{}/{}/{}",
            self.goals_url(&params.account_uid),
            params.savings_goal_uid,
            transfer.path_segment(),
            params.transfer_uid
        );
        let body = SavingsGoalTransferRequest {
            amount: CurrencyAndAmount::new(params.currency, params.amount),
        };
        Ok(ApiRequest::put(url)
            .headers(payload_headers(&token))
            .json(&body)?)
    }
}

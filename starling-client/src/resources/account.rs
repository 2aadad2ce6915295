//! Accounts, balances, confirmation of funds and statements.

use chrono::Utc;
use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Format, Primitive, Rule, Schema, StatementFormat};

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

params! {
    /// Parameters of operations on a single account.
    #[derive(Default)]
    AccountParams {
        account_uid: String,
    }
}

impl AccountParams {
    pub fn new(account_uid: impl Into<String>) -> Self {
        Self {
            account_uid: account_uid.into(),
            ..Default::default()
        }
    }
}

params! {
    #[derive(Default)]
    ConfirmationOfFundsParams {
        account_uid: String,
        /// Amount to check for, in minor units.
        target_amount_in_minor_units: i64,
    }
}

params! {
    /// Statement for one calendar month.
    #[derive(Default)]
    StatementPeriodParams {
        account_uid: String,
        /// `yyyy-MM`; the current UTC month when absent.
        year_month: Option<String>,
        format: StatementFormat,
    }
}

params! {
    /// Statement for a date range.
    #[derive(Default)]
    StatementRangeParams {
        account_uid: String,
        /// `yyyy-MM-dd`
        start: String,
        /// `yyyy-MM-dd`; left off the query when absent.
        end: Option<String>,
        format: StatementFormat,
    }
}

const ACCOUNT_UID: Field = Field::new("accountUid", Rule::Format(Format::Uuid));
const STATEMENT_FORMAT: Field = Field::new("format", Rule::OneOf(StatementFormat::MEDIA_TYPES));

const ACCOUNT: Schema = &[ACCESS_TOKEN, ACCOUNT_UID];
const CONFIRMATION_OF_FUNDS: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    Field::new("targetAmountInMinorUnits", Rule::Required(Primitive::Number)),
];
const STATEMENT_PERIOD: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    Field::new("yearMonth", Rule::Format(Format::YearMonth)),
    STATEMENT_FORMAT,
];
const STATEMENT_RANGE: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    Field::new("start", Rule::Format(Format::Date)),
    Field::new("end", Rule::OptionalFormat(Format::Date)),
    STATEMENT_FORMAT,
];

/// Client for `/api/v2/accounts`.
#[derive(Debug, Clone)]
pub struct AccountClient {
    ctx: ResourceContext,
}

impl AccountClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lists the customer's accounts.
    pub async fn get_accounts(&self, params: TokenParams) -> Result<Response, ClientError> {
        self.ctx.send(self.accounts_request(params)?).await
    }

    /// Gets the identifiers (sort code, account number, IBAN, BIC) of an account.
    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_account_identifiers(
        &self,
        params: AccountParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.account_request(params, "/identifiers")?)
            .await
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_account_balance(
        &self,
        params: AccountParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.account_request(params, "/balance")?).await
    }

    /// Checks whether the account could cover a payment of the given amount.
    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_confirmation_of_funds(
        &self,
        params: ConfirmationOfFundsParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.confirmation_of_funds_request(params)?)
            .await
    }

    /// Lists the months a statement can be downloaded for.
    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_statement_periods(
        &self,
        params: AccountParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.account_request(params, "/statement/available-periods")?)
            .await
    }

    /// Downloads the statement for one month as CSV or PDF.
    ///
    /// Read the body with `text()`, `bytes()` or `chunk()` as suits the format.
    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_statement_for_period(
        &self,
        params: StatementPeriodParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.statement_period_request(params)?)
            .await
    }

    /// Downloads the statement for a date range as CSV or PDF.
    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_statement_for_range(
        &self,
        params: StatementRangeParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.statement_range_request(params)?)
            .await
    }

    fn accounts_url(&self, account_uid: &str, suffix: &str) -> String {
        self.ctx
            .api_url(&format!("/api/v2/accounts/{account_uid}{suffix}"))
    }

    fn accounts_request(&self, params: TokenParams) -> Result<ApiRequest, ClientError> {
        self.ctx.token_only_get(params, "/api/v2/accounts")
    }

    fn account_request(
        &self,
        params: AccountParams,
        suffix: &str,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, ACCOUNT)?;
        Ok(ApiRequest::get(self.accounts_url(&params.account_uid, suffix))
            .headers(default_headers(&token)))
    }

    fn confirmation_of_funds_request(
        &self,
        params: ConfirmationOfFundsParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CONFIRMATION_OF_FUNDS)?;
        Ok(
            ApiRequest::get(self.accounts_url(&params.account_uid, "/confirmation-of-funds"))
                .headers(default_headers(&token))
                .query("targetAmountInMinorUnits", params.target_amount_in_minor_units),
        )
    }

    fn statement_period_request(
        &self,
        mut params: StatementPeriodParams,
    ) -> Result<ApiRequest, ClientError> {
        if params.year_month.is_none() {
            params.year_month = Some(Utc::now().format("%Y-%m").to_string());
        }
        let (params, token) = self.ctx.authorize(params, STATEMENT_PERIOD)?;
        Ok(
            ApiRequest::get(self.accounts_url(&params.account_uid, "/statement/download"))
                .headers(default_headers(&token))
                .accept(params.format.media_type())
                .query_opt("yearMonth", params.year_month),
        )
    }

    fn statement_range_request(
        &self,
        params: StatementRangeParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, STATEMENT_RANGE)?;
        Ok(ApiRequest::get(
            self.accounts_url(&params.account_uid, "/statement/downloadForDateRange"),
        )
        .headers(default_headers(&token))
        .accept(params.format.media_type())
        .query("start", params.start)
        .query_opt("end", params.end))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use reqwest::header::{ACCEPT, AUTHORIZATION};

    use super::*;
    use crate::resources::test_support::*;

    fn client() -> AccountClient {
        AccountClient::new(context())
    }

    #[test]
    fn test_get_accounts_request() {
        let request = client()
            .accounts_request(TokenParams::new().with_access_token(TOKEN))
            .unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "http://localhost/api/v2/accounts");
        assert_eq!(request.headers[AUTHORIZATION], "Bearer 0123456789");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_account_scoped_paths() {
        let client = client();
        for suffix in ["/identifiers", "/balance", "/statement/available-periods"] {
            let request = client
                .account_request(AccountParams::new(TEST_ACCOUNT_UID).with_access_token(TOKEN), suffix)
                .unwrap();
            assert_eq!(
                request.url,
                format!("http://localhost/api/v2/accounts/{TEST_ACCOUNT_UID}{suffix}")
            );
        }
    }

    #[test]
    fn test_bad_account_uid_is_rejected() {
        let err = client()
            .account_request(AccountParams::new("abc").with_access_token(TOKEN), "/balance")
            .unwrap_err();
        assert_eq!(
            err.validation_messages().unwrap(),
            ["Expected a value of type `uuid` for `accountUid` but received `\"abc\"`"]
        );
    }

    #[test]
    fn test_confirmation_of_funds_sends_the_amount_as_query() {
        let request = client()
            .confirmation_of_funds_request(
                ConfirmationOfFundsParams {
                    account_uid: TEST_ACCOUNT_UID.into(),
                    target_amount_in_minor_units: 0,
                    ..Default::default()
                }
                .with_access_token(TOKEN),
            )
            .unwrap();
        assert!(request.url.ends_with("/confirmation-of-funds"));
        assert_eq!(request.query_value("targetAmountInMinorUnits"), Some("0"));
    }

    #[test]
    fn test_statement_for_period_defaults() {
        let request = client()
            .statement_period_request(
                StatementPeriodParams {
                    account_uid: TEST_ACCOUNT_UID.into(),
                    ..Default::default()
                }
                .with_access_token(TOKEN),
            )
            .unwrap();
        assert!(request.url.ends_with("/statement/download"));
        assert_eq!(request.headers[ACCEPT], "text/csv");
        let year_month = request.query_value("yearMonth").unwrap();
        assert!(Format::YearMonth.is_match(year_month));
    }

    #[test]
    fn test_statement_for_period_rejects_bad_month() {
        let err = client()
            .statement_period_request(
                StatementPeriodParams {
                    account_uid: TEST_ACCOUNT_UID.into(),
                    year_month: Some("2019-14".into()),
                    format: StatementFormat::Pdf,
                    ..Default::default()
                }
                .with_access_token(TOKEN),
            )
            .unwrap_err();
        assert_eq!(
            err.validation_messages().unwrap(),
            ["Expected a value of type `yearMonth` for `yearMonth` but received `\"2019-14\"`"]
        );
    }

    #[test]
    fn test_statement_for_range_without_end() {
        let request = client()
            .statement_range_request(
                StatementRangeParams {
                    account_uid: TEST_ACCOUNT_UID.into(),
                    start: "2019-10-01".into(),
                    format: StatementFormat::Pdf,
                    ..Default::default()
                }
                .with_access_token(TOKEN),
            )
            .unwrap();
        assert!(request.url.ends_with("/statement/downloadForDateRange"));
        assert_eq!(request.headers[ACCEPT], "application/pdf");
        assert_eq!(request.query, vec![("start", "2019-10-01".to_string())]);
    }

    #[test]
    fn test_statement_for_range_with_end() {
        let request = client()
            .statement_range_request(
                StatementRangeParams {
                    account_uid: TEST_ACCOUNT_UID.into(),
                    start: "2019-10-01".into(),
                    end: Some("2019-10-31".into()),
                    ..Default::default()
                }
                .with_access_token(TOKEN),
            )
            .unwrap();
        assert_eq!(request.query_value("end"), Some("2019-10-31"));
    }
}

//! Feed items (transactions) of an account category.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Format, Rule, Schema};

use super::ResourceContext;
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

params! {
    /// Feed items settled between two instants.
    #[derive(Default)]
    FeedItemsBetweenParams {
        account_uid: String,
        category_uid: String,
        /// e.g. `2019-10-25T12:34:56.789Z`
        min_transaction_timestamp: String,
        max_transaction_timestamp: String,
    }
}

params! {
    #[derive(Default)]
    FeedItemParams {
        account_uid: String,
        category_uid: String,
        feed_item_uid: String,
    }
}

params! {
    /// Feed items created or updated after an instant.
    #[derive(Default)]
    FeedItemsChangedSinceParams {
        account_uid: String,
        category_uid: String,
        changes_since: String,
    }
}

const ACCOUNT_UID: Field = Field::new("accountUid", Rule::Format(Format::Uuid));
const CATEGORY_UID: Field = Field::new("categoryUid", Rule::Format(Format::Uuid));

const BETWEEN: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    CATEGORY_UID,
    Field::new("minTransactionTimestamp", Rule::Format(Format::Timestamp)),
    Field::new("maxTransactionTimestamp", Rule::Format(Format::Timestamp)),
];
const ITEM: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    CATEGORY_UID,
    Field::new("feedItemUid", Rule::Format(Format::Uuid)),
];
const CHANGED_SINCE: Schema = &[
    ACCESS_TOKEN,
    ACCOUNT_UID,
    CATEGORY_UID,
    Field::new("changesSince", Rule::Format(Format::Timestamp)),
];

/// Client for `/api/v2/feed/account/{accountUid}/category/{categoryUid}`.
#[derive(Debug, Clone)]
pub struct FeedItemClient {
    ctx: ResourceContext,
}

impl FeedItemClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_feed_items_between(
        &self,
        params: FeedItemsBetweenParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.between_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(feed_item_uid = %params.feed_item_uid))]
    pub async fn get_feed_item(&self, params: FeedItemParams) -> Result<Response, ClientError> {
        self.ctx.send(self.item_request(params)?).await
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn get_feed_items_changed_since(
        &self,
        params: FeedItemsChangedSinceParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.changed_since_request(params)?).await
    }

    fn feed_url(&self, account_uid: &str, category_uid: &str, suffix: &str) -> String {
        self.ctx.api_url(&format!(
            "/api/v2/feed/account/{account_uid}/category/{category_uid}{suffix}"
        ))
    }

    fn between_request(&self, params: FeedItemsBetweenParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, BETWEEN)?;
        let url = self.feed_url(
            &params.account_uid,
            &params.category_uid,
            "/transactions-between",
        );
        Ok(ApiRequest::get(url)
            .headers(default_headers(&token))
            .query("minTransactionTimestamp", params.min_transaction_timestamp)
            .query("maxTransactionTimestamp", params.max_transaction_timestamp))
    }

    fn item_request(&self, params: FeedItemParams) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, ITEM)?;
        let url = self.feed_url(
            &params.account_uid,
            &params.category_uid,
            &format!("/{}", params.feed_item_uid),
        );
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }

    fn changed_since_request(
        &self,
        params: FeedItemsChangedSinceParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CHANGED_SINCE)?;
        let url = self.feed_url(&params.account_uid, &params.category_uid, "");
        Ok(ApiRequest::get(url)
            .headers(default_headers(&token))
            .query("changesSince", params.changes_since))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support::*;

    fn client() -> FeedItemClient {
        FeedItemClient::new(context_with_token(TOKEN))
    }

    #[test]
    fn test_between_query() {
        let request = client()
            .between_request(FeedItemsBetweenParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                min_transaction_timestamp: "2019-10-25T12:34:56.789Z".into(),
                max_transaction_timestamp: "2019-10-26T12:34:56Z".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            request.url,
            format!(
                "http://localhost/api/v2/feed/account/{TEST_ACCOUNT_UID}/category/{TEST_CATEGORY_UID}/transactions-between"
            )
        );
        assert_eq!(
            request.query_value("minTransactionTimestamp"),
            Some("2019-10-25T12:34:56.789Z")
        );
        assert_eq!(
            request.query_value("maxTransactionTimestamp"),
            Some("2019-10-26T12:34:56Z")
        );
    }

    #[test]
    fn test_timestamp_without_time_is_rejected() {
        let err = client()
            .changed_since_request(FeedItemsChangedSinceParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                changes_since: "2019-10-25".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            err.validation_messages().unwrap(),
            ["Expected a value of type `timestamp` for `changesSince` but received `\"2019-10-25\"`"]
        );
    }

    #[test]
    fn test_item_and_changed_since_paths() {
        let item = client()
            .item_request(FeedItemParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                feed_item_uid: TEST_UID.into(),
                ..Default::default()
            })
            .unwrap();
        assert!(item.url.ends_with(&format!("/category/{TEST_CATEGORY_UID}/{TEST_UID}")));

        let changed = client()
            .changed_since_request(FeedItemsChangedSinceParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                changes_since: "2019-10-25T00:00:00.000Z".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(changed.url.ends_with(&format!("/category/{TEST_CATEGORY_UID}")));
        assert_eq!(
            changed.query_value("changesSince"),
            Some("2019-10-25T00:00:00.000Z")
        );
    }
}

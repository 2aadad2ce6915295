//! Payment orders and standing orders.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Format, Rule, Schema};

use super::ResourceContext;
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

const LOCAL_PAYMENTS: &str = "/api/v2/payments/local";

params! {
    #[derive(Default)]
    PaymentOrderParams {
        payment_order_uid: String,
    }
}

params! {
    #[derive(Default)]
    StandingOrdersParams {
        account_uid: String,
        category_uid: String,
    }
}

params! {
    #[derive(Default)]
    StandingOrderParams {
        account_uid: String,
        category_uid: String,
        payment_order_uid: String,
    }
}

const PAYMENT_ORDER_UID: Field = Field::new("paymentOrderUid", Rule::Format(Format::Uuid));
const ACCOUNT_UID: Field = Field::new("accountUid", Rule::Format(Format::Uuid));
const CATEGORY_UID: Field = Field::new("categoryUid", Rule::Format(Format::Uuid));

const PAYMENT_ORDER: Schema = &[ACCESS_TOKEN, PAYMENT_ORDER_UID];
const STANDING_ORDERS: Schema = &[ACCESS_TOKEN, ACCOUNT_UID, CATEGORY_UID];
const STANDING_ORDER: Schema = &[ACCESS_TOKEN, ACCOUNT_UID, CATEGORY_UID, PAYMENT_ORDER_UID];

/// Client for `/api/v2/payments/local`.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    ctx: ResourceContext,
}

impl PaymentClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(
        skip(self, params),
        fields(payment_order_uid = %params.payment_order_uid)
    )]
    pub async fn get_payment_order(
        &self,
        params: PaymentOrderParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.payment_order_request(params, "")?).await
    }

    /// Lists the payments made under a payment order.
    #[tracing::instrument(
        skip(self, params),
        fields(payment_order_uid = %params.payment_order_uid)
    )]
    pub async fn get_payment_order_payments(
        &self,
        params: PaymentOrderParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.payment_order_request(params, "/payments")?)
            .await
    }

    #[tracing::instrument(skip(self, params), fields(account_uid = %params.account_uid))]
    pub async fn list_standing_orders(
        &self,
        params: StandingOrdersParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.standing_orders_request(params)?).await
    }

    #[tracing::instrument(
        skip(self, params),
        fields(payment_order_uid = %params.payment_order_uid)
    )]
    pub async fn get_standing_order(
        &self,
        params: StandingOrderParams,
    ) -> Result<Response, ClientError> {
        self.ctx.send(self.standing_order_request(params)?).await
    }

    fn payment_order_request(
        &self,
        params: PaymentOrderParams,
        suffix: &str,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, PAYMENT_ORDER)?;
        let url = self.ctx.api_url(&format!(
            "{LOCAL_PAYMENTS}/payment-order/{}{suffix}",
            params.payment_order_uid
        ));
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }

    fn standing_orders_url(&self, account_uid: &str, category_uid: &str) -> String {
        self.ctx.api_url(&format!(
            "{LOCAL_PAYMENTS}/account/{account_uid}/category/{category_uid}/standing-orders"
        ))
    }

    fn standing_orders_request(
        &self,
        params: StandingOrdersParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, STANDING_ORDERS)?;
        let url = self.standing_orders_url(&params.account_uid, &params.category_uid);
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }

    fn standing_order_request(
        &self,
        params: StandingOrderParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, STANDING_ORDER)?;
        let url = format!(
            "{}/{}",
            self.standing_orders_url(&params.account_uid, &params.category_uid),
            params.payment_order_uid
        );
        Ok(ApiRequest::get(url).headers(default_headers(&token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support::*;

    fn client() -> PaymentClient {
        PaymentClient::new(context_with_token(TOKEN))
    }

    #[test]
    fn test_payment_order_paths() {
        let params = PaymentOrderParams {
            payment_order_uid: TEST_UID.into(),
            ..Default::default()
        };
        let order = client()
            .payment_order_request(params.clone(), "")
            .unwrap();
        let payments = client()
            .payment_order_request(params, "/payments")
            .unwrap();
        assert_eq!(
            order.url,
            format!("http://localhost/api/v2/payments/local/payment-order/{TEST_UID}")
        );
        assert_eq!(payments.url, format!("{}/payments", order.url));
    }

    #[test]
    fn test_standing_order_paths() {
        let list = client()
            .standing_orders_request(StandingOrdersParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            list.url,
            format!(
                "http://localhost/api/v2/payments/local/account/{TEST_ACCOUNT_UID}/category/{TEST_CATEGORY_UID}/standing-orders"
            )
        );

        let single = client()
            .standing_order_request(StandingOrderParams {
                account_uid: TEST_ACCOUNT_UID.into(),
                category_uid: TEST_CATEGORY_UID.into(),
                payment_order_uid: TEST_UID.into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(single.url, format!("{}/{TEST_UID}", list.url));
    }

    #[test]
    fn test_every_uid_is_checked() {
        let err = client()
            .standing_order_request(StandingOrderParams::default())
            .unwrap_err();
        assert_eq!(err.validation_messages().unwrap().len(), 3);
    }
}

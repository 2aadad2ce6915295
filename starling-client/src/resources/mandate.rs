//! Direct debit mandates.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{Field, Format, Rule, Schema};

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::http::default_headers;
use crate::request::ApiRequest;

const MANDATES: &str = "/api/v2/direct-debit/mandates";

params! {
    #[derive(Default)]
    MandateParams {
        mandate_uid: String,
    }
}

impl MandateParams {
    pub fn new(mandate_uid: impl Into<String>) -> Self {
        Self {
            mandate_uid: mandate_uid.into(),
            ..Default::default()
        }
    }
}

const MANDATE: Schema = &[
    ACCESS_TOKEN,
    Field::new("mandateUid", Rule::Format(Format::Uuid)),
];

/// Client for `/api/v2/direct-debit/mandates`.
#[derive(Debug, Clone)]
pub struct MandateClient {
    ctx: ResourceContext,
}

impl MandateClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub async fn list_mandates(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, MANDATES)?;
        self.ctx.send(request).await
    }

    #[tracing::instrument(skip(self, params), fields(mandate_uid = %params.mandate_uid))]
    pub async fn get_mandate(&self, params: MandateParams) -> Result<Response, ClientError> {
        self.ctx.send(self.mandate_request(params, false)?).await
    }

    /// Cancels a mandate.
    #[tracing::instrument(skip(self, params), fields(mandate_uid = %params.mandate_uid))]
    pub async fn delete_mandate(&self, params: MandateParams) -> Result<Response, ClientError> {
        self.ctx.send(self.mandate_request(params, true)?).await
    }

    fn mandate_request(
        &self,
        params: MandateParams,
        delete: bool,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, MANDATE)?;
        let url = self
            .ctx
            .api_url(&format!("{MANDATES}/{}", params.mandate_uid));
        let request = if delete {
            ApiRequest::delete(url)
        } else {
            ApiRequest::get(url)
        };
        Ok(request.headers(default_headers(&token)))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::resources::test_support::*;

    #[test]
    fn test_get_and_delete_share_the_path() {
        let client = MandateClient::new(context_with_token(TOKEN));
        let get = client
            .mandate_request(MandateParams::new(TEST_UID), false)
            .unwrap();
        let delete = client
            .mandate_request(MandateParams::new(TEST_UID), true)
            .unwrap();
        assert_eq!(get.method, Method::GET);
        assert_eq!(delete.method, Method::DELETE);
        assert_eq!(get.url, delete.url);
        assert_eq!(
            get.url,
            format!("http://localhost/api/v2/direct-debit/mandates/{TEST_UID}")
        );
    }
}

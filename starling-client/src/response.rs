//! Opt-in helpers for consuming a response body.
//!
//! Operations hand back the raw [`Response`] whatever its status. These helpers are for
//! callers who want a non-2xx status turned into [`ClientError::Api`] while reading the body.

use std::future::Future;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

pub trait ResponseExt {
    /// Decodes a 2xx JSON body, or fails with the status and body of any other response.
    fn json_body<T: DeserializeOwned>(self) -> impl Future<Output = Result<T, ClientError>> + Send;

    /// Reads a 2xx body as text, or fails with the status and body of any other response.
    fn text_body(self) -> impl Future<Output = Result<String, ClientError>> + Send;
}

impl ResponseExt for Response {
    async fn json_body<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let body = self.text_body().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn text_body(self) -> Result<String, ClientError> {
        let status = self.status();
        if status.is_success() {
            Ok(self.text().await?)
        } else {
            let body = self.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

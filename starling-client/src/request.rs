//! Request descriptor built fresh for every call.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Body of an outbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON; the `Content-Type` comes from the header set.
    Json(Value),
    /// Serialized as `application/x-www-form-urlencoded`.
    Form(Vec<(&'static str, String)>),
}

/// Everything needed to issue one API call: method, URL, headers, query and body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Replaces the header set.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Overrides the `Accept` header, e.g. for statement downloads.
    ///
    /// A value that is not a legal header value leaves the current `Accept` in place.
    pub fn accept(mut self, media_type: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(media_type) {
            self.headers.insert(ACCEPT, value);
        }
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn form(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.body = Some(RequestBody::Form(pairs));
        self
    }

    /// Returns the value of a query parameter, if set.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Converts the descriptor into a `reqwest` builder on the given client.
    pub fn into_builder(self, http: &Client) -> Result<RequestBuilder, serde_json::Error> {
        let mut builder = http
            .request(self.method, self.url.as_str())
            .headers(self.headers);
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        builder = match self.body {
            Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Form(pairs)) => builder.form(&pairs),
            None => builder,
        };
        Ok(builder)
    }
}

//! Header sets attached to every request.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

const APPLICATION_JSON: &str = "application/json";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// `Accept: application/json` and `Authorization: Bearer <token>`.
///
/// A token that is not a legal header value is left out rather than rejected;
/// checking the token is the validator's job.
pub fn default_headers(access_token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    match HeaderValue::from_str(&format!("Bearer {access_token}")) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Err(_) => tracing::warn!("access token is not a valid header value, sending without it"),
    }
    headers
}

/// [`default_headers`] plus `Content-Type: application/json`, for calls with a JSON body.
pub fn payload_headers(access_token: &str) -> HeaderMap {
    let mut headers = default_headers(access_token);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers
}

/// Headers for the OAuth token endpoint, which takes a form body and no bearer token.
pub fn form_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers("0123456789");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer 0123456789");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_payload_headers_extend_default_headers() {
        let headers = payload_headers("0123456789");
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[AUTHORIZATION], "Bearer 0123456789");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_empty_token_is_malformed_but_not_rejected() {
        let headers = default_headers("");
        assert_eq!(headers[AUTHORIZATION], "Bearer ");
    }

    #[test]
    fn test_illegal_token_is_dropped() {
        let headers = default_headers("bad\ntoken");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_form_headers() {
        let headers = form_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/x-www-form-urlencoded");
        assert!(headers.get(AUTHORIZATION).is_none());
    }
}

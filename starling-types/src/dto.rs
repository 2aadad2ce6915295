//! Request bodies sent to the API.

use serde::{Deserialize, Serialize};

use crate::domain::CurrencyAndAmount;

// ─────────────────────────────────────────────────────────────────────────────
// Card DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of every card control toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardControlRequest {
    pub enabled: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Savings goal DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalRequest {
    pub name: String,
    pub currency: String,
    pub target: CurrencyAndAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_encoded_photo: Option<String>,
}

/// Request to move money into or out of a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoalTransferRequest {
    pub amount: CurrencyAndAmount,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payee DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeeType {
    Individual,
    Business,
}

impl PayeeType {
    pub const NAMES: &'static [&'static str] = &["INDIVIDUAL", "BUSINESS"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankIdentifierType {
    SortCode,
    Swift,
    Iban,
    Aba,
    AbaWire,
    AbaAch,
}

impl BankIdentifierType {
    pub const NAMES: &'static [&'static str] =
        &["SORT_CODE", "SWIFT", "IBAN", "ABA", "ABA_WIRE", "ABA_ACH"];
}

/// A bank account attached to a new payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeeAccountCreationRequest {
    pub description: String,
    pub default_account: bool,
    /// ISO-3166 two letter country code
    pub country_code: String,
    /// Account number, IBAN or equivalent
    pub account_identifier: String,
    /// Sort code, BIC or equivalent
    pub bank_identifier: String,
    pub bank_identifier_type: BankIdentifierType,
}

/// Request to create a payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeeCreationRequest {
    pub payee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub payee_type: PayeeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// `yyyy-MM-dd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<PayeeAccountCreationRequest>>,
}

impl PayeeCreationRequest {
    /// Creates a request with only the mandatory fields set.
    pub fn new(payee_name: impl Into<String>, payee_type: PayeeType) -> Self {
        Self {
            payee_name: payee_name.into(),
            phone_number: None,
            payee_type,
            first_name: None,
            middle_name: None,
            last_name: None,
            business_name: None,
            date_of_birth: None,
            accounts: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a contact through the v1 API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub account_type: String,
    pub account_number: String,
    pub sort_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// OAuth DTOs
// ─────────────────────────────────────────────────────────────────────────────

pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";
pub const REFRESH_TOKEN_GRANT: &str = "refresh_token";

/// Form parameters posted to the OAuth token endpoint.
///
/// Each grant is its own variant, so authorization-code and refresh-token
/// fields never travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequest {
    AuthorizationCode {
        code: String,
        client_id: String,
        client_secret: String,
        redirect_uri: Option<String>,
    },
    RefreshToken {
        refresh_token: String,
        client_id: String,
        client_secret: String,
    },
}

impl TokenRequest {
    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenRequest::AuthorizationCode { .. } => AUTHORIZATION_CODE_GRANT,
            TokenRequest::RefreshToken { .. } => REFRESH_TOKEN_GRANT,
        }
    }

    /// Returns the form fields in wire order. Absent optionals are left out.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("grant_type", self.grant_type().to_string())];
        match self {
            TokenRequest::AuthorizationCode {
                code,
                client_id,
                client_secret,
                redirect_uri,
            } => {
                pairs.push(("code", code.clone()));
                pairs.push(("client_id", client_id.clone()));
                pairs.push(("client_secret", client_secret.clone()));
                if let Some(uri) = redirect_uri {
                    pairs.push(("redirect_uri", uri.clone()));
                }
            }
            TokenRequest::RefreshToken {
                refresh_token,
                client_id,
                client_secret,
            } => {
                pairs.push(("refresh_token", refresh_token.clone()));
                pairs.push(("client_id", client_id.clone()));
                pairs.push(("client_secret", client_secret.clone()));
            }
        }
        pairs
    }
}

//! # Starling Types
//!
//! Configuration, parameter validation and request bodies for the Starling Bank
//! API client. This crate performs no IO.
//!
//! - `config` - [`StarlingConfig`], shared read-only by every resource client
//! - `validation` - per-operation rule sets and the validator that checks them
//! - `domain` - small value types (amounts, card controls, statement formats)
//! - `dto` - JSON and form bodies sent to the API
//! - `error` - [`ValidationError`] and parse errors

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use config::StarlingConfig;
pub use domain::{CardControl, CurrencyAndAmount, StatementFormat};
pub use dto::*;
pub use error::{UnknownCardControl, UnknownStatementFormat, ValidationError};
pub use validation::{Field, Format, Primitive, Rule, Schema, validate, validate_params};

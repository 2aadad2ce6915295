//! # Starling Client SDK
//!
//! An async Rust client for the Starling Bank REST API.
//!
//! Each call validates its parameters, builds one HTTP request and hands back the raw
//! [`Response`]. Bodies are not decoded and non-2xx statuses are not errors; use
//! [`ResponseExt`] when you want either.
//!
//! ```no_run
//! use starling_client::{Starling, StarlingConfig};
//!
//! # async fn run() -> Result<(), starling_client::ClientError> {
//! let starling = Starling::new(StarlingConfig::sandbox().with_access_token("token"));
//! let accounts = starling.get_accounts(None).await?;
//! println!("{}", accounts.text().await?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod request;
pub mod resources;
pub mod response;
pub mod starling;

pub use error::ClientError;
pub use request::{ApiRequest, RequestBody};
pub use reqwest::Response;
pub use resources::account::{
    AccountClient, AccountParams, ConfirmationOfFundsParams, StatementPeriodParams,
    StatementRangeParams,
};
pub use resources::account_holder::AccountHolderClient;
pub use resources::address::AddressClient;
pub use resources::card::{CardClient, CardControlParams};
pub use resources::contact::{ContactClient, ContactParams, CreateContactParams};
pub use resources::customer::CustomerClient;
pub use resources::feed_item::{
    FeedItemClient, FeedItemParams, FeedItemsBetweenParams, FeedItemsChangedSinceParams,
};
pub use resources::identity::IdentityClient;
pub use resources::mandate::{MandateClient, MandateParams};
pub use resources::merchant::{MerchantClient, MerchantParams};
pub use resources::oauth::OAuthClient;
pub use resources::payee::{CreatePayeeParams, PayeeClient, PayeeParams};
pub use resources::payment::{
    PaymentClient, PaymentOrderParams, StandingOrderParams, StandingOrdersParams,
};
pub use resources::savings_goal::{
    CreateSavingsGoalParams, SavingsGoalClient, SavingsGoalParams, SavingsGoalTransferParams,
    SavingsGoalsParams,
};
pub use resources::transaction::{TransactionClient, TransactionParams, TransactionsParams};
pub use resources::who_am_i::WhoAmIClient;
pub use resources::{ResourceContext, TokenParams};
pub use response::ResponseExt;
pub use starling::Starling;

// Re-export the types crate for convenience
pub use starling_types;
pub use starling_types::{CardControl, StarlingConfig, StatementFormat, ValidationError};

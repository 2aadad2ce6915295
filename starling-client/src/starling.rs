//! The `Starling` facade: every resource client behind one configuration.

use std::sync::Arc;

use reqwest::{Client, Response};
use starling_types::StarlingConfig;

use crate::error::ClientError;
use crate::resources::account::AccountClient;
use crate::resources::account_holder::AccountHolderClient;
use crate::resources::address::AddressClient;
use crate::resources::card::CardClient;
use crate::resources::contact::ContactClient;
use crate::resources::customer::CustomerClient;
use crate::resources::feed_item::FeedItemClient;
use crate::resources::identity::IdentityClient;
use crate::resources::mandate::MandateClient;
use crate::resources::merchant::MerchantClient;
use crate::resources::oauth::OAuthClient;
use crate::resources::payee::PayeeClient;
use crate::resources::payment::PaymentClient;
use crate::resources::savings_goal::SavingsGoalClient;
use crate::resources::transaction::TransactionClient;
use crate::resources::who_am_i::WhoAmIClient;
use crate::resources::{ResourceContext, TokenParams};

/// Starling Bank API client.
///
/// Holds one client per resource, all sharing the same configuration and
/// connection pool. The convenience methods take an optional token and fall back
/// to the configured one.
#[derive(Debug, Clone)]
pub struct Starling {
    config: Arc<StarlingConfig>,
    pub account: AccountClient,
    pub account_holder: AccountHolderClient,
    pub address: AddressClient,
    pub card: CardClient,
    pub contact: ContactClient,
    pub customer: CustomerClient,
    pub feed_item: FeedItemClient,
    pub identity: IdentityClient,
    pub mandate: MandateClient,
    pub merchant: MerchantClient,
    pub oauth: OAuthClient,
    pub payee: PayeeClient,
    pub payment: PaymentClient,
    pub savings_goal: SavingsGoalClient,
    pub transaction: TransactionClient,
    pub who_am_i: WhoAmIClient,
}

impl Starling {
    /// Creates a client with its own HTTP connection pool.
    pub fn new(config: StarlingConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Creates a client on a caller-built `reqwest::Client`, e.g. one with timeouts.
    pub fn with_http_client(config: StarlingConfig, http: Client) -> Self {
        let config = Arc::new(config);
        let ctx = ResourceContext::new(Arc::clone(&config), http);
        Self {
            config,
            account: AccountClient::new(ctx.clone()),
            account_holder: AccountHolderClient::new(ctx.clone()),
            address: AddressClient::new(ctx.clone()),
            card: CardClient::new(ctx.clone()),
            contact: ContactClient::new(ctx.clone()),
            customer: CustomerClient::new(ctx.clone()),
            feed_item: FeedItemClient::new(ctx.clone()),
            identity: IdentityClient::new(ctx.clone()),
            mandate: MandateClient::new(ctx.clone()),
            merchant: MerchantClient::new(ctx.clone()),
            oauth: OAuthClient::new(ctx.clone()),
            payee: PayeeClient::new(ctx.clone()),
            payment: PaymentClient::new(ctx.clone()),
            savings_goal: SavingsGoalClient::new(ctx.clone()),
            transaction: TransactionClient::new(ctx.clone()),
            who_am_i: WhoAmIClient::new(ctx),
        }
    }

    pub fn config(&self) -> &StarlingConfig {
        &self.config
    }

    // ───── Convenience pass-throughs ─────

    pub async fn get_accounts(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.account
            .get_accounts(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_account_holder(
        &self,
        access_token: Option<&str>,
    ) -> Result<Response, ClientError> {
        self.account_holder
            .get_account_holder(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_addresses(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.address
            .get_addresses(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_cards(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.card
            .get_cards(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_customer(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.customer
            .get_customer(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_contacts(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.contact
            .get_contacts(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_me(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.who_am_i
            .get_me(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_token_identity(
        &self,
        access_token: Option<&str>,
    ) -> Result<Response, ClientError> {
        self.identity
            .get_token_identity(TokenParams::from_token(access_token))
            .await
    }

    pub async fn list_mandates(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.mandate
            .list_mandates(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_payees(&self, access_token: Option<&str>) -> Result<Response, ClientError> {
        self.payee
            .get_payees(TokenParams::from_token(access_token))
            .await
    }

    pub async fn get_access_token(
        &self,
        authorization_code: &str,
    ) -> Result<Response, ClientError> {
        self.oauth.get_access_token(authorization_code).await
    }

    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<Response, ClientError> {
        self.oauth.refresh_access_token(refresh_token).await
    }
}

impl Default for Starling {
    fn default() -> Self {
        Self::new(StarlingConfig::default())
    }
}

//! Cards and their controls.

use reqwest::Response;
use starling_types::validation::ACCESS_TOKEN;
use starling_types::{CardControl, CardControlRequest, Field, Format, Primitive, Rule, Schema};

use super::{ResourceContext, TokenParams};
use crate::error::ClientError;
use crate::http::payload_headers;
use crate::request::ApiRequest;

params! {
    /// Switches one control of a card on or off.
    #[derive(Default)]
    CardControlParams {
        card_uid: String,
        enabled: bool,
    }
}

impl CardControlParams {
    pub fn new(card_uid: impl Into<String>, enabled: bool) -> Self {
        Self {
            card_uid: card_uid.into(),
            enabled,
            ..Default::default()
        }
    }
}

const CARD_CONTROL: Schema = &[
    ACCESS_TOKEN,
    Field::new("cardUid", Rule::Format(Format::Uuid)),
    Field::new("enabled", Rule::Required(Primitive::Boolean)),
];

/// Client for `/api/v2/cards`.
#[derive(Debug, Clone)]
pub struct CardClient {
    ctx: ResourceContext,
}

impl CardClient {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lists the cards on the customer's accounts.
    pub async fn get_cards(&self, params: TokenParams) -> Result<Response, ClientError> {
        let request = self.ctx.token_only_get(params, "/api/v2/cards")?;
        self.ctx.send(request).await
    }

    /// Sets a card control. Every toggle below goes through here.
    #[tracing::instrument(
        skip(self, params),
        fields(card_uid = %params.card_uid, enabled = params.enabled)
    )]
    pub async fn update_card_control(
        &self,
        control: CardControl,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.ctx
            .send(self.control_request(control, params)?)
            .await
    }

    /// Locks (`enabled: false`) or unlocks the card.
    pub async fn update_card_lock(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::Lock, params).await
    }

    pub async fn update_card_atm(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::Atm, params).await
    }

    pub async fn update_card_online(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::Online, params).await
    }

    pub async fn update_card_mobile_wallet(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::MobileWallet, params)
            .await
    }

    pub async fn update_card_gambling(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::Gambling, params)
            .await
    }

    /// Contactless and chip-and-pin payments.
    pub async fn update_card_pos(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::Pos, params).await
    }

    pub async fn update_card_mag_stripe(
        &self,
        params: CardControlParams,
    ) -> Result<Response, ClientError> {
        self.update_card_control(CardControl::MagStripe, params)
            .await
    }

    fn control_request(
        &self,
        control: CardControl,
        params: CardControlParams,
    ) -> Result<ApiRequest, ClientError> {
        let (params, token) = self.ctx.authorize(params, CARD_CONTROL)?;
        let url = self.ctx.api_url(&format!(
            "/api/v2/cards/{}/controls/{}",
            params.card_uid,
            control.path_segment()
        ));
        let body = CardControlRequest {
            enabled: params.enabled,
        };
        Ok(ApiRequest::put(url)
            .headers(payload_headers(&token))
            .json(&body)?)
    }
}

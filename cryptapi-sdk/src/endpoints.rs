//! Gateway endpoint construction.
//!
//! Every endpoint has the shape `{base}{coin path}/{name}/?{query}`, where
//! `_` in a ticker separates path segments (`bep20_usdt` becomes
//! `bep20/usdt`). Unknown tickers are passed through verbatim; the gateway is
//! the authority on which ones exist.

use url::Url;

use crate::config::{GatewayConfig, MerchantConfig};
use crate::error::{ClientError, ConfigError};
use crate::objects::Priority;
use crate::params::{Params, merge_params, prepare_url};

/// Builds fully qualified gateway URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointBuilder {
    base_url: Url,
}

impl EndpointBuilder {
    pub fn new(gateway: &GatewayConfig) -> Self {
        Self {
            base_url: gateway.base_url().clone(),
        }
    }

    /// The merchant callback URL with its custom parameters attached.
    pub fn callback_url(cfg: &MerchantConfig) -> Result<String, ConfigError> {
        if cfg.callback_url().trim().is_empty() {
            return Err(ConfigError::MissingCallbackUrl);
        }
        Ok(prepare_url(cfg.callback_url(), cfg.callback_params()))
    }

    /// `{coin}/create/`: request a new payment address.
    pub fn address(&self, cfg: &MerchantConfig) -> Result<Url, ClientError> {
        let base = Params::from([
            ("address".to_string(), cfg.payout_address().to_string()),
            ("callback".to_string(), Self::callback_url(cfg)?),
        ]);
        let query = merge_params(&base, [cfg.gateway_options()]);
        self.endpoint(Some(cfg.coin()), "create", &query)
    }

    /// `{coin}/logs/`: callbacks delivered for this callback URL.
    pub fn logs(&self, cfg: &MerchantConfig) -> Result<Url, ClientError> {
        let query = Params::from([("callback".to_string(), Self::callback_url(cfg)?)]);
        self.endpoint(Some(cfg.coin()), "logs", &query)
    }

    /// `{coin}/qrcode/`: QR code for a payment address previously created
    /// for `cfg`.
    pub fn qrcode(
        &self,
        cfg: &MerchantConfig,
        payment_address: &str,
        value: Option<&str>,
        size: u32,
    ) -> Result<Url, ClientError> {
        Self::callback_url(cfg)?;
        if payment_address.is_empty() {
            return Err(ConfigError::MissingPaymentAddress.into());
        }

        let mut query = Params::from([
            ("address".to_string(), payment_address.to_string()),
            ("size".to_string(), size.to_string()),
        ]);
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            query.insert("value".to_string(), value.to_string());
        }
        self.endpoint(Some(cfg.coin()), "qrcode", &query)
    }

    /// `{coin}/convert/`: convert `value` of `from_coin` into `coin`.
    pub fn convert(&self, coin: &str, from_coin: &str, value: f64) -> Result<Url, ClientError> {
        let query = Params::from([
            ("from".to_string(), from_coin.to_string()),
            ("value".to_string(), value.to_string()),
        ]);
        self.endpoint(Some(coin), "convert", &query)
    }

    /// `{coin}/estimate/`: blockchain fee estimate.
    pub fn estimate(
        &self,
        coin: &str,
        addresses: u32,
        priority: &Priority,
    ) -> Result<Url, ClientError> {
        let query = Params::from([
            ("addresses".to_string(), addresses.to_string()),
            ("priority".to_string(), priority.as_str().to_string()),
        ]);
        self.endpoint(Some(coin), "estimate", &query)
    }

    /// `{coin}/info/`, or `info/` for every coin when `coin` is `None`.
    pub fn info(&self, coin: Option<&str>) -> Result<Url, ClientError> {
        self.endpoint(coin, "info", &Params::new())
    }

    /// `info/`: the listing the supported coins are extracted from.
    pub fn supported_coins(&self) -> Result<Url, ClientError> {
        self.info(None)
    }

    fn endpoint(&self, coin: Option<&str>, name: &str, query: &Params) -> Result<Url, ClientError> {
        let path = match coin.map(str::trim).filter(|c| !c.is_empty()) {
            Some(coin) => format!("./{}/{name}/", coin.replace('_', "/")),
            None => format!("./{name}/"),
        };
        let mut url = self.base_url.join(&path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }
}

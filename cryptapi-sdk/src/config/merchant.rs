//! Merchant configuration.

use crate::error::ConfigError;
use crate::params::{Params, is_truthy};

/// Gateway option that switches requests and callbacks to `POST`.
pub const POST_OPTION: &str = "post";

/// Everything the gateway needs to know about one payment context.
///
/// Immutable once built. A client caches the payment address it creates for
/// exactly this configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfig {
    coin: String,
    payout_address: String,
    callback_url: String,
    callback_params: Params,
    gateway_options: Params,
}

impl MerchantConfig {
    /// Start building a configuration.
    ///
    /// * `coin`: ticker such as `btc` or `bep20_usdt` (`bep20/usdt` is
    ///   accepted too).
    /// * `payout_address`: the merchant wallet funds are forwarded to.
    /// * `callback_url`: where the gateway notifies payment events.
    pub fn builder(
        coin: impl Into<String>,
        payout_address: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> MerchantConfigBuilder {
        MerchantConfigBuilder {
            coin: coin.into(),
            payout_address: payout_address.into(),
            callback_url: callback_url.into(),
            callback_params: Params::new(),
            gateway_options: Params::new(),
        }
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn payout_address(&self) -> &str {
        &self.payout_address
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Custom parameters echoed back on every callback.
    pub fn callback_params(&self) -> &Params {
        &self.callback_params
    }

    /// Pass-through gateway options such as `convert`, `multi_token`, `post`.
    pub fn gateway_options(&self) -> &Params {
        &self.gateway_options
    }

    /// Whether the `post` gateway option is set to a truthy value.
    pub fn uses_post(&self) -> bool {
        self.gateway_options
            .get(POST_OPTION)
            .is_some_and(|value| is_truthy(value))
    }
}

/// Builder returned by [`MerchantConfig::builder`].
#[derive(Debug, Clone)]
pub struct MerchantConfigBuilder {
    coin: String,
    payout_address: String,
    callback_url: String,
    callback_params: Params,
    gateway_options: Params,
}

impl MerchantConfigBuilder {
    /// Append a custom callback parameter. Re-adding a key replaces its
    /// value but keeps its position.
    pub fn callback_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.callback_params.insert(key.into(), value.to_string());
        self
    }

    /// Append several custom callback parameters.
    pub fn callback_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in params {
            self.callback_params.insert(key.into(), value.to_string());
        }
        self
    }

    /// Set a gateway option, e.g. `.option("convert", 1)`.
    pub fn option(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.gateway_options.insert(key.into(), value.to_string());
        self
    }

    /// Set several gateway options.
    pub fn options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in options {
            self.gateway_options.insert(key.into(), value.to_string());
        }
        self
    }

    /// Validate and build.
    ///
    /// The coin and payout address must be non-empty. An empty callback URL
    /// is accepted here and rejected when an endpoint that needs it is built.
    pub fn build(self) -> Result<MerchantConfig, ConfigError> {
        let coin = self.coin.trim();
        if coin.is_empty() {
            return Err(ConfigError::MissingCoin);
        }
        if self.payout_address.trim().is_empty() {
            return Err(ConfigError::MissingPayoutAddress);
        }

        Ok(MerchantConfig {
            coin: coin.replace('/', "_"),
            payout_address: self.payout_address,
            callback_url: self.callback_url,
            callback_params: self.callback_params,
            gateway_options: self.gateway_options,
        })
    }
}

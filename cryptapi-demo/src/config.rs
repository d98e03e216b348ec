//! TOML configuration for the demo binary.
//!
//! ```toml
//! [gateway]
//! base_url = "https://api.cryptapi.io/"
//!
//! [merchant]
//! coin = "bep20_usdt"
//! address = "0x..."
//! callback_url = "https://example.com/callback"
//!
//! [merchant.params]
//! order_id = "1345e13232"
//!
//! [merchant.options]
//! convert = 1
//! ```

use std::path::Path;

use cryptapi_sdk::{GatewayConfig, MerchantConfig, Priority};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("merchant.{section}.{key} must be a string, number or boolean")]
    UnsupportedValue { section: &'static str, key: String },

    #[error(transparent)]
    Merchant(#[from] cryptapi_sdk::ConfigError),
}

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    pub merchant: MerchantSection,
    #[serde(default)]
    pub demo: DemoSection,
}

/// Merchant section.
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantSection {
    pub coin: String,
    /// Payout address funds are forwarded to.
    pub address: String,
    pub callback_url: String,
    /// Custom parameters echoed back on the callback.
    #[serde(default)]
    pub params: toml::Table,
    /// Gateway options attached to address creation.
    #[serde(default)]
    pub options: toml::Table,
}

/// Inputs for the sample calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoSection {
    pub value: Option<String>,
    pub qr_size: u32,
    pub convert_from: String,
    pub convert_value: f64,
    pub estimate_addresses: u32,
    pub priority: Priority,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            value: None,
            qr_size: cryptapi_sdk::DEFAULT_QR_SIZE,
            convert_from: "usd".to_string(),
            convert_value: 10.0,
            estimate_addresses: 1,
            priority: Priority::Default,
        }
    }
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Build the SDK merchant configuration, with `coin` replacing the
    /// configured one when given.
    pub fn merchant_config(&self, coin: Option<&str>) -> Result<MerchantConfig, ConfigError> {
        let merchant = &self.merchant;
        let config = MerchantConfig::builder(
            coin.unwrap_or(&merchant.coin),
            &merchant.address,
            &merchant.callback_url,
        )
        .callback_params(render_table("params", &merchant.params)?)
        .options(render_table("options", &merchant.options)?)
        .build()?;
        Ok(config)
    }
}

/// Flatten a TOML table into string pairs. Booleans become `1` or `0`.
fn render_table(
    section: &'static str,
    table: &toml::Table,
) -> Result<Vec<(String, String)>, ConfigError> {
    table
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => if *b { "1" } else { "0" }.to_string(),
                _ => {
                    return Err(ConfigError::UnsupportedValue {
                        section,
                        key: key.clone(),
                    });
                }
            };
            Ok((key.clone(), rendered))
        })
        .collect()
}

//! Gateway endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Production CryptAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.cryptapi.io/";

/// Where the gateway API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGatewayConfig")]
pub struct GatewayConfig {
    /// Root URL every endpoint path is joined onto. Always ends with `/`.
    base_url: Url,
}

#[derive(Deserialize)]
struct RawGatewayConfig {
    #[serde(default)]
    base_url: Option<String>,
}

impl TryFrom<RawGatewayConfig> for GatewayConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGatewayConfig) -> Result<Self, Self::Error> {
        match raw.base_url {
            Some(url) => Self::new(&url),
            None => Ok(Self::default()),
        }
    }
}

fn default_base_url() -> Url {
    // Constant input, covered by `test_default_base_url`.
    #[allow(clippy::expect_used)]
    Url::parse(DEFAULT_BASE_URL).expect("valid default base url")
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl GatewayConfig {
    /// Point the clients at a different gateway root, e.g. a local mock.
    ///
    /// A missing trailing `/` is added so relative endpoint paths join below
    /// the given path instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot be a base".to_string(),
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

//! Blocking and async gateway clients.
//!
//! Each façade comes in two parts:
//!
//! * a *gateway* ([`BlockingGateway`], [`AsyncGateway`]) for the stateless
//!   operations (`get_info`, `get_supported_coins`, `get_estimate`) that need
//!   no merchant configuration;
//! * a *client* ([`BlockingClient`], [`AsyncClient`]) bound to one
//!   [`MerchantConfig`](crate::MerchantConfig), which owns a gateway and
//!   caches the payment address created by `get_address`.
//!
//! Both façades build the same URLs, send them once, and return the same
//! objects and [`ClientError`]s. Only the waiting differs.

mod blocking;
mod nonblocking;

pub use blocking::{BlockingClient, BlockingGateway};
pub use nonblocking::{AsyncClient, AsyncGateway};

use crate::config::MerchantConfig;
use crate::error::{ClientError, ConfigError};
use crate::objects::{AddressResult, QrResult};
use crate::qr::{QrEncoder, payment_uri};
use crate::transport::Method;

/// `POST` when the merchant set a truthy `post` option, `GET` otherwise.
fn request_method(config: &MerchantConfig) -> Method {
    if config.uses_post() {
        Method::Post
    } else {
        Method::Get
    }
}

/// The cached address, or the ordering error QR operations report without
/// one.
fn require_address(cached: Option<&AddressResult>) -> Result<&AddressResult, ClientError> {
    cached.ok_or(ClientError::InvalidConfig(ConfigError::MissingPaymentAddress))
}

fn render_qrcode(
    config: &MerchantConfig,
    cached: Option<&AddressResult>,
    value: Option<&str>,
    size: u32,
    encoder: &impl QrEncoder,
) -> Result<QrResult, ClientError> {
    let address = require_address(cached)?;
    let uri = payment_uri(config.coin(), address.address_in(), value);
    let image = encoder.encode(&uri, size)?;
    Ok(QrResult::new(image, uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrError;

    struct UppercaseEncoder;

    impl QrEncoder for UppercaseEncoder {
        fn encode(&self, uri: &str, size: u32) -> Result<String, QrError> {
            Ok(format!("{}@{size}", uri.to_uppercase()))
        }
    }

    fn config(post: &str) -> MerchantConfig {
        MerchantConfig::builder("btc", "1Payout", "https://example.com/cb")
            .option("post", post)
            .build()
            .unwrap()
    }

    #[test]
    fn test_request_method() {
        assert_eq!(request_method(&config("1")), Method::Post);
        assert_eq!(request_method(&config("0")), Method::Get);
    }

    #[test]
    fn test_render_requires_address() {
        let err = render_qrcode(&config("0"), None, None, 300, &UppercaseEncoder).unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidConfig(ConfigError::MissingPaymentAddress)
        ));
    }

    #[test]
    fn test_render_with_address() {
        let address: AddressResult =
            serde_json::from_value(serde_json::json!({"address_in": "1Pay"})).unwrap();
        let qr = render_qrcode(&config("0"), Some(&address), Some("0.5"), 200, &UppercaseEncoder)
            .unwrap();
        assert_eq!(qr.payment_uri(), Some("bitcoin:1Pay?amount=0.5"));
        assert_eq!(qr.qr_code(), Some("BITCOIN:1PAY?AMOUNT=0.5@200"));
    }
}

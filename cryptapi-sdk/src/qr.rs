//! Payment URIs and local QR rendering.
//!
//! The gateway renders QR codes itself through `{coin}/qrcode/`. The
//! [`QrEncoder`] capability covers rendering without a round trip, from the
//! same payment URI the gateway would embed.

/// Default edge length, in pixels, of a QR image.
pub const DEFAULT_QR_SIZE: u32 = 300;

/// Errors produced by a [`QrEncoder`].
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("data does not fit in a qr code: {0}")]
    Encode(String),

    #[error("invalid qr size {0}")]
    InvalidSize(u32),
}

/// Turns a payment URI into a base64 encoded image.
pub trait QrEncoder {
    fn encode(&self, uri: &str, size: u32) -> Result<String, QrError>;
}

impl<T: QrEncoder + ?Sized> QrEncoder for &T {
    fn encode(&self, uri: &str, size: u32) -> Result<String, QrError> {
        (**self).encode(uri, size)
    }
}

/// URI scheme wallets recognise for `coin`.
///
/// Tokens use their chain's scheme (`bep20_usdt` pays on `bep20`). Tickers
/// without a well-known scheme fall back to the chain prefix itself.
pub fn uri_scheme(coin: &str) -> &str {
    let chain = coin.split(&['_', '/'][..]).next().unwrap_or(coin);
    match chain {
        "btc" => "bitcoin",
        "bch" => "bitcoincash",
        "ltc" => "litecoin",
        "doge" => "dogecoin",
        "eth" | "erc20" => "ethereum",
        "trx" | "trc20" => "tron",
        "bep20" | "bnb" => "bsc",
        "pol" | "polygon" => "polygon",
        "sol" => "solana",
        "xmr" => "monero",
        other => other,
    }
}

/// Build `scheme:address[?amount=value]`.
pub fn payment_uri(coin: &str, address: &str, value: Option<&str>) -> String {
    let scheme = uri_scheme(coin);
    match value.filter(|v| !v.is_empty()) {
        Some(value) => format!("{scheme}:{address}?amount={}", urlencoding::encode(value)),
        None => format!("{scheme}:{address}"),
    }
}

#[cfg(feature = "qr")]
pub use svg_render::SvgQrEncoder;

#[cfg(feature = "qr")]
mod svg_render {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use qrcode::QrCode;
    use qrcode::render::svg;

    use super::{QrEncoder, QrError};

    /// Renders an SVG image and returns it base64 encoded.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SvgQrEncoder;

    impl QrEncoder for SvgQrEncoder {
        fn encode(&self, uri: &str, size: u32) -> Result<String, QrError> {
            if size == 0 {
                return Err(QrError::InvalidSize(size));
            }
            let code = QrCode::new(uri.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;
            let image = code
                .render::<svg::Color>()
                .min_dimensions(size, size)
                .build();
            Ok(STANDARD.encode(image.as_bytes()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_svg_render() {
            let encoded = SvgQrEncoder.encode("bitcoin:1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 300).unwrap();
            let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
            assert!(decoded.contains("<svg"));
            assert!(matches!(
                SvgQrEncoder.encode("bitcoin:x", 0),
                Err(QrError::InvalidSize(0))
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_uri() {
        assert_eq!(
            payment_uri("btc", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", Some("0.01")),
            "bitcoin:1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa?amount=0.01"
        );
        assert_eq!(payment_uri("bep20_usdt", "0xabc", None), "bsc:0xabc");
        assert_eq!(payment_uri("ltc", "Labc", Some("")), "litecoin:Labc");
        assert_eq!(payment_uri("newcoin", "addr", None), "newcoin:addr");
    }
}

//! Client SDK for the CryptAPI cryptocurrency payment gateway.
//!
//! The crate is layered bottom-up:
//!
//! * [`params`] merges parameter maps and prepares callback URLs.
//! * [`endpoints`] turns a [`MerchantConfig`] into fully qualified gateway URLs.
//! * [`executor`] dispatches a request over a [`transport`] and maps the
//!   response into JSON or a [`ClientError`].
//! * [`client`] exposes the public operations through a blocking and an
//!   async façade with the same contract.
//!
//! ```ignore
//! use cryptapi_sdk::{BlockingClient, MerchantConfig};
//!
//! let config = MerchantConfig::builder("bep20_usdt", "0xA6B7...", "https://example.com/cb")
//!     .callback_param("order_id", "12345")
//!     .option("convert", 1)
//!     .build()?;
//! let mut client = BlockingClient::new(config)?;
//! let address = client.get_address()?;
//! let qr = client.get_qrcode(Some("10"), cryptapi_sdk::DEFAULT_QR_SIZE)?;
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod objects;
pub mod params;
pub mod qr;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AsyncClient, AsyncGateway, BlockingClient, BlockingGateway};
pub use config::{GatewayConfig, MerchantConfig};
pub use error::{ClientError, ConfigError};
pub use objects::Priority;
pub use qr::DEFAULT_QR_SIZE;

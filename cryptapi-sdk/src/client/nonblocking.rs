//! Async façade: the same operations as the blocking one, each suspending
//! the calling task at its single network call.

use serde::de::DeserializeOwned;
use url::Url;

use super::{render_qrcode, request_method, require_address};
use crate::config::{GatewayConfig, MerchantConfig};
use crate::endpoints::EndpointBuilder;
use crate::error::ClientError;
use crate::executor::AsyncExecutor;
use crate::objects::{
    AddressResult, CoinInfo, ConversionResult, EstimateResult, LogsResult, Priority, QrResult,
    SupportedCoins,
};
use crate::qr::QrEncoder;
use crate::transport::{AsyncHttpTransport, Method};

/// Stateless gateway operations, usable without a merchant configuration.
#[derive(Debug, Clone)]
pub struct AsyncGateway<T> {
    endpoints: EndpointBuilder,
    executor: AsyncExecutor<T>,
}

#[cfg(feature = "client")]
impl AsyncGateway<crate::transport::ReqwestTransport> {
    /// Talk to the production gateway over the shared TLS client.
    pub fn new() -> Self {
        Self::with_config(&GatewayConfig::default())
    }

    pub fn with_config(gateway: &GatewayConfig) -> Self {
        Self::with_transport(gateway, crate::transport::ReqwestTransport::shared())
    }
}

#[cfg(feature = "client")]
impl Default for AsyncGateway<crate::transport::ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsyncHttpTransport> AsyncGateway<T> {
    pub fn with_transport(gateway: &GatewayConfig, transport: T) -> Self {
        Self {
            endpoints: EndpointBuilder::new(gateway),
            executor: AsyncExecutor::new(transport),
        }
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    /// Information about `coin`, or about every coin when `None`.
    pub async fn get_info(&self, coin: Option<&str>) -> Result<CoinInfo, ClientError> {
        self.execute(self.endpoints.info(coin)?, Method::Get).await
    }

    /// Ticker -> name for every supported coin and token.
    pub async fn get_supported_coins(&self) -> Result<SupportedCoins, ClientError> {
        let info: CoinInfo = self
            .execute(self.endpoints.supported_coins()?, Method::Get)
            .await?;
        Ok(SupportedCoins::from_info(&info))
    }

    /// Blockchain fee estimate for forwarding to `addresses` outputs.
    pub async fn get_estimate(
        &self,
        coin: &str,
        addresses: u32,
        priority: &Priority,
    ) -> Result<EstimateResult, ClientError> {
        self.execute(
            self.endpoints.estimate(coin, addresses, priority)?,
            Method::Get,
        )
        .await
    }

    async fn execute<R: DeserializeOwned>(&self, url: Url, method: Method) -> Result<R, ClientError> {
        self.executor.execute(url, method).await
    }
}

/// Async client bound to one [`MerchantConfig`].
///
/// `get_address` takes `&mut self` and stores its result only after the
/// response has been decoded, so dropping the future early leaves the cache
/// as it was.
#[derive(Debug, Clone)]
pub struct AsyncClient<T> {
    config: MerchantConfig,
    gateway: AsyncGateway<T>,
    address: Option<AddressResult>,
}

#[cfg(feature = "client")]
impl AsyncClient<crate::transport::ReqwestTransport> {
    /// Client for the production gateway over the shared TLS client.
    pub fn new(config: MerchantConfig) -> Self {
        Self::with_gateway(config, AsyncGateway::new())
    }
}

impl<T: AsyncHttpTransport> AsyncClient<T> {
    pub fn with_gateway(config: MerchantConfig, gateway: AsyncGateway<T>) -> Self {
        Self {
            config,
            gateway,
            address: None,
        }
    }

    pub fn config(&self) -> &MerchantConfig {
        &self.config
    }

    /// The stateless operations, on the same transport.
    pub fn gateway(&self) -> &AsyncGateway<T> {
        &self.gateway
    }

    /// The address cached by the last successful `get_address`.
    pub fn address(&self) -> Option<&AddressResult> {
        self.address.as_ref()
    }

    /// Shorthand for the cached `address_in`.
    pub fn payment_address(&self) -> Option<&str> {
        self.address.as_ref().map(AddressResult::address_in)
    }

    /// Create a payment address forwarding to the payout address and cache
    /// it.
    pub async fn get_address(&mut self) -> Result<AddressResult, ClientError> {
        let url = self.gateway.endpoints.address(&self.config)?;
        let address: AddressResult = self
            .gateway
            .execute(url, request_method(&self.config))
            .await?;
        tracing::info!(
            coin = self.config.coin(),
            address_in = address.address_in(),
            "Payment address created"
        );
        self.address = Some(address.clone());
        Ok(address)
    }

    /// Callbacks the gateway sent for this configuration's callback URL.
    pub async fn get_logs(&self) -> Result<LogsResult, ClientError> {
        let url = self.gateway.endpoints.logs(&self.config)?;
        self.gateway
            .execute(url, request_method(&self.config))
            .await
    }

    /// QR code for the cached payment address, optionally with an amount.
    pub async fn get_qrcode(&self, value: Option<&str>, size: u32) -> Result<QrResult, ClientError> {
        let address = require_address(self.address.as_ref())?;
        let url = self
            .gateway
            .endpoints
            .qrcode(&self.config, address.address_in(), value, size)?;
        self.gateway
            .execute(url, request_method(&self.config))
            .await
    }

    /// Render the QR code locally instead of asking the gateway.
    pub fn render_qrcode(
        &self,
        value: Option<&str>,
        size: u32,
        encoder: &impl QrEncoder,
    ) -> Result<QrResult, ClientError> {
        render_qrcode(&self.config, self.address.as_ref(), value, size, encoder)
    }

    /// Convert `value` of `from_coin` (e.g. `usd`) into this client's coin.
    pub async fn get_conversion(
        &self,
        from_coin: &str,
        value: f64,
    ) -> Result<ConversionResult, ClientError> {
        let url = self
            .gateway
            .endpoints
            .convert(self.config.coin(), from_coin, value)?;
        self.gateway
            .execute(url, request_method(&self.config))
            .await
    }
}

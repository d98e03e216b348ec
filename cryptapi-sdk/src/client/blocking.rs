//! Blocking façade: every operation is one blocking call on the calling
//! thread.

use serde::de::DeserializeOwned;
use url::Url;

use super::{render_qrcode, request_method, require_address};
use crate::config::{GatewayConfig, MerchantConfig};
use crate::endpoints::EndpointBuilder;
use crate::error::ClientError;
use crate::executor::BlockingExecutor;
use crate::objects::{
    AddressResult, CoinInfo, ConversionResult, EstimateResult, LogsResult, Priority, QrResult,
    SupportedCoins,
};
use crate::qr::QrEncoder;
use crate::transport::{HttpTransport, Method};

/// Stateless gateway operations, usable without a merchant configuration.
#[derive(Debug, Clone)]
pub struct BlockingGateway<T> {
    endpoints: EndpointBuilder,
    executor: BlockingExecutor<T>,
}

#[cfg(feature = "client")]
impl BlockingGateway<crate::transport::ReqwestBlockingTransport> {
    /// Talk to the production gateway over reqwest's blocking client.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(&GatewayConfig::default())
    }

    pub fn with_config(gateway: &GatewayConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(
            gateway,
            crate::transport::ReqwestBlockingTransport::new()?,
        ))
    }
}

impl<T: HttpTransport> BlockingGateway<T> {
    pub fn with_transport(gateway: &GatewayConfig, transport: T) -> Self {
        Self {
            endpoints: EndpointBuilder::new(gateway),
            executor: BlockingExecutor::new(transport),
        }
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    /// Information about `coin`, or about every coin when `None`.
    pub fn get_info(&self, coin: Option<&str>) -> Result<CoinInfo, ClientError> {
        self.execute(self.endpoints.info(coin)?, Method::Get)
    }

    /// Ticker -> name for every supported coin and token.
    pub fn get_supported_coins(&self) -> Result<SupportedCoins, ClientError> {
        let info: CoinInfo = self.execute(self.endpoints.supported_coins()?, Method::Get)?;
        Ok(SupportedCoins::from_info(&info))
    }

    /// Blockchain fee estimate for forwarding to `addresses` outputs.
    pub fn get_estimate(
        &self,
        coin: &str,
        addresses: u32,
        priority: &Priority,
    ) -> Result<EstimateResult, ClientError> {
        self.execute(
            self.endpoints.estimate(coin, addresses, priority)?,
            Method::Get,
        )
    }

    fn execute<R: DeserializeOwned>(&self, url: Url, method: Method) -> Result<R, ClientError> {
        self.executor.execute(url, method)
    }
}

/// Client bound to one [`MerchantConfig`].
///
/// `get_address` must succeed before `get_qrcode` or `render_qrcode`; the
/// created address is cached for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct BlockingClient<T> {
    config: MerchantConfig,
    gateway: BlockingGateway<T>,
    address: Option<AddressResult>,
}

#[cfg(feature = "client")]
impl BlockingClient<crate::transport::ReqwestBlockingTransport> {
    /// Client for the production gateway over reqwest's blocking client.
    pub fn new(config: MerchantConfig) -> Result<Self, ClientError> {
        Ok(Self::with_gateway(config, BlockingGateway::new()?))
    }
}

impl<T: HttpTransport> BlockingClient<T> {
    pub fn with_gateway(config: MerchantConfig, gateway: BlockingGateway<T>) -> Self {
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
    pub fn gateway(&self) -> &BlockingGateway<T> {
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
    pub fn get_address(&mut self) -> Result<AddressResult, ClientError> {
        let url = self.gateway.endpoints.address(&self.config)?;
        let address: AddressResult = self.gateway.execute(url, request_method(&self.config))?;
        tracing::info!(
            coin = self.config.coin(),
            address_in = address.address_in(),
            "Payment address created"
        );
        self.address = Some(address.clone());
        Ok(address)
    }

    /// Callbacks the gateway sent for this configuration's callback URL.
    pub fn get_logs(&self) -> Result<LogsResult, ClientError> {
        let url = self.gateway.endpoints.logs(&self.config)?;
        self.gateway.execute(url, request_method(&self.config))
    }

    /// QR code for the cached payment address, optionally with an amount.
    pub fn get_qrcode(&self, value: Option<&str>, size: u32) -> Result<QrResult, ClientError> {
        let address = require_address(self.address.as_ref())?;
        let url = self
            .gateway
            .endpoints
            .qrcode(&self.config, address.address_in(), value, size)?;
        self.gateway.execute(url, request_method(&self.config))
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
    pub fn get_conversion(&self, from_coin: &str, value: f64) -> Result<ConversionResult, ClientError> {
        let url = self
            .gateway
            .endpoints
            .convert(self.config.coin(), from_coin, value)?;
        self.gateway.execute(url, request_method(&self.config))
    }
}

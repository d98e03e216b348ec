//! Error taxonomy shared by the blocking and async clients.

/// Boxed source error carried by [`ClientError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by the SDK clients.
///
/// Both façades surface exactly this type, so a caller can handle one error
/// family regardless of which transport mode it picked.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A local precondition failed. Nothing was sent over the wire.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Transport-level failure (DNS, TLS, connection refused, …).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway answered with an error status, an error body, or a body
    /// that is not the expected JSON object.
    #[error("gateway error: status {status}, message: {message}")]
    Gateway { status: u16, message: String },

    /// An endpoint path could not be joined with the base URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// A QR image could not be rendered locally.
    #[error("qr error: {0}")]
    Qr(#[from] crate::qr::QrError),
}

impl ClientError {
    /// Wrap any transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Whether this error was raised before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Url(_) | Self::Qr(_))
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Local configuration and ordering violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("coin is missing")]
    MissingCoin,

    #[error("payout address is missing")]
    MissingPayoutAddress,

    #[error("callback url is missing")]
    MissingCallbackUrl,

    /// `get_qrcode` and `render_qrcode` need a prior successful `get_address`.
    #[error("no payment address yet, call get_address first")]
    MissingPaymentAddress,

    #[error("invalid gateway base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

//! HTTP transport capabilities.
//!
//! The executors only need "send this request, give me status and body".
//! [`HttpTransport`] blocks the calling thread; [`AsyncHttpTransport`]
//! suspends the calling task. The reqwest-backed implementations live in
//! [`reqwest_client`] behind the `client` feature.

#[cfg(feature = "client")]
pub mod reqwest_client;

#[cfg(feature = "client")]
pub use reqwest_client::{ReqwestBlockingTransport, ReqwestTransport};

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::ClientError;

/// HTTP method used for a gateway request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built gateway request. Parameters travel in the URL query for
/// both methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
}

/// Raw status and body as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP capability.
///
/// Implementations report connection-level failures as
/// [`ClientError::Transport`]; any status code received is a response.
pub trait HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Suspendable HTTP capability with the same contract as [`HttpTransport`].
#[async_trait]
pub trait AsyncHttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request)
    }
}

#[async_trait]
impl<T: AsyncHttpTransport + ?Sized> AsyncHttpTransport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request).await
    }
}

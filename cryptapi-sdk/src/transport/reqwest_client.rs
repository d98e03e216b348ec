//! reqwest-backed transports.
//!
//! The async transport shares one process-wide `reqwest::Client` whose
//! rustls configuration trusts the bundled webpki roots. Building that TLS
//! context happens once, on first use, and the client is cloned (a cheap
//! `Arc` bump) into every transport created with
//! [`ReqwestTransport::shared`]. The blocking transport uses reqwest's
//! default TLS backend and therefore the platform trust store.

use async_trait::async_trait;
use lazy_static::lazy_static;

use super::{AsyncHttpTransport, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::error::ClientError;

const USER_AGENT: &str = concat!("cryptapi-sdk-rust/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    static ref SHARED_CLIENT: reqwest::Client = build_shared_client();
}

fn build_shared_client() -> reqwest::Client {
    tracing::debug!("Building shared rustls client");
    reqwest::Client::builder()
        .use_rustls_tls()
        .tls_built_in_root_certs(true)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default reqwest client");
            reqwest::Client::new()
        })
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
    }
}

/// Async transport over `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Use the process-wide client and its TLS context.
    pub fn shared() -> Self {
        Self {
            http: SHARED_CLIENT.clone(),
        }
    }

    /// Use a caller-supplied client, e.g. one with a proxy or timeouts.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::shared()
    }
}

#[async_trait]
impl AsyncHttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let resp = self
            .http
            .request(to_reqwest_method(request.method), request.url)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Blocking transport over `reqwest::blocking::Client`.
///
/// Must not be created or used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct ReqwestBlockingTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestBlockingTransport {
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    pub fn with_http_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestBlockingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let resp = self
            .http
            .request(to_reqwest_method(request.method), request.url)
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(Method::Post), reqwest::Method::POST);
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("cryptapi-sdk-rust/"));
    }
}

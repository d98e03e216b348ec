//! In-process transport double used by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{AsyncHttpTransport, HttpRequest, HttpResponse, HttpTransport};

/// Replays canned responses by URL path and records every request.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    routes: Vec<(String, HttpResponse)>,
    fallback: Option<HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Answer every request with `200` and `body`.
    pub(crate) fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    /// Answer every request with `status` and `body`.
    pub(crate) fn status(status: u16, body: Value) -> Self {
        Self {
            fallback: Some(HttpResponse::new(status, body.to_string())),
            ..Self::default()
        }
    }

    /// Fail every request as if the host were unreachable.
    pub(crate) fn unreachable() -> Self {
        Self::default()
    }

    /// Answer requests whose path ends with `path_suffix` with `200` and `body`.
    pub(crate) fn route(mut self, path_suffix: &str, body: Value) -> Self {
        self.routes.push((
            path_suffix.to_string(),
            HttpResponse::new(200, body.to_string()),
        ));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let path = request.url.path().to_string();
        self.requests.lock().unwrap().push(request);

        self.routes
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| ClientError::transport("connection refused"))
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.respond(request)
    }
}

#[async_trait]
impl AsyncHttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        tokio::task::yield_now().await;
        self.respond(request)
    }
}

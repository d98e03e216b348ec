//! Request executors.
//!
//! [`BlockingExecutor`] and [`AsyncExecutor`] share one contract: send a
//! built endpoint once, then map the answer through [`interpret_response`].
//! There are no retries. A transport failure or gateway error reaches the
//! caller as-is.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;
use crate::transport::{AsyncHttpTransport, HttpRequest, HttpResponse, HttpTransport, Method};

/// Map a raw gateway response into `T` or a [`ClientError::Gateway`].
///
/// * non-2xx status: gateway error with the body's `error` field, or the raw
///   body when it is not JSON;
/// * `{"status": "error", ...}` on any status: gateway error;
/// * a 2xx body that does not deserialize into `T`: gateway error.
pub fn interpret_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    let status = response.status;
    let parsed = serde_json::from_slice::<Value>(&response.body);

    if let Ok(json) = &parsed {
        if json.get("status").and_then(Value::as_str) == Some("error") {
            return Err(ClientError::Gateway {
                status,
                message: error_message(json),
            });
        }
    }

    if !response.is_success() {
        let message = match &parsed {
            Ok(json) if json.get("error").is_some() => error_message(json),
            _ => String::from_utf8_lossy(&response.body).trim().to_string(),
        };
        return Err(ClientError::Gateway { status, message });
    }

    let json = parsed.map_err(|e| ClientError::Gateway {
        status,
        message: format!("malformed response body: {e}"),
    })?;
    serde_json::from_value(json).map_err(|e| ClientError::Gateway {
        status,
        message: format!("unexpected response: {e}"),
    })
}

fn error_message(json: &Value) -> String {
    match json.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => "unknown gateway error".to_string(),
    }
}

fn log_outcome<T>(method: Method, url: &Url, result: &Result<T, ClientError>) {
    match result {
        Ok(_) => tracing::debug!(%method, path = url.path(), "Gateway request succeeded"),
        Err(e @ ClientError::Gateway { .. }) => {
            tracing::warn!(%method, path = url.path(), error = %e, "Gateway reported an error")
        }
        Err(e) => tracing::warn!(%method, path = url.path(), error = %e, "Gateway request failed"),
    }
}

/// Runs requests on the calling thread.
#[derive(Debug, Clone)]
pub struct BlockingExecutor<T> {
    transport: T,
}

impl<T: HttpTransport> BlockingExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `url` once with `method` and decode the answer.
    pub fn execute<R: DeserializeOwned>(&self, url: Url, method: Method) -> Result<R, ClientError> {
        tracing::debug!(%method, path = url.path(), "Dispatching gateway request");
        let request = HttpRequest {
            method,
            url: url.clone(),
        };
        let result = self
            .transport
            .send(request)
            .and_then(|response| interpret_response(&response));
        log_outcome(method, &url, &result);
        result
    }
}

/// Runs requests by suspending the calling task.
#[derive(Debug, Clone)]
pub struct AsyncExecutor<T> {
    transport: T,
}

impl<T: AsyncHttpTransport> AsyncExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `url` once with `method` and decode the answer.
    ///
    /// The only suspension point is the transport call.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        url: Url,
        method: Method,
    ) -> Result<R, ClientError> {
        tracing::debug!(%method, path = url.path(), "Dispatching gateway request");
        let request = HttpRequest {
            method,
            url: url.clone(),
        };
        let result = match self.transport.send(request).await {
            Ok(response) => interpret_response(&response),
            Err(e) => Err(e),
        };
        log_outcome(method, &url, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::{Map, json};

    fn url() -> Url {
        Url::parse("https://api.cryptapi.io/btc/info/").unwrap()
    }

    #[test]
    fn test_success_body() {
        let response = HttpResponse::new(200, r#"{"coin": "Bitcoin"}"#);
        let map: Map<String, Value> = interpret_response(&response).unwrap();
        assert_eq!(map["coin"], "Bitcoin");
    }

    #[test]
    fn test_error_status_in_body() {
        let response = HttpResponse::new(200, r#"{"status": "error", "error": "msg"}"#);
        let err = interpret_response::<Value>(&response).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Gateway { status: 200, ref message } if message == "msg"
        ));
    }

    #[test]
    fn test_http_500_with_error_body() {
        let response = HttpResponse::new(500, r#"{"status": "error", "error": "msg"}"#);
        let err = interpret_response::<Value>(&response).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Gateway { status: 500, ref message } if message == "msg"
        ));
    }

    #[test]
    fn test_http_error_plain_body() {
        let response = HttpResponse::new(502, "Bad Gateway\n");
        let err = interpret_response::<Value>(&response).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Gateway { status: 502, ref message } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn test_malformed_success_body() {
        let response = HttpResponse::new(200, "<html>");
        assert!(matches!(
            interpret_response::<Value>(&response),
            Err(ClientError::Gateway { status: 200, .. })
        ));

        // Valid JSON, wrong shape.
        let response = HttpResponse::new(200, "[1, 2]");
        assert!(matches!(
            interpret_response::<Map<String, Value>>(&response),
            Err(ClientError::Gateway { status: 200, .. })
        ));
    }

    #[test]
    fn test_blocking_executor_records_request() {
        let transport = MockTransport::ok(json!({"coin": "Bitcoin"}));
        let executor = BlockingExecutor::new(&transport);
        let value: Value = executor.execute(url(), Method::Post).unwrap();
        assert_eq!(value, json!({"coin": "Bitcoin"}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, url());
    }

    #[test]
    fn test_blocking_executor_transport_error() {
        let transport = MockTransport::unreachable();
        let executor = BlockingExecutor::new(&transport);
        assert!(matches!(
            executor.execute::<Value>(url(), Method::Get),
            Err(ClientError::Transport(_))
        ));
        // No retries.
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_async_executor_matches_blocking() {
        let body = json!({"coin": "Bitcoin", "fee_percent": "1"});
        let transport = std::sync::Arc::new(MockTransport::ok(body.clone()));

        let blocking: Value = BlockingExecutor::new(transport.clone())
            .execute(url(), Method::Get)
            .unwrap();
        let nonblocking: Value = AsyncExecutor::new(transport.clone())
            .execute(url(), Method::Get)
            .await
            .unwrap();

        assert_eq!(blocking, nonblocking);
        assert_eq!(transport.requests().len(), 2);
    }
}

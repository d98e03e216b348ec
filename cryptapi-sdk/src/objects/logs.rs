use serde_json::Value;

use super::gateway_object;

gateway_object! {
    /// Response of `{coin}/logs/`: every callback sent for the callback URL.
    LogsResult
}

impl LogsResult {
    /// `"success"` or `"error"`.
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    /// Callback records, oldest first. Each carries `txid_in`, `value`,
    /// `confirmations` and the echoed custom parameters.
    pub fn callbacks(&self) -> &[Value] {
        self.get("callbacks")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `{coin}/create/`.
///
/// Deserialization fails unless `address_in` is a non-empty string, so a
/// cached `AddressResult` always carries a usable payment address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AddressResult {
    address_in: String,
    fields: Map<String, Value>,
}

impl AddressResult {
    /// The payment address customers pay into.
    pub fn address_in(&self) -> &str {
        &self.address_in
    }

    /// The payout address funds are forwarded to.
    pub fn address_out(&self) -> Option<&str> {
        self.fields.get("address_out").and_then(Value::as_str)
    }

    /// The callback URL as registered by the gateway.
    pub fn callback_url(&self) -> Option<&str> {
        self.fields.get("callback_url").and_then(Value::as_str)
    }

    /// Block explorer link for the payment address.
    pub fn address_url(&self) -> Option<&str> {
        self.fields.get("address_url").and_then(Value::as_str)
    }

    pub fn minimum_confirmations(&self) -> Option<u64> {
        self.fields
            .get("minimum_confirmations")
            .and_then(super::scalar)
            .and_then(|v| v.parse().ok())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for AddressResult {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("address_in").and_then(Value::as_str) {
            Some(address) if !address.is_empty() => Ok(Self {
                address_in: address.to_string(),
                fields,
            }),
            _ => Err("response has no `address_in`".to_string()),
        }
    }
}

impl From<AddressResult> for Map<String, Value> {
    fn from(result: AddressResult) -> Self {
        result.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse() {
        let body = json!({
            "address_in": "14PqCsA7KMgseZMPwg6mJy754MtQkrgszu",
            "address_out": "1H6ZZpRmMnrw8ytepV3BYwMjYYnEkWDqVP",
            "callback_url": "https://example.com/cb?order_id=12345",
            "address_url": "https://blockchair.com/bitcoin/address/14PqCsA7KMgseZMPwg6mJy754MtQkrgszu",
            "minimum_confirmations": 1,
            "priority": "default",
            "status": "success"
        });
        let result: AddressResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(result.address_in(), "14PqCsA7KMgseZMPwg6mJy754MtQkrgszu");
        assert_eq!(result.address_out(), Some("1H6ZZpRmMnrw8ytepV3BYwMjYYnEkWDqVP"));
        assert_eq!(result.minimum_confirmations(), Some(1));
        assert_eq!(result.get("priority"), Some(&json!("default")));

        // Unknown fields and ordering survive a round trip.
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn test_missing_address_in() {
        assert!(serde_json::from_value::<AddressResult>(json!({"status": "success"})).is_err());
        assert!(serde_json::from_value::<AddressResult>(json!({"address_in": ""})).is_err());
    }
}

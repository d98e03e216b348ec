//! Gateway response objects and request enums.
//!
//! Responses are kept as the JSON objects the gateway returned, wrapped in a
//! type per operation with accessors for the documented fields. Unknown
//! fields survive untouched and serialize back in their original order.

pub mod address;
pub mod callback;
pub mod info;
pub mod logs;
pub mod qrcode;
pub mod rates;

pub use address::AddressResult;
pub use callback::{CallbackError, CallbackPayload};
pub use info::{CoinInfo, SupportedCoins};
pub use logs::LogsResult;
pub use qrcode::QrResult;
pub use rates::{ConversionResult, EstimateResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fee priority accepted by the estimate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Default,
    Fast,
    Fastest,
    /// Chain-specific priority names, passed through verbatim.
    #[serde(untagged)]
    Custom(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Fast => "fast",
            Self::Fastest => "fastest",
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a scalar JSON value the way the gateway documents it.
///
/// The gateway is not consistent about quoting numbers, so both `"0.1"` and
/// `0.1` come back as `"0.1"`.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Declares a transparent wrapper around a gateway JSON object.
macro_rules! gateway_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(serde_json::Map<String, serde_json::Value>);

        impl $name {
            /// Raw field access.
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }

            pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
                &self.0
            }

            pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
                self.0
            }

            #[allow(dead_code)]
            fn str_field(&self, key: &str) -> Option<&str> {
                self.0.get(key).and_then(serde_json::Value::as_str)
            }

            #[allow(dead_code)]
            fn scalar_field(&self, key: &str) -> Option<String> {
                self.0.get(key).and_then($crate::objects::scalar)
            }
        }

        impl From<serde_json::Map<String, serde_json::Value>> for $name {
            fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
                Self(map)
            }
        }
    };
}

pub(crate) use gateway_object;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(Priority::default().as_str(), "default");
        assert_eq!(Priority::Custom("economic".into()).to_string(), "economic");
        assert_eq!(
            serde_json::from_str::<Priority>(r#""fastest""#).unwrap(),
            Priority::Fastest
        );
        assert_eq!(
            serde_json::from_str::<Priority>(r#""economic""#).unwrap(),
            Priority::Custom("economic".into())
        );
    }

    #[test]
    fn test_scalar() {
        assert_eq!(scalar(&serde_json::json!("0.1")).as_deref(), Some("0.1"));
        assert_eq!(scalar(&serde_json::json!(3)).as_deref(), Some("3"));
        assert_eq!(scalar(&serde_json::json!(null)), None);
    }
}

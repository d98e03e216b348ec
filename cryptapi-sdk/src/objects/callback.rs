//! Inbound payment callbacks.
//!
//! The gateway calls the prepared callback URL with the payment details as
//! query parameters (`GET`) or as a form body (`POST`, when the `post`
//! option is set). The merchant's own parameters are echoed back alongside.

use indexmap::IndexMap;

/// Errors produced while reading a callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("missing callback field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value `{value}` for callback field `{field}`")]
    InvalidField { field: &'static str, value: String },
}

/// A payment notification sent by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackPayload {
    /// Unique id of this callback, used for deduplication.
    pub uuid: Option<String>,
    pub address_in: String,
    pub address_out: String,
    pub coin: String,
    pub confirmations: u64,
    pub txid_in: String,
    /// Forwarding transaction, only set once funds left the payment address.
    pub txid_out: Option<String>,
    /// Amount received, in the smallest unit of the coin.
    pub value: String,
    /// Amount received, in the coin itself.
    pub value_coin: Option<String>,
    /// `true` for the unconfirmed notification sent when the transaction is
    /// first seen.
    pub pending: bool,
    /// Parameters added by the merchant to the callback URL, in order.
    pub custom: IndexMap<String, String>,
}

impl CallbackPayload {
    /// Parse a callback query string or `application/x-www-form-urlencoded`
    /// body. A leading `?` is ignored.
    pub fn from_query(query: &str) -> Result<Self, CallbackError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut fields: IndexMap<String, String> =
            url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();

        let mut take = |name: &'static str| fields.shift_remove(name);
        let required = |value: Option<String>, name: &'static str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or(CallbackError::MissingField(name))
        };

        let uuid = take("uuid");
        let address_in = required(take("address_in"), "address_in")?;
        let address_out = required(take("address_out"), "address_out")?;
        let coin = required(take("coin"), "coin")?;
        let confirmations_raw = required(take("confirmations"), "confirmations")?;
        let txid_in = required(take("txid_in"), "txid_in")?;
        let txid_out = take("txid_out").filter(|v| !v.is_empty());
        let value = required(take("value"), "value")?;
        let value_coin = take("value_coin");
        let pending_raw = take("pending");

        let confirmations = confirmations_raw.parse::<u64>().map_err(|_| CallbackError::InvalidField {
            field: "confirmations",
            value: confirmations_raw.clone(),
        })?;
        let pending = match pending_raw.as_deref() {
            None | Some("") | Some("0") => false,
            Some("1") => true,
            Some(other) => {
                return Err(CallbackError::InvalidField {
                    field: "pending",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            uuid,
            address_in,
            address_out,
            coin,
            confirmations,
            txid_in,
            txid_out,
            value,
            value_coin,
            pending,
            custom: fields,
        })
    }

    /// Whether this notification is for a transaction that is still
    /// unconfirmed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIRMED: &str = "?uuid=afe11d7c-aaa7-4e5b-b0a5-1d9e09a8c3e7\
        &address_in=14PqCsA7KMgseZMPwg6mJy754MtQkrgszu\
        &address_out=1H6ZZpRmMnrw8ytepV3BYwMjYYnEkWDqVP\
        &txid_in=a2174ffd39289100709f2a07b6c0a1ab6c6ed2a8f0c2d2d6fb1c6e4a8f3e1a0b\
        &txid_out=b3285eea40390211810a3b18c7d1b2bc7d7fe3b9a1d3e3e7ac2d7f5b9a4f2b1c\
        &confirmations=3&value=1000000&value_coin=0.01&coin=btc&pending=0\
        &order_id=12345&note=hello%20world";

    #[test]
    fn test_confirmed_callback() {
        let payload = CallbackPayload::from_query(CONFIRMED).unwrap();
        assert_eq!(payload.address_in, "14PqCsA7KMgseZMPwg6mJy754MtQkrgszu");
        assert_eq!(payload.coin, "btc");
        assert_eq!(payload.confirmations, 3);
        assert_eq!(payload.value, "1000000");
        assert_eq!(payload.value_coin.as_deref(), Some("0.01"));
        assert!(payload.txid_out.is_some());
        assert!(!payload.is_pending());

        let custom: Vec<(&str, &str)> = payload
            .custom
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(custom, vec![("order_id", "12345"), ("note", "hello world")]);
    }

    #[test]
    fn test_pending_form_body() {
        let body = "address_in=0xin&address_out=0xout&txid_in=0xtx\
            &confirmations=0&value=5&coin=bep20_usdt&pending=1";
        let payload = CallbackPayload::from_query(body).unwrap();
        assert!(payload.is_pending());
        assert_eq!(payload.txid_out, None);
        assert_eq!(payload.uuid, None);
        assert!(payload.custom.is_empty());
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            CallbackPayload::from_query("address_in=a&address_out=b&coin=btc"),
            Err(CallbackError::MissingField("confirmations"))
        );
    }

    #[test]
    fn test_invalid_confirmations() {
        let err = CallbackPayload::from_query(
            "address_in=a&address_out=b&coin=btc&confirmations=many&txid_in=t&value=1",
        )
        .unwrap_err();
        assert_eq!(
            err,
            CallbackError::InvalidField {
                field: "confirmations",
                value: "many".to_string()
            }
        );
    }
}

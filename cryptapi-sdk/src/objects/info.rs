use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::gateway_object;

gateway_object! {
    /// Response of `{coin}/info/` or of the global `info/` listing.
    CoinInfo
}

impl CoinInfo {
    /// Human-readable coin name, present on per-coin responses.
    pub fn coin(&self) -> Option<&str> {
        self.str_field("coin")
    }

    pub fn minimum_transaction_coin(&self) -> Option<String> {
        self.scalar_field("minimum_transaction_coin")
    }

    pub fn fee_percent(&self) -> Option<String> {
        self.scalar_field("fee_percent")
    }
}

/// Ticker -> display name for every coin and token the gateway supports.
///
/// Tokens are keyed `"{chain}/{ticker}"`, e.g. `"bep20/usdt"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedCoins(IndexMap<String, String>);

impl SupportedCoins {
    /// Extract the supported coins from the global `info/` listing.
    ///
    /// Every top-level entry that is an object with a `coin` field is a
    /// native coin. Entries under `tokens.{chain}` are tokens on that chain.
    pub fn from_info(info: &CoinInfo) -> Self {
        let mut coins = IndexMap::new();

        for (ticker, entry) in info.as_map() {
            if let Some(name) = entry.get("coin").and_then(Value::as_str) {
                coins.insert(ticker.clone(), name.to_string());
            }
        }

        if let Some(chains) = info.get("tokens").and_then(Value::as_object) {
            for (chain, tokens) in chains {
                let Some(tokens) = tokens.as_object() else {
                    continue;
                };
                for (ticker, token) in tokens {
                    let name = token
                        .get("coin")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    coins.insert(format!("{chain}/{ticker}"), name.to_string());
                }
            }
        }

        Self(coins)
    }

    pub fn get(&self, ticker: &str) -> Option<&str> {
        self.0.get(ticker).map(String::as_str)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.0.contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_info() {
        let info: CoinInfo = serde_json::from_value(json!({
            "btc": {"coin": "Bitcoin", "ticker": "btc"},
            "ltc": {"coin": "Litecoin", "ticker": "ltc"},
            "tokens": {
                "bep20": {
                    "usdt": {"coin": "USDT", "ticker": "usdt"},
                    "busd": {"ticker": "busd"}
                },
                "broken": "not an object"
            },
            "fee_tiers": [{"minimum": 0, "fee": 0.01}]
        }))
        .unwrap();

        let coins = SupportedCoins::from_info(&info);
        let pairs: Vec<(&str, &str)> = coins.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("btc", "Bitcoin"),
                ("ltc", "Litecoin"),
                ("bep20/usdt", "USDT"),
                ("bep20/busd", ""),
            ]
        );
        assert!(coins.contains("bep20/usdt"));
        assert_eq!(coins.get("btc"), Some("Bitcoin"));
    }

    #[test]
    fn test_coin_info_accessors() {
        let info: CoinInfo = serde_json::from_value(json!({
            "coin": "Bitcoin",
            "minimum_transaction_coin": "0.00008000",
            "fee_percent": 1
        }))
        .unwrap();
        assert_eq!(info.coin(), Some("Bitcoin"));
        assert_eq!(info.minimum_transaction_coin().as_deref(), Some("0.00008000"));
        assert_eq!(info.fee_percent().as_deref(), Some("1"));
    }
}

use super::gateway_object;

gateway_object! {
    /// Response of `{coin}/convert/`.
    ConversionResult
}

impl ConversionResult {
    /// The converted amount in the client's coin.
    pub fn value_coin(&self) -> Option<String> {
        self.scalar_field("value_coin")
    }

    pub fn exchange_rate(&self) -> Option<String> {
        self.scalar_field("exchange_rate")
    }
}

gateway_object! {
    /// Response of `{coin}/estimate/`.
    EstimateResult
}

impl EstimateResult {
    /// Estimated blockchain fee in the coin itself.
    pub fn estimated_cost(&self) -> Option<String> {
        self.scalar_field("estimated_cost")
    }

    pub fn estimated_cost_usd(&self) -> Option<String> {
        self.scalar_field("estimated_cost_usd")
    }
}

use super::gateway_object;

gateway_object! {
    /// Response of `{coin}/qrcode/`, or the output of a local render.
    QrResult
}

impl QrResult {
    /// Assemble a result from a locally rendered image.
    pub fn new(qr_code: String, payment_uri: String) -> Self {
        let mut map = serde_json::Map::new();
        map.insert("qr_code".to_string(), qr_code.into());
        map.insert("payment_uri".to_string(), payment_uri.into());
        Self(map)
    }

    /// Base64 encoded image.
    pub fn qr_code(&self) -> Option<&str> {
        self.str_field("qr_code")
    }

    /// The URI encoded in the image, e.g. `bitcoin:1A1z...?amount=0.1`.
    pub fn payment_uri(&self) -> Option<&str> {
        self.str_field("payment_uri")
    }
}

//! Configuration types for the CryptAPI clients.
//!
//! These types hold validated values only. Loading them from files or the
//! environment is left to the embedding application.

mod gateway;
mod merchant;

pub use gateway::{DEFAULT_BASE_URL, GatewayConfig};
pub use merchant::{MerchantConfig, MerchantConfigBuilder};

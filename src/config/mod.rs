//! Configuration models loaded once at startup.

pub mod dispatch;

pub use dispatch::{DispatchConfig, MapConfig, RandomProviderConfig, ServerConfig};

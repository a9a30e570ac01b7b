// Adapters layer: concrete implementations for external systems (relay, storage).

pub mod relay;
pub mod storage;

pub use relay::HttpFormRelay;
pub use storage::LocalStorage;

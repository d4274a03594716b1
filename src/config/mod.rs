pub mod settings;

pub use settings::{AppConfig, RetrySettings, StoreSettings};

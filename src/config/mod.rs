//! Display settings loading and validation.
mod loader;
mod types;

pub use loader::load_settings;
pub use types::{
    ConfigError,
    DisplaySettings,
    ValidationError,
};

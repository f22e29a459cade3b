mod env_overrides;
mod loader;
mod locale;
#[cfg(test)]
mod test_env;
mod types;

pub use locale::SUPPORTED_LOCALES;
pub use types::{Config, GeminiConfig, LoggingConfig};

//! Configuration loading.
//!
//! Settings come from an optional `gitlair.toml` file, with defaults for
//! everything except the repository owner. A few values may be overridden
//! from the environment after the file is read.

mod error;
mod policy;
mod settings;

pub use error::ConfigError;
pub use policy::MalformedLinePolicy;
pub use settings::{
    default_api_base, default_bot_login, default_concurrency, Settings, API_BASE_ENV,
};

//! Configuration loading and validation.
//!
//! Configuration lives in a TOML file under the platform config directory.
//! A missing file is not an error: every field has a default, including the
//! hardcoded backend fallback of `http://localhost:3000`.

mod loader;
mod types;

pub use loader::{ConfigError, BACKEND_URL_ENV};
pub use types::{BackendConfig, Config, FormDefaults};

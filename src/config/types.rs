use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub form: FormDefaults,
}

/// Where to reach the generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (scheme + host + port). The generation
    /// endpoint path is appended by the client.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Initial values shown in the form on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Desired length in minutes. The UI steps this in increments of 5
    /// within 5-60, but any positive value is accepted.
    #[serde(default = "default_length_minutes")]
    pub length_minutes: u32,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_topic() -> String {
    "Introduction to Quantum Computing".to_string()
}

fn default_audience() -> String {
    "University Students (CS Major)".to_string()
}

fn default_length_minutes() -> u32 {
    15
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            audience: default_audience(),
            length_minutes: default_length_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            form: FormDefaults::default(),
        }
    }
}

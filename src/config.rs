//! Server configuration
//!
//! Layered with figment, later layers win:
//! 1. Built-in defaults
//! 2. Optional TOML file
//! 3. `GOOGLE_API_KEY` / `OPENAI_API_KEY`
//! 4. `BOUQUETD_*` environment variables (`__` separates nested keys,
//!    e.g. `BOUQUETD_GEMINI__IMAGE_MODEL`)

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Largest accepted request body; uploads arrive base64 encoded
    pub max_body_bytes: usize,
    /// Per-attempt timeout for provider calls
    pub request_timeout_secs: u64,
    pub gemini: GeminiConfig,
    pub openai: OpenAiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_body_bytes: 25 * 1024 * 1024,
            request_timeout_secs: 120,
            gemini: GeminiConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

/// Gemini `generateContent` settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Model used for bouquet and composite images
    pub image_model: String,
    /// Model used to read reference photos
    pub vision_model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            vision_model: "gemini-2.0-flash-exp".to_string(),
        }
    }
}

/// OpenAI image edit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub edit_model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            edit_model: "gpt-image-1.5".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the
    /// environment
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["GOOGLE_API_KEY"])
                    .map(|_| "gemini.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "openai.api_key".into()),
            )
            .merge(Env::prefixed("BOUQUETD_").split("__"))
            .extract()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

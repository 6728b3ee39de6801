// Configuration structs

use std::path::PathBuf;

use super::constants;

/// Top-level configuration, assembled once at startup and passed down
/// explicitly. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key
    pub api_key: String,

    /// Path to the student records JSON file
    pub data_file: PathBuf,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Chat completion configuration
    pub chat: ChatConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000")
    pub bind_address: String,

    /// Directory served as the site root (landing page). `None` disables
    /// static serving, which is how the integration tests run.
    pub static_dir: Option<PathBuf>,

    /// Directory served under `/assets`, if present
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", constants::DEFAULT_PORT),
            static_dir: None,
            assets_dir: None,
        }
    }
}

/// Chat completion configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Model identifier sent to the completion API
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: constants::DEFAULT_MODEL.to_string(),
            temperature: constants::DEFAULT_TEMPERATURE,
        }
    }
}

// src/config.rs
/// Model and endpoint the production deployment runs against.
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl AppConfig {
    /// Load configuration from the process environment. A missing API key is
    /// not fatal at startup: the chat handler reports it as a configuration
    /// error on the request that needs it.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            api_base: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

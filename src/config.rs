use anyhow::Result;

pub const DEFAULT_GATEWAY_URL: &str = "https://api.keywordsai.co/api/v1/chat/completions";

/// Process-wide configuration, read from the environment once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gateway_url: String,
    /// Keywords AI credential. When absent the server still starts, but
    /// /chat answers with a 500 until the key is configured.
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PORT value: {}", raw))?,
            Err(_) => 8000,
        };

        let gateway_url =
            std::env::var("KEYWORDS_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());

        let api_key = std::env::var("KEYWORDS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Ok(Self {
            host,
            port,
            gateway_url,
            api_key,
        })
    }
}

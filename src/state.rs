use std::sync::Arc;

use crate::config::Config;
use crate::gateway::GatewayClient;
use crate::prompts::PromptRegistry;

/// Shared per-request state. Everything here is immutable after startup;
/// requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub prompts: Arc<PromptRegistry>,
    /// None when no API key was configured at startup.
    pub gateway: Option<Arc<GatewayClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = config
            .api_key
            .clone()
            .map(|key| Arc::new(GatewayClient::new(config.gateway_url.clone(), key)));

        Self {
            config,
            prompts: Arc::new(PromptRegistry::new()),
            gateway,
        }
    }
}

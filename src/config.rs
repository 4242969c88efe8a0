use serde::Deserialize;

use crate::services::ResponseOrdering;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendations service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Drop responses that are not the latest for their action
    #[serde(default)]
    pub discard_stale_responses: bool,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn response_ordering(&self) -> ResponseOrdering {
        if self.discard_stale_responses {
            ResponseOrdering::LatestPerAction
        } else {
            ResponseOrdering::ArrivalOrder
        }
    }
}

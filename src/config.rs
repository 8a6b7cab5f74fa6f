use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/cleanzy.json";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "CLEANZY_API_URL";

/// Which chat links count as in-app navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Host (and port) of the web app, e.g. `localhost:5173`.
    #[serde(default = "default_local_origin")]
    pub local_origin: String,
    #[serde(default = "default_internal_paths")]
    pub internal_paths: Vec<String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            local_origin: default_local_origin(),
            internal_paths: default_internal_paths(),
        }
    }
}

fn default_local_origin() -> String {
    "localhost:5173".to_string()
}

fn default_internal_paths() -> Vec<String> {
    vec!["/booking".to_string(), "/dashboard".to_string()]
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub links: LinkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            links: LinkConfig::default(),
        }
    }
}

impl AppConfig {
    /// Applies the environment override, then the command-line one.
    pub fn with_overrides(mut self, env_api_url: Option<String>, cli_api_url: Option<String>) -> Self {
        if let Some(url) = cli_api_url.or(env_api_url).filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

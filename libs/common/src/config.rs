//! Client configuration loaded from environment variables

use std::path::PathBuf;

use crate::error::{ClientError, ClientResult};

/// Default backend base URL, matching the development deployment
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Session file location relative to the home directory
const DEFAULT_SESSION_FILE: &str = ".cancervisionhub/session.json";

/// Client configuration
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL of the backend REST API, without a trailing slash
    pub base_url: String,
    /// Path of the persisted session file
    pub session_file: PathBuf,
}

impl HubConfig {
    /// Create a new HubConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HUB_API_BASE_URL`: Backend base URL (default: `http://127.0.0.1:8000`)
    /// - `HUB_SESSION_FILE`: Session file path (default:
    ///   `$HOME/.cancervisionhub/session.json`, or relative to the working
    ///   directory when `HOME` is not set)
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var("HUB_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err(ClientError::Configuration(
                "HUB_API_BASE_URL must not be empty".to_string(),
            ));
        }

        let session_file = match std::env::var("HUB_SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let mut path = std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("."));
                path.push(DEFAULT_SESSION_FILE);
                path
            }
        };

        Ok(HubConfig {
            base_url,
            session_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_uses_defaults() {
        unsafe {
            std::env::remove_var("HUB_API_BASE_URL");
            std::env::remove_var("HUB_SESSION_FILE");
        }

        let config = HubConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.session_file.ends_with(".cancervisionhub/session.json"));
    }

    #[test]
    #[serial]
    fn from_env_strips_trailing_slash() {
        unsafe {
            std::env::set_var("HUB_API_BASE_URL", "https://hub.example.com/");
            std::env::set_var("HUB_SESSION_FILE", "/tmp/hub-session.json");
        }

        let config = HubConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://hub.example.com");
        assert_eq!(config.session_file, PathBuf::from("/tmp/hub-session.json"));

        unsafe {
            std::env::remove_var("HUB_API_BASE_URL");
            std::env::remove_var("HUB_SESSION_FILE");
        }
    }
}

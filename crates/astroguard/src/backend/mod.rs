//! Models for the remote detection backend: endpoint URLs, the liveness
//! status and the video-upload workflow. The HTTP calls themselves live in
//! the web bridge.

pub mod status;
pub mod upload;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives. Endpoints are derived from the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GET: JSON array of asteroid records.
    pub fn asteroids_url(&self) -> String {
        self.join("/asteroids")
    }

    /// POST multipart: video in, annotated video out.
    pub fn detect_upload_url(&self) -> String {
        self.join("/detect/upload")
    }

    /// GET: liveness probe.
    pub fn probe_url(&self) -> String {
        self.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let cfg = BackendConfig::default();
        assert_eq!(cfg.asteroids_url(), "http://localhost:8000/asteroids");
        assert_eq!(cfg.detect_upload_url(), "http://localhost:8000/detect/upload");
        assert_eq!(cfg.probe_url(), "http://localhost:8000/");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let cfg = BackendConfig::new("https://example.org/api/");
        assert_eq!(cfg.asteroids_url(), "https://example.org/api/asteroids");
    }
}

//! Gateway Configuration

use std::time::Duration;

/// Prediction gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the external prediction service
    pub base_url: String,
    /// Per-request timeout; on expiry the gateway falls back, it never
    /// hangs the caller
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Endpoint for prediction requests
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url_handles_trailing_slash() {
        assert_eq!(
            GatewayConfig::new("http://model:8000/").predict_url(),
            "http://model:8000/predict"
        );
        assert_eq!(
            GatewayConfig::default().predict_url(),
            "http://localhost:8000/predict"
        );
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        assert_eq!(GatewayConfig::default().timeout, Duration::from_secs(30));
    }
}

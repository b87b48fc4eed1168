//! Frontend configuration module
//!
//! Resolves frontend-specific URLs and settings at build time.

/// Frontend configuration for backend and external URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the Joja Garden REST backend.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("JOJA_API_URL")
                .unwrap_or("http://localhost:8000")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_a_http_base() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(
            FrontendConfig::new().api_base_url(),
            FrontendConfig::default().api_base_url()
        );
    }
}

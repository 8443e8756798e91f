use crate::adapters::chat_client::{DEFAULT_CHAT_ENDPOINT, DEFAULT_MODEL};
use crate::domain::ports::{ConfigProvider, ServiceMode};
use crate::utils::error::{BaziError, Result};
use std::env;

/// Hosted analyze function settings, read from the environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BaziError::MissingConfigError {
                field: "DEEPSEEK_API_KEY".to_string(),
            })?;

        Ok(Self {
            api_key,
            endpoint: env::var("DEEPSEEK_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_CHAT_ENDPOINT.to_string()),
            model: env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_seconds: env::var("DEEPSEEK_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn service_mode(&self) -> ServiceMode {
        ServiceMode::Chat
    }

    fn service_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        Some(&self.api_key)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f32 {
        0.7
    }

    fn max_tokens(&self) -> u32 {
        2000
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn session_dir(&self) -> &str {
        ""
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("DEEPSEEK_ENDPOINT", &self.endpoint)?;
        validate_non_empty_string("DEEPSEEK_MODEL", &self.model)?;
        validate_range("DEEPSEEK_TIMEOUT_SECONDS", self.timeout_seconds, 1, 900)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    // 環境變數為全域狀態，集中在同一個測試裡
    #[test]
    fn test_from_env() {
        env::remove_var("DEEPSEEK_API_KEY");
        assert!(matches!(
            LambdaConfig::from_env(),
            Err(BaziError::MissingConfigError { .. })
        ));

        env::set_var("DEEPSEEK_API_KEY", "sk-lambda");
        env::set_var("DEEPSEEK_MODEL", "deepseek-reasoner");
        let config = LambdaConfig::from_env().unwrap();
        assert_eq!(config.api_key(), Some("sk-lambda"));
        assert_eq!(config.model(), "deepseek-reasoner");
        assert_eq!(config.service_endpoint(), DEFAULT_CHAT_ENDPOINT);
        assert!(config.validate().is_ok());

        env::remove_var("DEEPSEEK_API_KEY");
        env::remove_var("DEEPSEEK_MODEL");
    }
}

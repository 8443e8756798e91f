use crate::adapters::chat_client::{DEFAULT_CHAT_ENDPOINT, DEFAULT_MODEL};
use crate::domain::ports::{ConfigProvider, ServiceMode};
use crate::utils::error::{BaziError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "bazi-report.toml";
pub const DEFAULT_FUNCTION_ENDPOINT: &str = "http://127.0.0.1:8888/.netlify/functions/analyze";
pub const DEFAULT_SESSION_DIR: &str = "./session";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub mode: ServiceMode,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BaziError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BaziError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEEPSEEK_API_KEY})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BaziError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.service.mode != ServiceMode::Offline {
            crate::utils::validation::validate_url("service.endpoint", self.service_endpoint())?;
        }

        if self.service.mode == ServiceMode::Chat && self.api_key().is_none() {
            return Err(BaziError::MissingConfigError {
                field: "service.api_key".to_string(),
            });
        }

        crate::utils::validation::validate_range(
            "service.temperature",
            self.temperature(),
            0.0,
            2.0,
        )?;
        crate::utils::validation::validate_range("service.max_tokens", self.max_tokens(), 1, 8192)?;
        crate::utils::validation::validate_range(
            "service.timeout_seconds",
            self.timeout_seconds(),
            1,
            600,
        )?;
        crate::utils::validation::validate_path("session.dir", self.session_dir())?;

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }
}

impl ConfigProvider for TomlConfig {
    fn service_mode(&self) -> ServiceMode {
        self.service.mode
    }

    fn service_endpoint(&self) -> &str {
        match (&self.service.endpoint, self.service.mode) {
            (Some(endpoint), _) => endpoint.as_str(),
            (None, ServiceMode::Chat) => DEFAULT_CHAT_ENDPOINT,
            (None, _) => DEFAULT_FUNCTION_ENDPOINT,
        }
    }

    /// An unresolved `${VAR}` placeholder counts as no key.
    fn api_key(&self) -> Option<&str> {
        self.service
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }

    fn model(&self) -> &str {
        self.service.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    fn temperature(&self) -> f32 {
        self.service.temperature.unwrap_or(0.7)
    }

    fn max_tokens(&self) -> u32 {
        self.service.max_tokens.unwrap_or(2000)
    }

    fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(60)
    }

    fn session_dir(&self) -> &str {
        self.session.dir.as_deref().unwrap_or(DEFAULT_SESSION_DIR)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[service]
mode = "chat"
api_key = "sk-test"
model = "deepseek-reasoner"
temperature = 0.3

[session]
dir = "./tmp-session"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.service_mode(), ServiceMode::Chat);
        assert_eq!(config.service_endpoint(), DEFAULT_CHAT_ENDPOINT);
        assert_eq!(config.api_key(), Some("sk-test"));
        assert_eq!(config.model(), "deepseek-reasoner");
        assert_eq!(config.max_tokens(), 2000);
        assert_eq!(config.session_dir(), "./tmp-session");
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.service_mode(), ServiceMode::Function);
        assert_eq!(config.service_endpoint(), DEFAULT_FUNCTION_ENDPOINT);
        assert_eq!(config.timeout_seconds(), 60);
        assert_eq!(config.session_dir(), DEFAULT_SESSION_DIR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BAZI_TEST_API_KEY", "sk-from-env");

        let toml_content = r#"
[service]
mode = "chat"
api_key = "${BAZI_TEST_API_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("sk-from-env"));

        std::env::remove_var("BAZI_TEST_API_KEY");
    }

    #[test]
    fn test_unresolved_api_key_fails_validation() {
        let toml_content = r#"
[service]
mode = "chat"
api_key = "${BAZI_TEST_UNSET_KEY_4417}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), None);
        assert!(matches!(
            config.validate(),
            Err(BaziError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[service]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[service]
mode = "offline"
endpoint = "invalid-url"
temperature = 3.5
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let result = TomlConfig::from_toml_str("[service]\nmode = \"carrier-pigeon\"\n");
        assert!(matches!(result, Err(BaziError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[service]
mode = "offline"

[session]
dir = "/tmp/bazi"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.service_mode(), ServiceMode::Offline);
        assert_eq!(config.session_dir(), "/tmp/bazi");

        let missing = TomlConfig::load_or_default("/nonexistent/bazi-report.toml").unwrap();
        assert_eq!(missing.service_mode(), ServiceMode::Function);
    }
}

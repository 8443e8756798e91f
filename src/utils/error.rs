use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaziError {
    #[error("Narrative service request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Narrative service returned status {status}: {message}")]
    ServiceStatusError { status: u16, message: String },

    #[error("Narrative service returned a malformed body: {message}")]
    MalformedResponseError { message: String },

    #[error("Narrative service is disabled")]
    ServiceDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BaziError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BaziError::ServiceDisabled => ErrorSeverity::Low,
            BaziError::HttpError(_)
            | BaziError::ServiceStatusError { .. }
            | BaziError::MalformedResponseError { .. } => ErrorSeverity::Medium,
            BaziError::ValidationError { .. }
            | BaziError::ConfigError { .. }
            | BaziError::InvalidConfigValueError { .. }
            | BaziError::MissingConfigError { .. } => ErrorSeverity::High,
            BaziError::IoError(_) | BaziError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BaziError::ValidationError { message, .. } => message.clone(),
            BaziError::ConfigError { message } => format!("配置錯誤: {}", message),
            BaziError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置項 {} 無效: {}", field, reason)
            }
            BaziError::MissingConfigError { field } => format!("缺少配置項: {}", field),
            BaziError::IoError(e) => format!("讀寫檔案失敗: {}", e),
            BaziError::SerializationError(e) => format!("資料格式錯誤: {}", e),
            BaziError::HttpError(_)
            | BaziError::ServiceStatusError { .. }
            | BaziError::MalformedResponseError { .. } => "分析服務暫時無法使用".to_string(),
            BaziError::ServiceDisabled => "分析服務未啟用，使用內建模板".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BaziError::ValidationError { .. } => "請檢查輸入的出生資料後重試",
            BaziError::ConfigError { .. }
            | BaziError::InvalidConfigValueError { .. }
            | BaziError::MissingConfigError { .. } => "請檢查配置檔案與環境變數",
            BaziError::IoError(_) => "請確認會話目錄存在且可寫入",
            BaziError::SerializationError(_) => "請清除會話目錄後重新提交",
            BaziError::HttpError(_)
            | BaziError::ServiceStatusError { .. }
            | BaziError::MalformedResponseError { .. } => "請稍後重試或改用 offline 模式",
            BaziError::ServiceDisabled => "如需完整分析，請設定 service.mode",
        }
    }
}

pub type Result<T> = std::result::Result<T, BaziError>;

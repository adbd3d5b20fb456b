use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Failed to load font '{path}': {reason}")]
    FontLoadError { path: String, reason: String },

    #[error("Failed to write image '{path}': {reason}")]
    ImageWriteError { path: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Font,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ReceiptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReceiptError::FontLoadError { .. } => ErrorCategory::Font,
            ReceiptError::ImageWriteError { .. } => ErrorCategory::Output,
            ReceiptError::ConfigValidationError { .. }
            | ReceiptError::InvalidConfigValueError { .. }
            | ReceiptError::SerializationError(_) => ErrorCategory::Configuration,
            ReceiptError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Font => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應到行程的退出碼，每一類錯誤各自不同
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Font => 2,
            ErrorCategory::Output => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReceiptError::FontLoadError { path, reason } => {
                format!("Error loading font {}: {}", path, reason)
            }
            ReceiptError::ImageWriteError { path, reason } => {
                format!("Error saving image {}: {}", path, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "檢查設定檔格式與欄位值",
            ErrorCategory::Font => "確認字型檔存在且為 TrueType/OpenType 格式 (--font)",
            ErrorCategory::Output => "確認輸出路徑可寫入且磁碟空間足夠 (--output)",
            ErrorCategory::System => "檢查檔案權限後重試",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;

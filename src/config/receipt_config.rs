use crate::core::layout::Layout;
use crate::domain::model::{LineItem, Merchant, ReceiptContext, DEFAULT_FOOTER};
use crate::utils::error::{ReceiptError, Result};
use crate::utils::validation::{validate_open_range, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FONT_PATH: &str = "fonts/MiSans-Normal.ttf";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_OUTPUT_PATH: &str = "receipt.png";
pub const DATE_FORMAT: &str = "%Y年%m月%d日";

const MAX_FONT_SIZE: f32 = 512.0;

/// 小票的完整設定。所有區塊都可省略，省略時沿用內建的示例小票
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    pub merchant: MerchantConfig,
    #[serde(default = "TransactionConfig::undated")]
    pub transaction: TransactionConfig,
    pub items: Vec<LineItem>,
    pub layout: Layout,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantConfig {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    /// 檔案中省略時為 None，渲染時使用今天的日期
    #[serde(default)]
    pub date: Option<String>,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub font_path: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            merchant: MerchantConfig::default(),
            transaction: TransactionConfig::default(),
            items: vec![
                LineItem::new("商品一", 9.99, 2),
                LineItem::new("商品二", 4.50, 1),
                LineItem::new("商品三", 3.00, 3),
            ],
            layout: Layout::default(),
            output: OutputConfig::default(),
            monitoring: None,
        }
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            name: "示例店铺".to_string(),
            phone: "123-45678901".to_string(),
            address: "北京市某某路123号".to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            date: Some("2024年12月17日".to_string()),
            id: "123456789".to_string(),
        }
    }
}

impl TransactionConfig {
    /// 設定檔未給 `[transaction]` 時使用：日期留空，渲染時取今天
    fn undated() -> Self {
        Self {
            date: None,
            ..Self::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            font_path: DEFAULT_FONT_PATH.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ReceiptConfig {
    /// 從檔案載入設定：`.json` 以 JSON 解析，其餘一律視為 TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ReceiptError::IoError)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReceiptError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(serde_json::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${STORE_PHONE})，未設定的保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReceiptError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 轉成渲染用的小票內容
    pub fn to_context(&self) -> ReceiptContext {
        let date = self
            .transaction
            .date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format(DATE_FORMAT).to_string());

        ReceiptContext {
            merchant: Merchant {
                name: self.merchant.name.clone(),
                phone: self.merchant.phone.clone(),
                address: self.merchant.address.clone(),
            },
            date,
            transaction_id: self.transaction.id.clone(),
            items: self.items.clone(),
            footer: self.merchant.footer.clone(),
        }
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn font_path(&self) -> &str {
        &self.output.font_path
    }

    pub fn font_size(&self) -> f32 {
        self.output.font_size
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for ReceiptConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_path("output.font_path", &self.output.font_path)?;
        validate_open_range("output.font_size", self.output.font_size, 0.0, MAX_FONT_SIZE)?;
        self.layout.validate()?;

        // 商品資料不做檢查：空清單或數量為零都照常輸出
        Ok(())
    }
}

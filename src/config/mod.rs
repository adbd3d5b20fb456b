pub mod receipt_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use receipt_config::{MonitoringConfig, ReceiptConfig};

/// 命令列參數；不帶任何參數時輸出內建的示例小票
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "receipt-render")]
#[command(about = "Render a fixed-layout receipt to a PNG image")]
pub struct CliConfig {
    /// Receipt data file (TOML, or JSON when the extension is .json)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output PNG path (overrides output.path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Font file path (overrides output.font_path)
    #[arg(long)]
    pub font: Option<String>,

    /// Font size in points (overrides output.font_size)
    #[arg(long)]
    pub font_size: Option<f32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory usage and timing per render phase")]
    pub monitor: bool,

    /// Print a text preview of the draw sequence without writing an image
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn load_receipt_config(&self) -> Result<ReceiptConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading receipt data from: {}", path);
                ReceiptConfig::from_file(path)?
            }
            None => ReceiptConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(font) = &self.font {
            config.output.font_path = font.clone();
        }
        if let Some(size) = self.font_size {
            config.output.font_size = size;
        }
        if self.monitor {
            config.monitoring = Some(MonitoringConfig { enabled: true });
        }

        tracing::debug!("Effective config: {:?}", config);
        Ok(config)
    }
}

use crate::adapters::raster::RasterCanvas;
use crate::config::receipt_config::ReceiptConfig;
use crate::core::renderer::{ReceiptRenderer, RenderSummary};
use crate::domain::model::Color;
use crate::domain::ports::{Storage, Surface};
use crate::utils::error::{ReceiptError, Result};
use crate::utils::monitor::RenderMonitor;
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    pub summary: RenderSummary,
}

pub struct RenderEngine<S: Storage> {
    storage: S,
    monitor: RenderMonitor,
}

impl<S: Storage> RenderEngine<S> {
    pub fn new(storage: S) -> Self {
        Self::new_with_monitoring(storage, false)
    }

    pub fn new_with_monitoring(storage: S, monitor_enabled: bool) -> Self {
        Self {
            storage,
            monitor: RenderMonitor::new(monitor_enabled),
        }
    }

    /// 驗證 → 畫布 → 字型 → 繪製 → PNG 編碼 → 寫檔
    ///
    /// 字型載入失敗時不會產生任何檔案；只有完整編碼後的 PNG 才會寫出。
    pub fn run(&self, config: &ReceiptConfig) -> Result<RenderOutcome> {
        config.validate()?;
        let layout = config.layout.clone();
        let receipt = config.to_context();
        tracing::info!(
            "Rendering {}x{} receipt with {} items",
            layout.width,
            layout.height,
            receipt.items.len()
        );

        let mut canvas = RasterCanvas::new(layout.width, layout.height);
        canvas.clear(Color::WHITE);

        canvas.load_font_face(config.font_path(), config.font_size())?;
        tracing::debug!("Loaded font {} at {}pt", config.font_path(), config.font_size());
        self.monitor.log_stats("Font loaded");

        let renderer = ReceiptRenderer::new(layout);
        let summary = renderer.render(&mut canvas, &receipt);
        tracing::debug!(
            "Drew {} rows and {} dash segments, total {:.2}",
            summary.item_rows,
            summary.dash_segments,
            summary.total
        );
        self.monitor.log_stats("Drawn");

        let output_path = config.output_path().to_string();
        let png = canvas
            .encode_png()
            .map_err(|e| ReceiptError::ImageWriteError {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;

        self.storage
            .write_file(&output_path, &png)
            .map_err(|e| ReceiptError::ImageWriteError {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;
        self.monitor.log_stats("Saved");
        self.monitor.log_final_stats();

        Ok(RenderOutcome {
            output_path,
            width: canvas.width(),
            height: canvas.height(),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_missing_font_writes_nothing() {
        let engine = RenderEngine::new(MemoryStorage::default());
        let mut config = ReceiptConfig::default();
        config.output.font_path = "/nonexistent/fonts/MiSans-Normal.ttf".to_string();

        let err = engine.run(&config).unwrap_err();
        assert!(matches!(err, ReceiptError::FontLoadError { .. }));
        assert!(engine.storage.files.borrow().is_empty());
    }

    #[test]
    fn test_oversized_canvas_is_config_error() {
        let engine = RenderEngine::new(MemoryStorage::default());
        let mut config = ReceiptConfig::default();
        config.layout.width = u32::MAX;
        config.layout.height = u32::MAX;

        let err = engine.run(&config).unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidConfigValueError { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(engine.storage.files.borrow().is_empty());
    }

    #[test]
    fn test_font_garbage_is_font_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let font_path = dir.path().join("broken.ttf");
        std::fs::write(&font_path, b"not a font at all").unwrap();

        let engine = RenderEngine::new(MemoryStorage::default());
        let mut config = ReceiptConfig::default();
        config.output.font_path = font_path.display().to_string();

        let err = engine.run(&config).unwrap_err();
        match err {
            ReceiptError::FontLoadError { path, .. } => assert!(path.ends_with("broken.ttf")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_storage_failure_is_image_write_error() {
        let Some(font) = crate::test_support::find_test_font() else {
            return;
        };
        let engine = RenderEngine::new(FailingStorage);
        let mut config = ReceiptConfig::default();
        config.output.font_path = font.display().to_string();

        let err = engine.run(&config).unwrap_err();
        assert!(matches!(err, ReceiptError::ImageWriteError { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}

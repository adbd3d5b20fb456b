pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{raster::RasterCanvas, recording::RecordingSurface, storage::LocalStorage};
pub use config::receipt_config::ReceiptConfig;
pub use core::{
    engine::{RenderEngine, RenderOutcome},
    layout::Layout,
    renderer::{ReceiptRenderer, RenderSummary},
};
pub use domain::model::{LineItem, Merchant, ReceiptContext};
pub use utils::error::{ReceiptError, Result};

#[cfg(test)]
pub(crate) mod test_support;

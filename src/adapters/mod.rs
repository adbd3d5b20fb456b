// Adapters layer: concrete implementations of the domain ports.

pub mod raster;
pub mod recording;
pub mod storage;

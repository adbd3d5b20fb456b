// Domain layer: receipt models and ports (drawing surface, storage).

pub mod model;
pub mod ports;

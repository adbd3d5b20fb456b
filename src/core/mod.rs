pub mod engine;
pub mod layout;
pub mod renderer;

pub use crate::domain::model::{LineItem, ReceiptContext};
pub use crate::domain::ports::{Storage, Surface};
pub use crate::utils::error::Result;

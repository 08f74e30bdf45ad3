// src/lib.rs
pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use api::app_router;
pub use error::{AppError, AppResult};

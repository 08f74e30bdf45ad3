// consent-extensions/src/features/consent/mod.rs

pub mod dto;
pub mod handler;
pub mod services;

pub use handler::consent_router;

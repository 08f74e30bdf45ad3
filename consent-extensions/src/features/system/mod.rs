pub mod handler;

pub use handler::system_router;

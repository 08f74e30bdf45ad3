pub mod assembler;
pub mod decoder;
pub mod purpose;

pub use assembler::{build_error, build_success};
pub use decoder::{decode, recover_request_id, DecodeError};
pub use purpose::extract_purposes;

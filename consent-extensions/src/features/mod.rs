pub mod consent;
pub mod system;

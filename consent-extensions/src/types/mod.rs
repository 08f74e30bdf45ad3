pub mod nullable;

pub use nullable::{null_as_default, object_or_null};

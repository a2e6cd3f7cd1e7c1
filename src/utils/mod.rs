//! Request extractors shared by the HTTP handlers.

mod validate;

pub use validate::{PathId, ValidatedJson};

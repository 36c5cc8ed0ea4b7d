//! Domain types: error taxonomy and directory conventions.

mod error;
pub mod paths;

pub use error::AppError;

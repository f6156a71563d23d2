//! Module that describe domain entities and errors.
mod entities;
mod errors;

pub use entities::CsvUpload;
pub use entities::ImportConfig;
pub use entities::ImportResult;
pub use errors::*;

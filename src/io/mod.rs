mod http;

pub use http::HttpUploader;

#[cfg(test)]
use mockall::automock;

use crate::CsvUpload;
use crate::ImportConfig;
use crate::ImportError;
use crate::ImportResult;

/// Sends a CSV upload to the import endpoint named by the configuration.
///
/// Implementations perform exactly one request. Transport problems, including
/// a body that is not JSON, are reported as [`ImportError::Transport`]; any
/// answer that parsed is returned as an [`ImportResult`] whatever its status.
#[cfg_attr(test, automock)]
pub trait Uploader {
    fn upload(&self, config: &ImportConfig, csv: CsvUpload) -> Result<ImportResult, ImportError>;
}

//! This module runs one import: it checks the input file, hands it to some `Uploader`, and
//! reports the outcome as human-readable text on some `Write` sink.
//!
//! Every outcome, failures included, is reported on the same sink. The caller only has to turn
//! the returned `Result` into a process exit code.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = ImportConfig::from_env();
//! let mut invoker = ImportInvoker::new(config, HttpUploader::new()?, std::io::stdout());
//! invoker.import_listings(Path::new("listings.csv"))?;
//! ```
use std::io::Write;
use std::path::Path;

use crate::{CsvUpload, ImportConfig, ImportError, ImportResult, Uploader};

/// Orchestrates a single upload of a CSV file to the import endpoint.
#[derive(Debug)]
pub struct ImportInvoker<U, W> {
    config: ImportConfig,
    uploader: U,
    out: W,
}

impl<U, W> ImportInvoker<U, W>
where
    U: Uploader,
    W: Write,
{
    pub fn new(config: ImportConfig, uploader: U, out: W) -> Self {
        ImportInvoker {
            config,
            uploader,
            out,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Uploads the CSV file at `path` and reports the outcome.
    ///
    /// # Returns
    ///
    /// The endpoint's answer when the HTTP status is 2xx and the body carries a truthy `success`
    /// field. Any other outcome is an `ImportError`, already reported on the sink.
    ///
    /// # Errors
    ///
    /// * `ImportError::FileNotFound` if `path` is not an existing file. No request is made.
    /// * `ImportError::FileRead` if the file exists but cannot be read.
    /// * `ImportError::Transport` if the request fails or the answer is not JSON.
    /// * `ImportError::Rejected` for any other answer.
    /// * `ImportError::Output` if the report cannot be written to the sink.
    pub fn import_listings(&mut self, path: &Path) -> Result<ImportResult, ImportError> {
        match self.run(path) {
            Ok(result) => {
                writeln!(self.out, "✅ Success!")?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", result.pretty_body())?;
                Ok(result)
            }
            Err(err) => {
                self.report_failure(&err)?;
                Err(err)
            }
        }
    }

    fn run(&mut self, path: &Path) -> Result<ImportResult, ImportError> {
        if !path.is_file() {
            return Err(ImportError::FileNotFound(path.to_path_buf()));
        }

        self.report_progress(path)?;

        let csv = CsvUpload::read(path).map_err(|source| ImportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let result = self.uploader.upload(&self.config, csv)?;
        if result.is_success() {
            Ok(result)
        } else {
            Err(ImportError::Rejected(result))
        }
    }

    fn report_progress(&mut self, path: &Path) -> std::io::Result<()> {
        writeln!(self.out, "🚀 Importing listing pages...")?;
        writeln!(self.out, "   File: {}", path.display())?;
        writeln!(self.out, "   Organization: {}", self.config.organization_id())?;
        writeln!(self.out, "   Tracking ID: {}", self.config.tracking_id())?;
        writeln!(self.out)
    }

    fn report_failure(&mut self, err: &ImportError) -> std::io::Result<()> {
        match err {
            ImportError::FileNotFound(_) | ImportError::FileRead { .. } => {
                writeln!(self.out, "❌ Error: {}", err.chain())
            }
            ImportError::Transport(_) => writeln!(self.out, "❌ Request failed: {}", err.chain()),
            ImportError::Output(_) => Ok(()),
            ImportError::Rejected(result) => {
                writeln!(self.out, "❌ Error (HTTP {})", result.status())?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", result.pretty_body())
            }
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::ImportResult;

/// Boxed error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("could not read CSV file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Transport(#[source] BoxError),
    #[error("import rejected (HTTP {})", .0.status())]
    Rejected(ImportResult),
    #[error("could not write report")]
    Output(#[from] std::io::Error),
}

impl From<reqwest::Error> for ImportError {
    fn from(e: reqwest::Error) -> Self {
        ImportError::Transport(Box::new(e))
    }
}

impl ImportError {
    /// Renders the error followed by every underlying cause, joined by `": "`.
    ///
    /// reqwest keeps the interesting part (connection refused, dns failure) in
    /// the source chain, so `Display` alone is not enough for diagnostics.
    pub fn chain(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = std::error::Error::source(self);
        // Transport displays its inner error, skip it so it is not repeated.
        if let ImportError::Transport(_) = self {
            source = source.and_then(std::error::Error::source);
        }
        while let Some(cause) = source {
            rendered.push_str(": ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Error, Debug)]
    #[error("error sending request")]
    struct Outer(#[source] io::Error);

    #[test]
    fn test_chain_includes_underlying_transport_text() {
        let inner = io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = ImportError::Transport(Box::new(Outer(inner)));
        assert_eq!(err.chain(), "error sending request: Connection refused");
    }

    #[test]
    fn test_chain_of_file_read_error() {
        let err = ImportError::FileRead {
            path: PathBuf::from("listings.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            err.chain(),
            "could not read CSV file listings.csv: permission denied"
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let err = ImportError::FileNotFound(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "CSV file not found: missing.csv");
    }
}

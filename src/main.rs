use anyhow::Context;
use listing_import::{
    config::DEFAULT_CSV_PATH, HttpUploader, ImportConfig, ImportError, ImportInvoker,
};
use log::error;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

    let config = ImportConfig::from_env();
    let uploader = HttpUploader::new().context("Failed to build HTTP client")?;
    let mut invoker = ImportInvoker::new(config, uploader, std::io::stdout().lock());

    match invoker.import_listings(&path) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(ImportError::Output(e)) => {
            error!("Error writing import report: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

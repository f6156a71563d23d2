use std::fmt;

use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde_json::Value;

use super::Uploader;
use crate::CsvUpload;
use crate::ImportConfig;
use crate::ImportError;
use crate::ImportResult;

const FILE_FIELD: &str = "file";
const CSV_MIME: &str = "text/csv";

/// [`Uploader`] backed by a blocking reqwest client.
pub struct HttpUploader {
    client: Client,
}

impl fmt::Debug for HttpUploader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUploader").finish()
    }
}

impl HttpUploader {
    /// Creates an uploader whose requests never time out.
    pub fn new() -> Result<Self, ImportError> {
        let client = Client::builder()
            .timeout(None)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpUploader { client })
    }

    fn form(config: &ImportConfig, csv: CsvUpload) -> Result<Form, ImportError> {
        let file_name = csv.file_name().to_string();
        let file = Part::bytes(csv.into_contents())
            .file_name(file_name)
            .mime_str(CSV_MIME)?;
        let form = config
            .form_fields()
            .into_iter()
            .fold(Form::new().part(FILE_FIELD, file), |form, (name, value)| {
                form.text(name, value.to_string())
            });
        Ok(form)
    }
}

impl Uploader for HttpUploader {
    fn upload(&self, config: &ImportConfig, csv: CsvUpload) -> Result<ImportResult, ImportError> {
        debug!(
            "POST {} with {:?} for organization {}",
            config.api_endpoint(),
            csv,
            config.organization_id()
        );
        let form = Self::form(config, csv)?;
        let response = self
            .client
            .post(config.api_endpoint())
            .multipart(form)
            .send()?;
        let status = response.status();
        debug!("import endpoint answered HTTP {}", status);
        let body: Value = response.json()?;
        Ok(ImportResult::new(status.as_u16(), body))
    }
}

use std::fmt;
use std::path::Path;

use serde_json::Value;
use typed_builder::TypedBuilder;

/// Settings for one import run. Every field always holds a value, see
/// [`ImportConfig::from_env`](crate::ImportConfig::from_env).
#[derive(Clone, PartialEq, Eq, TypedBuilder)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct ImportConfig {
    #[builder(setter(into))]
    organization_id: String,
    #[builder(setter(into))]
    tracking_id: String,
    #[builder(setter(into))]
    access_token: String,
    #[builder(setter(into))]
    platform_url: String,
    #[builder(setter(into))]
    api_endpoint: String,
}

impl ImportConfig {
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Text fields sent alongside the file, in wire order.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("organizationId", self.organization_id.as_str()),
            ("trackingId", self.tracking_id.as_str()),
            ("accessToken", self.access_token.as_str()),
            ("platformUrl", self.platform_url.as_str()),
        ]
    }
}

// The token must never end up in logs.
impl fmt::Debug for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportConfig")
            .field("organization_id", &self.organization_id)
            .field("tracking_id", &self.tracking_id)
            .field("access_token", &"***")
            .field("platform_url", &self.platform_url)
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

/// CSV content read from disk, ready to be sent as the `file` part.
#[derive(Clone, PartialEq, Eq)]
pub struct CsvUpload {
    file_name: String,
    contents: Vec<u8>,
}

impl fmt::Debug for CsvUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CsvUpload [{} - {} bytes]", self.file_name, self.contents.len())
    }
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Self {
        CsvUpload {
            file_name: file_name.into(),
            contents,
        }
    }

    /// Reads the whole file. The handle is closed before this returns.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(CsvUpload::new(file_name, contents))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }
}

/// What the import endpoint answered: HTTP status plus the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    status: u16,
    body: Value,
}

impl ImportResult {
    pub fn new(status: u16, body: Value) -> Self {
        ImportResult { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// A 2xx status and a truthy `success` field on an object body.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
            && self
                .body
                .as_object()
                .and_then(|object| object.get("success"))
                .map_or(false, is_truthy)
    }

    /// The body as indented JSON, for display.
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
